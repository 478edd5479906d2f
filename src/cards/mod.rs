//! Card system: identifiers, static definitions, catalog and kingdoms.
//!
//! ## Key Types
//!
//! - `CardId`: One variant per card; what zones actually store
//! - `CardDefinition`: Static card data (cost, categories, numeric effects)
//! - `Category`: Treasure / Action / Reaction / Victory / Curse
//! - `Kingdom`: A preset of ten kingdom piles
//!
//! Cards are values. Two Coppers are the same card; nothing tracks
//! individual copies.

pub mod catalog;
pub mod category;
pub mod definition;
pub mod kingdom;

pub use category::Category;
pub use definition::{CardDefinition, CardId};
pub use kingdom::{Kingdom, KingdomChoice};
