//! Card catalog and deck assembly
//!
//! Card definitions are fixed data compiled into the crate, not loaded at
//! runtime.

pub mod catalog;
pub mod deck;
pub mod templates;

pub use catalog::{Catalog, STANDARD_DECK_SIZE};
pub use deck::DeckStats;
pub use templates::{CardTemplate, TemplateKind, CARD_TEMPLATES};
