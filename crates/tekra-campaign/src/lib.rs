//! Content and progression for Tekra.
//!
//! Read-only catalogs (abilities, fighters, raid bosses, arcade waves,
//! world events, story chapters) loaded from JSON and handed to the engine,
//! plus the progress sink victories are reported to.

pub mod catalog;
pub mod content;
pub mod difficulty;
pub mod error;
pub mod progress;
pub mod story;

pub use catalog::{AbilityCatalog, ContentLibrary, FighterCatalog};
pub use error::CatalogError;
pub use progress::{PlayerProgress, ProgressSink};
pub use tekra_core as core;

#[cfg(test)]
mod tests;
