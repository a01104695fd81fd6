//! Errors raised while loading content.

use std::path::PathBuf;

/// A catalog could not be built. Loading is the only fatal path: the engine
/// never starts an encounter without valid catalogs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{0} catalog is empty")]
    Empty(&'static str),
}
