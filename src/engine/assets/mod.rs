// Asset catalog system
//
// Catalog entries describe the characters and arenas a match can load.
// Sources resolve asynchronously; the in-memory source backs tests and the
// scripted demo.

mod catalog;
mod source;

pub use catalog::{ArenaAsset, ArenaBounds, CharacterAsset};
pub use source::{AssetSource, InMemoryAssets};

/// Asset resolution errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    #[error("No arenas available")]
    NoArenas,
}
