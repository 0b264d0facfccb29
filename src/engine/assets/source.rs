// Asynchronous asset sources

use super::{ArenaAsset, CharacterAsset};

/// A source of character and arena catalog entries
///
/// Loading is asynchronous and side-effect-free from the simulation's
/// perspective. A source that fails to resolve surfaces that to the caller
/// of `MatchController::load`, never to `update`.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    /// Load all character catalog entries
    async fn load_character_assets(&self) -> Vec<CharacterAsset>;

    /// Load all arena catalog entries
    async fn load_arena_assets(&self) -> Vec<ArenaAsset>;
}

/// Asset source backed by catalog entries already in memory
///
/// The async methods resolve immediately. Used by the scripted demo and as
/// the test double for the match controller.
#[derive(Debug, Default)]
pub struct InMemoryAssets {
    characters: Vec<CharacterAsset>,
    arenas: Vec<ArenaAsset>,
}

impl InMemoryAssets {
    pub fn new(characters: Vec<CharacterAsset>, arenas: Vec<ArenaAsset>) -> Self {
        Self { characters, arenas }
    }
}

impl AssetSource for InMemoryAssets {
    async fn load_character_assets(&self) -> Vec<CharacterAsset> {
        self.characters.clone()
    }

    async fn load_arena_assets(&self) -> Vec<ArenaAsset> {
        self.arenas.clone()
    }
}
