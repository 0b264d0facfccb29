// Arena bounds and selection

use glam::Vec2;

use crate::core::math::clamp_vec2;
use crate::engine::assets::{ArenaAsset, AssetError};

/// A rectangular fighting arena, centered at x = 0 with the floor at y = 0
#[derive(Debug, Clone)]
pub struct Arena {
    asset: ArenaAsset,
}

impl Arena {
    pub fn new(asset: ArenaAsset) -> Self {
        Self { asset }
    }

    /// The catalog entry this arena was built from
    pub fn asset(&self) -> &ArenaAsset {
        &self.asset
    }

    /// Clamp a position into the arena bounds
    pub fn clamp_position(&self, position: Vec2) -> Vec2 {
        let half_width = self.asset.bounds.width / 2.0;
        clamp_vec2(
            position,
            Vec2::new(-half_width, 0.0),
            Vec2::new(half_width, self.asset.bounds.height),
        )
    }
}

/// Picks an arena out of the loaded catalog
#[derive(Debug)]
pub struct ArenaSelector {
    arenas: Vec<ArenaAsset>,
}

impl ArenaSelector {
    pub fn new(arenas: Vec<ArenaAsset>) -> Self {
        Self { arenas }
    }

    /// Get the arena with the given id, falling back to the first registered
    /// one for unknown ids
    ///
    /// Errors only when the catalog holds no arenas at all.
    pub fn by_id(&self, id: &str) -> Result<Arena, AssetError> {
        let asset = self
            .arenas
            .iter()
            .find(|a| a.id == id)
            .or_else(|| self.arenas.first())
            .ok_or(AssetError::NoArenas)?;
        Ok(Arena::new(asset.clone()))
    }
}
