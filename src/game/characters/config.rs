// Per-character tuning derived from the asset catalog

use crate::engine::assets::CharacterAsset;

/// Immutable per-character tuning
///
/// Created once when a match resolves its character assets and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct CharacterConfig {
    pub id: String,
    pub display_name: String,
    /// Health a round starts with
    pub max_health: f32,
    /// Horizontal movement speed (units/second)
    pub move_speed: f32,
    /// Vertical velocity applied on jump
    pub jump_strength: f32,
    /// Damage dealt by a light attack
    pub light_damage: f32,
    /// Damage dealt by a heavy attack
    pub heavy_damage: f32,
    /// Horizontal reach of an attack
    pub attack_range: f32,
}

impl CharacterConfig {
    /// Build the standard tuning for a catalog entry
    ///
    /// All fighters currently share the same baseline numbers; identity
    /// comes from the asset.
    pub fn from_asset(asset: &CharacterAsset) -> Self {
        Self {
            id: asset.id.clone(),
            display_name: asset.display_name.clone(),
            max_health: 100.0,
            move_speed: 8.0,
            jump_strength: 10.0,
            light_damage: 10.0,
            heavy_damage: 20.0,
            attack_range: 1.5,
        }
    }
}
