// Catalog entry types for loadable characters and arenas

/// Rectangle bounds of an arena, centered at x = 0 with the floor at y = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    /// Horizontal extent in world units
    pub width: f32,
    /// Vertical extent in world units
    pub height: f32,
}

/// Catalog entry for a playable character
///
/// The prefab and animation references are opaque to the simulation; only
/// the id and display name feed into match setup.
#[derive(Debug, Clone)]
pub struct CharacterAsset {
    pub id: String,
    pub display_name: String,
    pub prefab_path: String,
    pub animation_set: Option<String>,
}

/// Catalog entry for a selectable arena
#[derive(Debug, Clone)]
pub struct ArenaAsset {
    pub id: String,
    pub display_name: String,
    pub scene_path: String,
    pub bounds: ArenaBounds,
}
