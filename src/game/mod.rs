// Game simulation modules

pub mod ai;
pub mod arena;
pub mod characters;
pub mod hud;
pub mod r#match;

// Re-export commonly used types
pub use r#match::{MatchController, MatchResult, MatchState};
