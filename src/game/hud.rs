// Plain-text HUD and pause banner
//
// Rendering proper lives outside the simulation; these produce the one-line
// summaries a frontend prints or draws.

use crate::game::characters::Character;

/// Renders the fight summary line
#[derive(Debug, Default)]
pub struct Hud;

impl Hud {
    pub fn new() -> Self {
        Self
    }

    /// Summarize each fighter as `name: health/max (state)`
    pub fn render(&self, fighters: &[&Character]) -> String {
        fighters
            .iter()
            .map(|c| {
                format!(
                    "{}: {}/{} ({})",
                    c.config().display_name,
                    c.health(),
                    c.config().max_health,
                    c.state()
                )
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Renders the pause banner
#[derive(Debug, Default)]
pub struct PauseMenu;

impl PauseMenu {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self) -> String {
        "Paused - press resume".to_string()
    }
}
