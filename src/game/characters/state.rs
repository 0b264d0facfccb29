// Fighter behavior states

use std::fmt;

/// Represents the current state of a fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterState {
    /// Standing still on the ground
    Idle,
    /// Moving horizontally
    Running,
    /// In the air after a jump
    Jumping,
    /// Mid-attack
    Attacking,
    /// Recovering from a hit, control suspended
    HitStun,
    /// Knocked out for the rest of the round
    Defeated,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CharacterState {
    /// Check if movement may overwrite this state with its own
    ///
    /// Attacks, hitstun and defeat hold the state; positional movement still
    /// applies.
    pub fn is_interruptible(&self) -> bool {
        !matches!(self, Self::Attacking | Self::HitStun | Self::Defeated)
    }

    /// Check if the fighter can start or land attacks
    pub fn can_attack(&self) -> bool {
        !matches!(self, Self::HitStun | Self::Defeated)
    }

    /// Short lowercase label used by the HUD
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Jumping => "jumping",
            Self::Attacking => "attacking",
            Self::HitStun => "hitstun",
            Self::Defeated => "defeated",
        }
    }
}

impl fmt::Display for CharacterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
