// Per-tick input frames

use super::action::Action;
use std::collections::HashSet;

/// The set of discrete action flags held for a single simulation tick
///
/// Flags are unique and unordered. Movement conflicts are resolved by the
/// consumer (MoveLeft is checked before MoveRight).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    actions: HashSet<Action>,
}

impl InputFrame {
    /// A frame with no actions held
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a frame from a list of actions; duplicates collapse
    pub fn from_actions(actions: &[Action]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
        }
    }

    /// Check whether an action is held this tick
    pub fn has(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Add an action flag to this frame
    pub fn press(&mut self, action: Action) {
        self.actions.insert(action);
    }

    /// Check whether no actions are held
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
