// Match lifecycle: loading, per-tick simulation, rounds, scoring, pause

use std::collections::HashMap;

use log::info;

use crate::engine::assets::{AssetError, AssetSource, CharacterAsset};
use crate::engine::input::{Action, InputDevice};
use crate::game::ai::CpuBrain;
use crate::game::arena::{Arena, ArenaSelector};
use crate::game::characters::{Character, CharacterConfig, CharacterState};
use crate::game::hud::{Hud, PauseMenu};

/// Rounds a fighter must take to win the match
pub const ROUNDS_TO_WIN: u32 = 2;

/// Fixed spawn offsets from the arena center
const PLAYER_SPAWN_X: f32 = -2.0;
const OPPONENT_SPAWN_X: f32 = 2.0;

/// Stable fighter indices within a match
const PLAYER: usize = 0;
const OPPONENT: usize = 1;

/// Lifecycle state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// No match loaded yet
    Idle,
    /// Waiting on asset resolution
    Loading,
    /// A round is being simulated
    RoundActive,
    /// A round just ended; the next update starts the following round
    RoundOver,
    /// One side took enough rounds; terminal
    MatchComplete,
    /// Simulation suspended until an explicit resume
    Paused,
}

/// Final report of a completed match
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub winner: String,
    pub loser: String,
    pub rounds_won: HashMap<String, u32>,
}

/// How the round ended on a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundOutcome {
    Undecided,
    Winner(usize),
    /// Both fighters fell on the same tick; nobody is credited
    Draw,
}

/// Owns the two fighters, the arena and the input sources, and drives the
/// per-tick simulation
///
/// The host loop calls `update(dt)` once per tick; the controller polls the
/// player device first, then the opponent's (scripted override or CPU
/// brain), and always updates the player before the opponent.
pub struct MatchController<S> {
    source: S,
    player_input: Box<dyn InputDevice>,
    cpu_brain: CpuBrain,
    cpu_input: Option<Box<dyn InputDevice>>,
    state: MatchState,
    current_round: u32,
    rounds_won: HashMap<String, u32>,
    fighters: Option<[Character; 2]>,
    arena: Option<Arena>,
    hud: Hud,
    pause_menu: PauseMenu,
}

impl<S: AssetSource> MatchController<S> {
    pub fn new(source: S, player_input: Box<dyn InputDevice>, cpu_brain: CpuBrain) -> Self {
        Self {
            source,
            player_input,
            cpu_brain,
            cpu_input: None,
            state: MatchState::Idle,
            current_round: 0,
            rounds_won: HashMap::new(),
            fighters: None,
            arena: None,
            hud: Hud::new(),
            pause_menu: PauseMenu::new(),
        }
    }

    /// Drive the opponent from a scripted device instead of the CPU brain
    pub fn with_cpu_input(mut self, device: Box<dyn InputDevice>) -> Self {
        self.cpu_input = Some(device);
        self
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn rounds_to_win(&self) -> u32 {
        ROUNDS_TO_WIN
    }

    /// Rounds taken so far by the fighter with the given id
    pub fn rounds_won(&self, id: &str) -> u32 {
        self.rounds_won.get(id).copied().unwrap_or(0)
    }

    pub fn player(&self) -> Option<&Character> {
        self.fighters.as_ref().map(|f| &f[PLAYER])
    }

    pub fn opponent(&self) -> Option<&Character> {
        self.fighters.as_ref().map(|f| &f[OPPONENT])
    }

    pub fn arena(&self) -> Option<&Arena> {
        self.arena.as_ref()
    }

    /// Resolve both fighters and the arena from the asset source
    ///
    /// A failed lookup surfaces the error and leaves the controller in
    /// `Loading`; callers must not tick an unloaded match (ticking is a
    /// no-op regardless).
    pub async fn load(
        &mut self,
        player_id: &str,
        opponent_id: &str,
        arena_id: &str,
    ) -> Result<(), AssetError> {
        self.state = MatchState::Loading;
        let characters = self.source.load_character_assets().await;
        let arenas = self.source.load_arena_assets().await;

        let player_asset = find_character(&characters, player_id)?;
        let opponent_asset = find_character(&characters, opponent_id)?;
        let arena = ArenaSelector::new(arenas).by_id(arena_id)?;

        info!(
            "Match loaded: {} vs {} in {}",
            player_asset.display_name,
            opponent_asset.display_name,
            arena.asset().display_name
        );

        self.fighters = Some([
            Character::new(CharacterConfig::from_asset(player_asset), PLAYER_SPAWN_X),
            Character::new(CharacterConfig::from_asset(opponent_asset), OPPONENT_SPAWN_X),
        ]);
        self.arena = Some(arena);
        self.rounds_won.clear();
        self.current_round = 1;
        self.state = MatchState::RoundActive;
        Ok(())
    }

    /// Advance the match by one tick of `dt` seconds
    ///
    /// Returns the match result on the tick the match completes, `None`
    /// otherwise. Never fails: ticking before load, while paused or after
    /// completion is a no-op.
    pub fn update(&mut self, dt: f32) -> Option<MatchResult> {
        let (Some(fighters), Some(arena)) = (self.fighters.as_mut(), self.arena.as_ref()) else {
            return None;
        };

        match self.state {
            MatchState::RoundActive => {}
            MatchState::RoundOver => {
                fighters[PLAYER].reset_for_round(PLAYER_SPAWN_X);
                fighters[OPPONENT].reset_for_round(OPPONENT_SPAWN_X);
                self.current_round += 1;
                self.state = MatchState::RoundActive;
                info!("Round {} begins", self.current_round);
                return None;
            }
            MatchState::Idle
            | MatchState::Loading
            | MatchState::Paused
            | MatchState::MatchComplete => return None,
        }

        let player_frame = self.player_input.poll();
        let cpu_frame = match self.cpu_input.as_mut() {
            Some(device) => device.poll(),
            None => self.cpu_brain.plan(&fighters[OPPONENT], &fighters[PLAYER]),
        };

        if player_frame.has(Action::Pause) {
            info!("Match paused");
            self.state = MatchState::Paused;
            return None;
        }

        let (player_half, opponent_half) = fighters.split_at_mut(1);
        let player = &mut player_half[0];
        let opponent = &mut opponent_half[0];
        player.update(&player_frame, arena, opponent, dt);
        opponent.update(&cpu_frame, arena, player, dt);

        let outcome = match (
            player.state() == CharacterState::Defeated,
            opponent.state() == CharacterState::Defeated,
        ) {
            (true, true) => RoundOutcome::Draw,
            (true, false) => RoundOutcome::Winner(OPPONENT),
            (false, true) => RoundOutcome::Winner(PLAYER),
            (false, false) => RoundOutcome::Undecided,
        };

        match outcome {
            RoundOutcome::Undecided => None,
            RoundOutcome::Draw => {
                info!("Round {} ends in a draw; no round awarded", self.current_round);
                self.state = MatchState::RoundOver;
                None
            }
            RoundOutcome::Winner(index) => {
                let winner_id = fighters[index].config().id.clone();
                let loser_id = fighters[1 - index].config().id.clone();
                let wins = {
                    let entry = self.rounds_won.entry(winner_id.clone()).or_insert(0);
                    *entry += 1;
                    *entry
                };
                info!(
                    "Round {} goes to {} ({} of {} rounds)",
                    self.current_round, winner_id, wins, ROUNDS_TO_WIN
                );
                if wins >= ROUNDS_TO_WIN {
                    self.state = MatchState::MatchComplete;
                    info!("Match complete: {winner_id} defeats {loser_id}");
                    return Some(MatchResult {
                        winner: winner_id,
                        loser: loser_id,
                        rounds_won: self.rounds_won.clone(),
                    });
                }
                self.state = MatchState::RoundOver;
                None
            }
        }
    }

    /// Leave the pause screen; no-op in any other state
    pub fn resume(&mut self) {
        if self.state == MatchState::Paused {
            info!("Match resumed");
            self.state = MatchState::RoundActive;
        }
    }

    /// One-line fight summary, empty before load
    pub fn render_hud(&self) -> String {
        match &self.fighters {
            Some([player, opponent]) => self.hud.render(&[player, opponent]),
            None => String::new(),
        }
    }

    /// Pause banner, empty unless paused
    pub fn render_pause(&self) -> String {
        if self.state == MatchState::Paused {
            self.pause_menu.render()
        } else {
            String::new()
        }
    }

    #[cfg(test)]
    fn fighters_mut(&mut self) -> Option<&mut [Character; 2]> {
        self.fighters.as_mut()
    }
}

fn find_character<'a>(
    assets: &'a [CharacterAsset],
    id: &str,
) -> Result<&'a CharacterAsset, AssetError> {
    assets
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AssetError::CharacterNotFound(id.to_string()))
}
