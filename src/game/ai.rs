// CPU opponent policy

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::input::{Action, InputFrame};
use crate::game::characters::Character;

/// Chance per tick that the brain throws in a jump
const JUMP_CHANCE: f64 = 0.05;

/// Tuning knobs for the CPU policy
#[derive(Debug, Clone, Copy)]
pub struct AiIntent {
    /// Probability of attacking per tick while in striking distance, in [0, 1]
    pub attack_bias: f64,
    /// Retreat instead of engaging below this health
    pub retreat_health_threshold: f32,
}

/// Heuristic input source for a non-human fighter
///
/// Owns a seeded RNG so a match replayed with the same seed makes the same
/// decisions tick for tick.
#[derive(Debug)]
pub struct CpuBrain {
    intent: AiIntent,
    rng: ChaCha8Rng,
}

impl CpuBrain {
    /// Create a brain seeded from entropy
    pub fn new(intent: AiIntent) -> Self {
        Self::with_seed(intent, rand::random())
    }

    /// Create a brain with a fixed seed for reproducible decisions
    pub fn with_seed(intent: AiIntent, seed: u64) -> Self {
        Self {
            intent,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Produce the input frame for the current tick
    ///
    /// Hurt fighters back off; otherwise the brain closes distance until
    /// the enemy is near attack range, then swings with probability
    /// `attack_bias` (heavy inside exact range, light just outside).
    pub fn plan(&mut self, me: &Character, enemy: &Character) -> InputFrame {
        let mut frame = InputFrame::empty();
        let distance = (me.position.x - enemy.position.x).abs();
        let range = me.config().attack_range;
        let enemy_is_right = me.position.x < enemy.position.x;

        if me.health() < self.intent.retreat_health_threshold {
            frame.press(if enemy_is_right {
                Action::MoveLeft
            } else {
                Action::MoveRight
            });
        } else if distance > range * 0.8 {
            frame.press(if enemy_is_right {
                Action::MoveRight
            } else {
                Action::MoveLeft
            });
        }

        if distance < range * 1.2 && self.rng.gen_bool(self.intent.attack_bias) {
            frame.press(if distance < range {
                Action::HeavyAttack
            } else {
                Action::LightAttack
            });
        }

        if self.rng.gen_bool(JUMP_CHANCE) {
            frame.press(Action::Jump);
        }

        frame
    }
}
