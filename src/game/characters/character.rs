// Fighter entity: movement, attack resolution, physics integration

use glam::Vec2;

use crate::core::math::clamp;
use crate::engine::input::{Action, InputFrame};
use crate::game::arena::Arena;

use super::config::CharacterConfig;
use super::state::CharacterState;

/// Gravity applied to airborne fighters (units/s²)
const GRAVITY: f32 = 9.81;

/// Seconds before another attack is allowed
const ATTACK_COOLDOWN: f32 = 0.8;

/// Per-tick horizontal velocity decay
const HORIZONTAL_DAMPING: f32 = 0.9;

/// Vertical slack within which an attack can still connect
const ATTACK_HEIGHT_WINDOW: f32 = 1.5;

/// A simulated fighter
///
/// Mutated every tick by `update`; the only mutation an opponent may apply
/// is `take_hit`.
#[derive(Debug)]
pub struct Character {
    config: CharacterConfig,
    /// Current position in arena space
    pub position: Vec2,
    /// Current velocity (units/second)
    pub velocity: Vec2,
    /// Direction the fighter is facing (1.0 = right, -1.0 = left)
    pub facing: f32,
    health: f32,
    state: CharacterState,
    attack_cooldown: f32,
    grounded: bool,
}

impl Character {
    /// Create a fighter standing on the floor at the given spawn point
    pub fn new(config: CharacterConfig, spawn_x: f32) -> Self {
        Self {
            position: Vec2::new(spawn_x, 0.0),
            velocity: Vec2::ZERO,
            health: config.max_health,
            state: CharacterState::Idle,
            facing: 1.0,
            attack_cooldown: 0.0,
            grounded: true,
            config,
        }
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    #[allow(dead_code)]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[allow(dead_code)]
    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    /// Advance one simulation tick
    ///
    /// The order is fixed: movement resolution, attack resolution at the
    /// pre-physics position, physics integration, cooldown decay. Only
    /// `self` and `enemy` (through `take_hit`) are mutated.
    pub fn update(&mut self, input: &InputFrame, arena: &Arena, enemy: &mut Character, dt: f32) {
        self.resolve_movement(input, arena, dt);
        self.resolve_attacks(input, enemy);
        self.integrate_physics(arena, dt);
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
    }

    fn resolve_movement(&mut self, input: &InputFrame, arena: &Arena, dt: f32) {
        let step = self.config.move_speed * dt;
        let mut next_state = CharacterState::Idle;

        if input.has(Action::MoveLeft) {
            self.position.x -= step;
            self.facing = -1.0;
            next_state = CharacterState::Running;
        } else if input.has(Action::MoveRight) {
            self.position.x += step;
            self.facing = 1.0;
            next_state = CharacterState::Running;
        }

        if input.has(Action::Jump) && self.grounded {
            self.velocity.y = self.config.jump_strength;
            self.grounded = false;
            next_state = CharacterState::Jumping;
        }

        self.position = arena.clamp_position(self.position);
        if self.state.is_interruptible() {
            self.state = next_state;
        }
    }

    fn resolve_attacks(&mut self, input: &InputFrame, enemy: &mut Character) {
        if !self.state.can_attack() {
            return;
        }
        let heavy = input.has(Action::HeavyAttack);
        if !heavy && !input.has(Action::LightAttack) {
            return;
        }
        if self.attack_cooldown > 0.0 {
            return;
        }

        let (damage, knockback) = if heavy {
            (self.config.heavy_damage, 2.0)
        } else {
            (self.config.light_damage, 1.0)
        };
        self.state = CharacterState::Attacking;
        self.attack_cooldown = ATTACK_COOLDOWN;

        let attack_point = self.position + Vec2::new(self.facing * self.config.attack_range, 0.0);
        if (enemy.position.x - attack_point.x).abs() <= self.config.attack_range
            && (enemy.position.y - attack_point.y).abs() < ATTACK_HEIGHT_WINDOW
        {
            enemy.take_hit(damage, knockback * self.facing);
        }
    }

    /// Apply damage and knockback from a connecting attack
    ///
    /// No-op once defeated. Health stays within [0, max_health]; reaching
    /// zero is terminal for the round.
    pub fn take_hit(&mut self, damage: f32, knockback: f32) {
        if self.state == CharacterState::Defeated {
            return;
        }
        self.health = clamp(self.health - damage, 0.0, self.config.max_health);
        self.velocity.x = knockback;
        self.state = if self.health == 0.0 {
            CharacterState::Defeated
        } else {
            CharacterState::HitStun
        };
    }

    fn integrate_physics(&mut self, arena: &Arena, dt: f32) {
        if !self.grounded {
            self.velocity.y -= GRAVITY * dt;
        }
        self.position += self.velocity * dt;

        let clamped = arena.clamp_position(self.position);
        if clamped.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y = 0.0;
            self.grounded = true;
            if self.state == CharacterState::Jumping {
                self.state = CharacterState::Idle;
            }
        } else {
            self.position = clamped;
        }

        self.velocity.x *= HORIZONTAL_DAMPING;

        // Hitstun lasts exactly one tick
        if self.state == CharacterState::HitStun && self.health > 0.0 {
            self.state = CharacterState::Idle;
        }
    }

    /// Reset for a fresh round at the given spawn point
    ///
    /// Restores health and clears all transient combat state; the config is
    /// untouched.
    pub fn reset_for_round(&mut self, spawn_x: f32) {
        self.position = Vec2::new(spawn_x, 0.0);
        self.velocity = Vec2::ZERO;
        self.health = self.config.max_health;
        self.state = CharacterState::Idle;
        self.attack_cooldown = 0.0;
        self.grounded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{ArenaAsset, ArenaBounds, CharacterAsset};
    use approx::assert_relative_eq;

    fn test_arena() -> Arena {
        Arena::new(ArenaAsset {
            id: "dojo".to_string(),
            display_name: "Dojo".to_string(),
            scene_path: "assets/arenas/dojo.scene".to_string(),
            bounds: ArenaBounds {
                width: 12.0,
                height: 6.0,
            },
        })
    }

    fn fighter(id: &str, spawn_x: f32) -> Character {
        let asset = CharacterAsset {
            id: id.to_string(),
            display_name: id.to_string(),
            prefab_path: format!("assets/characters/{id}.prefab"),
            animation_set: None,
        };
        Character::new(CharacterConfig::from_asset(&asset), spawn_x)
    }

    fn frame(actions: &[Action]) -> InputFrame {
        InputFrame::from_actions(actions)
    }

    #[test]
    fn test_take_hit_clamps_health() {
        let mut c = fighter("hero", 0.0);
        c.take_hit(30.0, 1.0);
        assert_eq!(c.health(), 70.0);
        assert_eq!(c.state(), CharacterState::HitStun);

        c.take_hit(500.0, 1.0);
        assert_eq!(c.health(), 0.0);
        assert_eq!(c.state(), CharacterState::Defeated);
    }

    #[test]
    fn test_take_hit_applies_knockback() {
        let mut c = fighter("hero", 0.0);
        c.take_hit(10.0, -2.0);
        assert_eq!(c.velocity.x, -2.0);
    }

    #[test]
    fn test_take_hit_on_defeated_is_noop() {
        let mut c = fighter("hero", 0.0);
        c.take_hit(500.0, 2.0);
        assert_eq!(c.state(), CharacterState::Defeated);

        c.take_hit(10.0, -5.0);
        assert_eq!(c.health(), 0.0);
        assert_eq!(c.state(), CharacterState::Defeated);
        assert_eq!(c.velocity.x, 2.0);
    }

    #[test]
    fn test_movement_left_priority_and_facing() {
        let arena = test_arena();
        let mut c = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 5.0);

        c.update(
            &frame(&[Action::MoveLeft, Action::MoveRight]),
            &arena,
            &mut enemy,
            0.25,
        );
        assert_relative_eq!(c.position.x, -2.0);
        assert_eq!(c.facing, -1.0);
        assert_eq!(c.state(), CharacterState::Running);

        c.update(&frame(&[Action::MoveRight]), &arena, &mut enemy, 0.25);
        assert_relative_eq!(c.position.x, 0.0);
        assert_eq!(c.facing, 1.0);
    }

    #[test]
    fn test_movement_clamped_to_arena() {
        let arena = test_arena();
        let mut c = fighter("hero", -5.0);
        let mut enemy = fighter("cpu", 5.0);

        for _ in 0..10 {
            c.update(&frame(&[Action::MoveLeft]), &arena, &mut enemy, 0.5);
        }
        assert_eq!(c.position.x, -6.0);
    }

    #[test]
    fn test_jump_and_land() {
        let arena = test_arena();
        let mut c = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 5.0);
        let dt = 0.1;

        c.update(&frame(&[Action::Jump]), &arena, &mut enemy, dt);
        assert_eq!(c.state(), CharacterState::Jumping);
        assert!(!c.is_grounded());
        assert!(c.position.y > 0.0);

        // Holding jump mid-air must not double jump
        let peak_velocity = c.velocity.y;
        c.update(&frame(&[Action::Jump]), &arena, &mut enemy, dt);
        assert!(c.velocity.y < peak_velocity);

        // Gravity brings the fighter back to the floor
        for _ in 0..30 {
            c.update(&InputFrame::empty(), &arena, &mut enemy, dt);
        }
        assert_eq!(c.position.y, 0.0);
        assert_eq!(c.velocity.y, 0.0);
        assert!(c.is_grounded());
        assert_eq!(c.state(), CharacterState::Idle);
    }

    #[test]
    fn test_heavy_attack_connects() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);

        attacker.update(&frame(&[Action::HeavyAttack]), &arena, &mut enemy, 0.016);

        assert_eq!(enemy.health(), 80.0);
        assert_eq!(enemy.state(), CharacterState::HitStun);
        assert_eq!(enemy.velocity.x, 2.0);
        assert_eq!(attacker.state(), CharacterState::Attacking);
        assert!(attacker.attack_cooldown() > 0.0);
    }

    #[test]
    fn test_light_attack_damage() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);

        attacker.update(&frame(&[Action::LightAttack]), &arena, &mut enemy, 0.016);

        assert_eq!(enemy.health(), 90.0);
        assert_eq!(enemy.velocity.x, 1.0);
    }

    #[test]
    fn test_heavy_wins_when_both_attacks_held() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);

        attacker.update(
            &frame(&[Action::LightAttack, Action::HeavyAttack]),
            &arena,
            &mut enemy,
            0.016,
        );
        assert_eq!(enemy.health(), 80.0);
    }

    #[test]
    fn test_attack_out_of_range_misses() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 4.0);

        attacker.update(&frame(&[Action::HeavyAttack]), &arena, &mut enemy, 0.016);

        assert_eq!(enemy.health(), 100.0);
        // The swing still commits and starts the cooldown
        assert_eq!(attacker.state(), CharacterState::Attacking);
        assert!(attacker.attack_cooldown() > 0.0);
    }

    #[test]
    fn test_attack_misses_above_height_window() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);
        enemy.position.y = 2.0;

        attacker.update(&frame(&[Action::HeavyAttack]), &arena, &mut enemy, 0.016);
        assert_eq!(enemy.health(), 100.0);
    }

    #[test]
    fn test_knockback_direction_follows_facing() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", -1.0);

        // Face left first, then strike
        attacker.update(&frame(&[Action::MoveLeft]), &arena, &mut enemy, 0.016);
        attacker.update(&frame(&[Action::HeavyAttack]), &arena, &mut enemy, 0.016);

        assert_eq!(enemy.health(), 80.0);
        assert_eq!(enemy.velocity.x, -2.0);
    }

    #[test]
    fn test_attack_respects_cooldown() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);

        attacker.update(&frame(&[Action::LightAttack]), &arena, &mut enemy, 0.1);
        attacker.update(&frame(&[Action::LightAttack]), &arena, &mut enemy, 0.1);

        // Second swing is still on cooldown
        assert_eq!(enemy.health(), 90.0);
    }

    #[test]
    fn test_consecutive_heavy_attacks_defeat() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);

        let expected = [80.0, 60.0, 40.0, 20.0, 0.0];
        for health in expected {
            // dt of 1.0 fully decays the 0.8s cooldown between swings
            attacker.update(&frame(&[Action::HeavyAttack]), &arena, &mut enemy, 1.0);
            assert_eq!(enemy.health(), health);
        }
        assert_eq!(enemy.state(), CharacterState::Defeated);
    }

    #[test]
    fn test_attacks_ignored_in_hitstun() {
        let arena = test_arena();
        let mut attacker = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);

        attacker.take_hit(10.0, 0.0);
        assert_eq!(attacker.state(), CharacterState::HitStun);

        attacker.update(&frame(&[Action::HeavyAttack]), &arena, &mut enemy, 0.016);
        assert_eq!(enemy.health(), 100.0);
    }

    #[test]
    fn test_hitstun_lasts_one_tick() {
        let arena = test_arena();
        let mut c = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 5.0);

        c.take_hit(10.0, 1.0);
        assert_eq!(c.state(), CharacterState::HitStun);

        c.update(&InputFrame::empty(), &arena, &mut enemy, 0.016);
        assert_eq!(c.state(), CharacterState::Idle);
    }

    #[test]
    fn test_defeated_survives_movement_input() {
        let arena = test_arena();
        let mut c = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 5.0);

        c.take_hit(500.0, 1.0);
        c.update(&frame(&[Action::MoveRight]), &arena, &mut enemy, 0.016);

        assert_eq!(c.state(), CharacterState::Defeated);
        assert_eq!(c.health(), 0.0);
    }

    #[test]
    fn test_horizontal_damping() {
        let arena = test_arena();
        let mut c = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 5.0);

        c.take_hit(10.0, 2.0);
        c.update(&InputFrame::empty(), &arena, &mut enemy, 0.1);
        assert_relative_eq!(c.velocity.x, 1.8, epsilon = 1e-5);
        c.update(&InputFrame::empty(), &arena, &mut enemy, 0.1);
        assert_relative_eq!(c.velocity.x, 1.62, epsilon = 1e-5);
    }

    #[test]
    fn test_reset_for_round() {
        let arena = test_arena();
        let mut c = fighter("hero", 0.0);
        let mut enemy = fighter("cpu", 1.0);

        c.take_hit(500.0, 2.0);
        c.update(&InputFrame::empty(), &arena, &mut enemy, 0.1);

        c.reset_for_round(-2.0);
        assert_eq!(c.position, Vec2::new(-2.0, 0.0));
        assert_eq!(c.velocity, Vec2::ZERO);
        assert_eq!(c.health(), 100.0);
        assert_eq!(c.state(), CharacterState::Idle);
        assert!(c.is_grounded());
        assert_eq!(c.attack_cooldown(), 0.0);
    }
}
