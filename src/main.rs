use anyhow::Result;
use log::info;

mod core;
mod engine;
mod game;

use engine::assets::{ArenaAsset, ArenaBounds, CharacterAsset, InMemoryAssets};
use engine::input::{Action, InputFrame, ScriptedInput};
use game::ai::{AiIntent, CpuBrain};
use game::{MatchController, MatchState};

/// Simulation timestep for the scripted demo match (seconds)
const DEMO_TIMESTEP: f32 = 0.16;

/// Give up after this much simulated time
const DEMO_TIME_LIMIT: f32 = 30.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Dojo Brawler...");

    let assets = InMemoryAssets::new(
        vec![
            CharacterAsset {
                id: "hero".to_string(),
                display_name: "Hero".to_string(),
                prefab_path: "assets/characters/hero.prefab".to_string(),
                animation_set: None,
            },
            CharacterAsset {
                id: "cpu".to_string(),
                display_name: "CPU Brawler".to_string(),
                prefab_path: "assets/characters/cpu.prefab".to_string(),
                animation_set: None,
            },
        ],
        vec![
            ArenaAsset {
                id: "dojo".to_string(),
                display_name: "Dojo".to_string(),
                scene_path: "assets/arenas/dojo.scene".to_string(),
                bounds: ArenaBounds {
                    width: 12.0,
                    height: 6.0,
                },
            },
            ArenaAsset {
                id: "rooftop".to_string(),
                display_name: "Rooftop".to_string(),
                scene_path: "assets/arenas/rooftop.scene".to_string(),
                bounds: ArenaBounds {
                    width: 14.0,
                    height: 7.0,
                },
            },
        ],
    );

    let player_input = ScriptedInput::new(vec![
        InputFrame::from_actions(&[Action::MoveRight]),
        InputFrame::from_actions(&[Action::MoveRight]),
        InputFrame::from_actions(&[Action::LightAttack]),
        InputFrame::from_actions(&[Action::MoveLeft]),
        InputFrame::from_actions(&[Action::HeavyAttack]),
        InputFrame::from_actions(&[Action::Pause]),
        InputFrame::from_actions(&[Action::Block]),
        InputFrame::from_actions(&[Action::MoveRight]),
    ]);

    let cpu_brain = CpuBrain::new(AiIntent {
        attack_bias: 0.7,
        retreat_health_threshold: 20.0,
    });

    let mut controller = MatchController::new(assets, Box::new(player_input), cpu_brain);
    pollster::block_on(controller.load("hero", "cpu", "dojo"))?;

    if let Some(arena) = controller.arena() {
        info!(
            "Fighting in {}; first to {} rounds wins",
            arena.asset().display_name,
            controller.rounds_to_win()
        );
    }

    let mut elapsed = 0.0;
    while controller.state() != MatchState::MatchComplete && elapsed < DEMO_TIME_LIMIT {
        let result = controller.update(DEMO_TIMESTEP);
        info!(
            "HUD [round {}]: {}",
            controller.current_round(),
            controller.render_hud()
        );

        if controller.state() == MatchState::Paused {
            info!("{}", controller.render_pause());
            controller.resume();
        }

        if let Some(result) = result {
            let winner_rounds = result.rounds_won.get(&result.winner).copied().unwrap_or(0);
            let loser_rounds = result.rounds_won.get(&result.loser).copied().unwrap_or(0);
            info!("Winner: {} ({}-{})", result.winner, winner_rounds, loser_rounds);
            break;
        }
        elapsed += DEMO_TIMESTEP;
    }

    if controller.state() != MatchState::MatchComplete {
        info!("Time limit reached with no winner");
    }
    if let (Some(player), Some(opponent)) = (controller.player(), controller.opponent()) {
        info!(
            "Final: {} at {} hp ({} rounds), {} at {} hp ({} rounds)",
            player.config().display_name,
            player.health(),
            controller.rounds_won(&player.config().id),
            opponent.config().display_name,
            opponent.health(),
            controller.rounds_won(&opponent.config().id)
        );
    }

    Ok(())
}
