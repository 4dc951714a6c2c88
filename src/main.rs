//! Pong entry point
//!
//! Headless native host: runs the simulation at a fixed frame rate without
//! a window, steering the player paddle itself, and logs the match.

use pong_core::consts::PADDLE_THIRD_H;
use pong_core::settings::DEFAULT_SETTINGS_FILE;
use pong_core::sim::{GameEvent, Side};
use pong_core::{FrameInput, Scene, Settings, Simulation, UpdateOutcome};

/// Keys an idle player would press to keep the paddle level with the ball
fn autopilot_input(sim: &Simulation) -> FrameInput {
    let snapshot = sim.snapshot();
    let offset = snapshot.ball.y - snapshot.player_y;
    FrameInput {
        up: offset > PADDLE_THIRD_H / 2.0,
        down: offset < -PADDLE_THIRD_H / 2.0,
        confirm: false,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pong (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string());
    let settings = Settings::load_or_default(&path);

    let mut sim = match settings.seed {
        Some(seed) => {
            log::info!("Seed: {}", seed);
            Simulation::seeded(seed)
        }
        None => Simulation::from_entropy(),
    };

    let dt = settings.frame_dt();
    let frames = settings.frame_count();
    log::info!("Running {} frames at dt={:.4}s", frames, dt);

    for frame in 0..frames {
        let input = match sim.scene() {
            // Pick Start Game straight away
            Scene::MainMenu => FrameInput {
                confirm: true,
                ..Default::default()
            },
            Scene::InGame if settings.autopilot => autopilot_input(&sim),
            Scene::InGame => FrameInput::default(),
        };

        if sim.update(dt, &input) == UpdateOutcome::Exit {
            log::info!("Exit requested at frame {}", frame);
            break;
        }

        let events: Vec<GameEvent> = sim.drain_events().collect();
        for event in events {
            if let GameEvent::Goal { scorer } = event {
                let snapshot = sim.snapshot();
                let who = match scorer {
                    Side::Player => "Player",
                    Side::Cpu => "CPU",
                };
                log::info!(
                    "{} scores! {} - {}",
                    who,
                    snapshot.player_score,
                    snapshot.cpu_score
                );
            }
        }
    }

    let state = sim.state();
    log::info!(
        "Final score: player {} - cpu {}",
        state.player_score,
        state.cpu_score
    );
}
