//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in through `Simulation::update`
//! - Randomness only through an injected `BitSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod cpu;
pub mod menu;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Aabb, BounceZone, Wall};
pub use cpu::cpu_intent;
pub use menu::{Menu, MenuAction};
pub use rng::{BitSource, FixedBits, SeededBits};
pub use state::{Ball, GameEvent, GameState, MenuOption, Paddle, Scene, Side, Snapshot};
pub use tick::{FrameInput, Simulation, UpdateOutcome};
