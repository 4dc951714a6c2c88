//! Pong - two paddles, one ball, a menu and a scripted opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (menu, motion, collisions, scoring)
//! - `frame`: What a renderer should draw for the current scene
//! - `settings`: Host configuration for the native loop

pub mod frame;
pub mod settings;
pub mod sim;

pub use frame::{DrawList, Quad, TextAlign, TextItem};
pub use settings::{Settings, SettingsError};
pub use sim::{FrameInput, Scene, Simulation, Snapshot, UpdateOutcome};

/// Game configuration constants
///
/// The field is centered on the origin and measured in normalized units:
/// y spans `[-FIELD_H, FIELD_H]`, x spans `[-FIELD_W, FIELD_W]`.
pub mod consts {
    /// Reference screen size the field aspect ratio is derived from
    pub const SCREEN_W: f32 = 1280.0;
    pub const SCREEN_H: f32 = 720.0;
    pub const ASPECT: f32 = SCREEN_W / SCREEN_H;

    /// Field half extents
    pub const FIELD_W: f32 = ASPECT;
    pub const FIELD_H: f32 = 1.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 0.05;
    pub const BALL_HALF_SIZE: f32 = BALL_SIZE / 2.0;
    /// Scalar ball speed (field units per second)
    pub const BALL_SPEED: f32 = 0.6;

    /// Paddle defaults - same width as the ball, five balls tall
    pub const PADDLE_W: f32 = BALL_SIZE;
    pub const PADDLE_H: f32 = BALL_SIZE * 5.0;
    pub const PADDLE_HALF_W: f32 = PADDLE_W / 2.0;
    pub const PADDLE_HALF_H: f32 = PADDLE_H / 2.0;
    pub const PADDLE_THIRD_H: f32 = PADDLE_H / 3.0;
    pub const PADDLE_SPEED: f32 = 0.5;
    /// Paddles sit at -PADDLE_X_POS (player) and +PADDLE_X_POS (cpu)
    pub const PADDLE_X_POS: f32 = FIELD_W * 0.8;

    /// Vertical direction after hitting the top/bottom third of a paddle
    pub const BOUNCE_MAX: f32 = 0.6;
    /// Vertical direction magnitude after hitting the middle third
    pub const BOUNCE_MIDDLE: f32 = 0.05;

    /// CPU ignores the ball until it crosses this x
    pub const CPU_ENGAGE_X: f32 = 0.65;

    /// Seconds the ball stays frozen after a goal before the next serve
    pub const ROUND_DELAY: f32 = 1.5;
}
