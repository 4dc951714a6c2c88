//! Game state and core simulation types
//!
//! Everything a renderer or host may read lives here. Only the
//! simulation mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which update/render path runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scene {
    /// Title screen with Start/Quit options
    #[default]
    MainMenu,
    /// Ball in play (or frozen between rounds)
    InGame,
}

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuOption {
    #[default]
    StartGame,
    QuitGame,
}

impl MenuOption {
    /// All options in display order
    pub const ALL: [MenuOption; 2] = [MenuOption::StartGame, MenuOption::QuitGame];

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            MenuOption::StartGame => 0,
            MenuOption::QuitGame => 1,
        }
    }

    /// Option below this one, wrapping to the top
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Option above this one, wrapping to the bottom
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start Game",
            MenuOption::QuitGame => "Quit Game",
        }
    }
}

/// The two sides of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human paddle, left side
    Player,
    /// Scripted paddle, right side
    Cpu,
}

impl Side {
    /// Fixed x of this side's paddle
    pub fn paddle_x(self) -> f32 {
        match self {
            Side::Player => -PADDLE_X_POS,
            Side::Cpu => PADDLE_X_POS,
        }
    }

    /// Horizontal direction the ball takes after bouncing off this side's paddle
    pub fn bounce_dx(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Cpu => -1.0,
        }
    }
}

/// A paddle; only its vertical center moves
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Unit direction; velocity is `dir * BALL_SPEED`
    pub dir: Vec2,
}

impl Ball {
    /// Ball at the center heading horizontally (`dx` = ±1)
    pub fn new(dx: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: Vec2::new(dx, 0.0),
        }
    }

    /// Serve: back to the center, heading the other way at full speed,
    /// perfectly flat
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.dir = Vec2::new(-self.dir.x.signum(), 0.0);
    }
}

/// Complete in-game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Paddle,
    pub cpu: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub cpu_score: u32,
    /// Round over; the ball is frozen until the next serve
    pub scored: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh match. Starts as "scored" so the first serve waits out the
    /// round delay like every other one.
    pub fn new() -> Self {
        Self {
            player: Paddle::default(),
            cpu: Paddle::default(),
            ball: Ball::new(-1.0),
            player_score: 0,
            cpu_score: 0,
            scored: true,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Cpu => self.cpu_score,
        }
    }

    /// Credit a goal to `scorer` and freeze the ball
    pub fn award_point(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player_score += 1,
            Side::Cpu => self.cpu_score += 1,
        }
        self.scored = true;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_y: self.player.y,
            cpu_y: self.cpu.y,
            ball: self.ball.pos,
            player_score: self.player_score,
            cpu_score: self.cpu_score,
            scored: self.scored,
        }
    }
}

/// Copyable read-only view of the game for renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_y: f32,
    pub cpu_y: f32,
    pub ball: Vec2,
    pub player_score: u32,
    pub cpu_score: u32,
    pub scored: bool,
}

/// Something that happened during an update (for audio/logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Scene switched (menu -> game)
    SceneChanged(Scene),
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// Ball left the field; `scorer` got the point
    Goal { scorer: Side },
    /// Ball put back in play after the round delay
    Served,
}
