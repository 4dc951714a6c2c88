//! What to draw for the current frame
//!
//! Built from read-only simulation state. Quads are in field units and
//! `Pod`, so a GPU renderer can upload them as an instance buffer. Text is
//! positioned in screen pixels (origin bottom-left).

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::consts::*;
use crate::sim::{BitSource, MenuOption, Scene, Side, Simulation, Snapshot};

/// Base text scale
pub const TEXT_SCALE: f32 = 1.0;

/// Colors for game elements
pub mod colors {
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 3] = [1.0, 1.0, 1.0];
    pub const TEXT_DIM: [f32; 3] = [0.5, 0.5, 0.5];
}

/// A solid axis-aligned rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Quad {
    pub center: [f32; 2],
    pub half_extents: [f32; 2],
    pub color: [f32; 4],
}

impl Quad {
    pub fn new(center: Vec2, half_extents: Vec2, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            half_extents: half_extents.to_array(),
            color,
        }
    }

    fn paddle(side: Side, y: f32) -> Self {
        Self::new(
            Vec2::new(side.paddle_x(), y),
            Vec2::new(PADDLE_HALF_W, PADDLE_HALF_H),
            colors::PADDLE,
        )
    }

    fn ball(pos: Vec2) -> Self {
        Self::new(pos, Vec2::splat(BALL_HALF_SIZE), colors::BALL)
    }
}

/// Which end of the string sits at `pos`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    /// Text grows leftward from `pos`
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub scale: f32,
    pub color: [f32; 3],
    pub align: TextAlign,
}

impl TextItem {
    fn new(text: impl Into<String>, pos: Vec2, scale: f32, color: [f32; 3]) -> Self {
        Self {
            text: text.into(),
            pos,
            scale,
            color,
            align: TextAlign::Left,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub quads: Vec<Quad>,
    pub texts: Vec<TextItem>,
}

impl DrawList {
    /// Draw list for whatever scene the simulation is in
    pub fn build<B: BitSource>(sim: &Simulation<B>) -> Self {
        match sim.scene() {
            Scene::MainMenu => Self::menu(sim.menu_option()),
            Scene::InGame => Self::game(&sim.snapshot()),
        }
    }

    /// Title plus the two options, the selected one lit
    pub fn menu(selected: MenuOption) -> Self {
        let option_color = |option: MenuOption| {
            if option == selected {
                colors::TEXT
            } else {
                colors::TEXT_DIM
            }
        };

        let center_x = SCREEN_W / 2.0;
        let texts = vec![
            TextItem::new(
                "Pong",
                Vec2::new(center_x - 150.0, SCREEN_H / 2.0 + SCREEN_H / 4.0),
                TEXT_SCALE,
                colors::TEXT,
            ),
            TextItem::new(
                MenuOption::StartGame.label(),
                Vec2::new(center_x - 250.0, SCREEN_H / 2.0),
                TEXT_SCALE * 0.9,
                option_color(MenuOption::StartGame),
            ),
            TextItem::new(
                MenuOption::QuitGame.label(),
                Vec2::new(center_x - 250.0, SCREEN_H / 3.0),
                TEXT_SCALE * 0.9,
                option_color(MenuOption::QuitGame),
            ),
        ];

        Self {
            quads: Vec::new(),
            texts,
        }
    }

    /// Paddles always; the ball only while in play; scores only between rounds
    pub fn game(snapshot: &Snapshot) -> Self {
        let mut quads = Vec::with_capacity(3);
        if !snapshot.scored {
            quads.push(Quad::ball(snapshot.ball));
        }
        quads.push(Quad::paddle(Side::Player, snapshot.player_y));
        quads.push(Quad::paddle(Side::Cpu, snapshot.cpu_y));

        let mut texts = Vec::new();
        if snapshot.scored {
            let text_x = 200.0;
            let text_y = SCREEN_H - 125.0;
            texts.push(TextItem::new(
                snapshot.player_score.to_string(),
                Vec2::new(text_x, text_y),
                TEXT_SCALE,
                colors::TEXT,
            ));
            texts.push(TextItem {
                align: TextAlign::Right,
                ..TextItem::new(
                    snapshot.cpu_score.to_string(),
                    Vec2::new(SCREEN_W - text_x, text_y),
                    TEXT_SCALE,
                    colors::TEXT,
                )
            });
        }

        Self { quads, texts }
    }

    /// Quad instances as raw bytes for a GPU buffer
    pub fn quads_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }
}
