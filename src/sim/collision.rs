//! Collision detection for axis-aligned boxes
//!
//! Ball and paddles are boxes; the field is a box centered on the origin.
//! Every test here is inclusive: touching counts as overlapping.

use glam::Vec2;

use super::state::Side;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Both axes overlap (edges touching counts)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
    }
}

/// Box of a ball centered at `pos`
pub fn ball_box(pos: Vec2) -> Aabb {
    Aabb::from_center(pos, Vec2::splat(BALL_HALF_SIZE))
}

/// Box of `side`'s paddle centered vertically at `y`
pub fn paddle_box(side: Side, y: f32) -> Aabb {
    Aabb::from_center(
        Vec2::new(side.paddle_x(), y),
        Vec2::new(PADDLE_HALF_W, PADDLE_HALF_H),
    )
}

/// Which horizontal wall a ball would touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

impl Wall {
    /// Vertical direction after bouncing off this wall. Uses the magnitude
    /// so a direction that already points away stays pointing away.
    pub fn reflect(self, dy: f32) -> f32 {
        match self {
            Wall::Top => -dy.abs(),
            Wall::Bottom => dy.abs(),
        }
    }
}

/// Wall the ball would reach if its center moved to `y`
pub fn ball_wall_hit(y: f32) -> Option<Wall> {
    if y + BALL_HALF_SIZE >= FIELD_H {
        Some(Wall::Top)
    } else if y - BALL_HALF_SIZE <= -FIELD_H {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Side that scores if the ball center moved to `x`, if the ball would
/// leave the field there
pub fn ball_out_of_bounds(x: f32) -> Option<Side> {
    if x + BALL_HALF_SIZE <= -FIELD_W {
        // Past the player's edge
        Some(Side::Cpu)
    } else if x - BALL_HALF_SIZE >= FIELD_W {
        Some(Side::Player)
    } else {
        None
    }
}

/// A paddle centered at `y` would touch or cross the top/bottom of the field
pub fn paddle_breaches_field(y: f32) -> bool {
    y + PADDLE_HALF_H >= FIELD_H || y - PADDLE_HALF_H <= -FIELD_H
}

/// Part of a paddle the ball struck, split into thirds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceZone {
    Upper,
    Middle,
    Lower,
}

impl BounceZone {
    /// Zone of a paddle centered at `paddle_y` that the ball center `ball_y` falls in
    pub fn classify(ball_y: f32, paddle_y: f32) -> Self {
        let boundary = PADDLE_THIRD_H / 2.0;
        if ball_y > paddle_y + boundary {
            BounceZone::Upper
        } else if ball_y < paddle_y - boundary {
            BounceZone::Lower
        } else {
            BounceZone::Middle
        }
    }
}
