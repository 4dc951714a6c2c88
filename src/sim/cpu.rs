//! Scripted opponent
//!
//! Purely reactive: no prediction, and it ignores the ball until the ball
//! is well into its half.

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Vertical intent for the CPU paddle: +1 up, -1 down, 0 idle
pub fn cpu_intent(ball: &Ball, cpu: &Paddle) -> f32 {
    if ball.pos.x < CPU_ENGAGE_X {
        return 0.0;
    }

    if ball.pos.y > cpu.y + PADDLE_HALF_H {
        1.0
    } else if ball.pos.y < cpu.y - PADDLE_HALF_H {
        -1.0
    } else {
        0.0
    }
}
