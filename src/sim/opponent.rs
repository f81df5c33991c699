//! Engine-controlled paddle
//!
//! Proportional tracker: every tick the paddle steps toward the point that
//! would center it on the ball's top edge. No prediction and no dead-band.
//! The upward and downward checks run one after the other, and the second sees
//! the y the first produced, so a step that overshoots the target is taken
//! straight back and the paddle holds.

use super::state::{Ball, Paddle};

/// Top-edge y that lines the paddle's middle up with the ball's y
pub fn tracking_target(paddle: &Paddle, ball: &Ball) -> f32 {
    ball.pos.y - paddle.size.y / 2.0
}

/// Step the paddle one tick toward the ball, then clamp to the board
pub fn track_ball(paddle: &mut Paddle, ball: &Ball) {
    let target = tracking_target(paddle, ball);
    if paddle.pos.y > target {
        paddle.pos.y -= paddle.speed;
    }
    if paddle.pos.y < target {
        paddle.pos.y += paddle.speed;
    }
    paddle.clamp_to_board();
}
