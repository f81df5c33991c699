//! Ball/paddle collision detection and response
//!
//! Both bodies are axis-aligned rectangles anchored at their top-left corner.
//! Horizontally the ball counts as touching when its x lies within
//! `[paddle.x - paddle.width, paddle.x + ball.width]`. Contact is only checked
//! at tick boundaries, so a fast enough ball can pass through a paddle between
//! two ticks.

use super::state::{Ball, Horizontal, Paddle, Side};

/// Whether the ball currently overlaps the paddle
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    let horizontal =
        ball.pos.x - ball.size.x <= paddle.pos.x && ball.pos.x >= paddle.pos.x - paddle.size.x;
    let vertical =
        ball.pos.y <= paddle.pos.y + paddle.size.y && ball.pos.y + ball.size.y >= paddle.pos.y;
    horizontal && vertical
}

/// Bounce the ball off `side`'s paddle.
///
/// The ball is snapped one ball width clear of the paddle's x toward the
/// board center so the same contact can't fire again next tick.
pub fn deflect(ball: &mut Ball, paddle: &Paddle, side: Side) {
    match side {
        Side::Player => {
            ball.pos.x = paddle.pos.x + ball.size.x;
            ball.dir_x = Horizontal::Right;
        }
        Side::Opponent => {
            ball.pos.x = paddle.pos.x - ball.size.x;
            ball.dir_x = Horizontal::Left;
        }
    }
}

/// Check the ball against one paddle and bounce it on contact.
/// Returns true if it hit.
pub fn resolve_paddle_contact(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if ball_paddle_overlap(ball, paddle) {
        deflect(ball, paddle, side);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new(BALL_START_SPEED);
        ball.pos = Vec2::new(x, y);
        ball
    }

    #[test]
    fn test_overlap_on_paddle_face() {
        let paddle = Paddle::player();
        let ball = ball_at(paddle.pos.x + 5.0, paddle.pos.y + 10.0);
        assert!(ball_paddle_overlap(&ball, &paddle));
    }

    #[test]
    fn test_overlap_horizontal_edges() {
        let paddle = Paddle::player();
        let y = paddle.pos.y;
        // Right limit: ball.x - ball.width == paddle.x
        assert!(ball_paddle_overlap(&ball_at(paddle.pos.x + BALL_WIDTH, y), &paddle));
        assert!(!ball_paddle_overlap(&ball_at(paddle.pos.x + BALL_WIDTH + 0.5, y), &paddle));
        // Left limit: ball.x == paddle.x - paddle.width
        assert!(ball_paddle_overlap(&ball_at(paddle.pos.x - PADDLE_WIDTH, y), &paddle));
        assert!(!ball_paddle_overlap(&ball_at(paddle.pos.x - PADDLE_WIDTH - 0.5, y), &paddle));
    }

    #[test]
    fn test_overlap_vertical_edges() {
        let paddle = Paddle::opponent();
        let x = paddle.pos.x;
        assert!(ball_paddle_overlap(&ball_at(x, paddle.pos.y + PADDLE_HEIGHT), &paddle));
        assert!(!ball_paddle_overlap(&ball_at(x, paddle.pos.y + PADDLE_HEIGHT + 1.0), &paddle));
        assert!(ball_paddle_overlap(&ball_at(x, paddle.pos.y - BALL_HEIGHT), &paddle));
        assert!(!ball_paddle_overlap(&ball_at(x, paddle.pos.y - BALL_HEIGHT - 1.0), &paddle));
    }

    #[test]
    fn test_player_contact_sends_ball_right() {
        let paddle = Paddle::player();
        let mut ball = ball_at(paddle.pos.x + 3.0, paddle.pos.y);
        ball.dir_x = Horizontal::Left;

        assert!(resolve_paddle_contact(&mut ball, &paddle, Side::Player));
        assert_eq!(ball.dir_x, Horizontal::Right);
        assert_eq!(ball.pos.x, paddle.pos.x + BALL_WIDTH);
    }

    #[test]
    fn test_opponent_contact_sends_ball_left() {
        let paddle = Paddle::opponent();
        let mut ball = ball_at(paddle.pos.x - 2.0, paddle.pos.y + 30.0);
        ball.dir_x = Horizontal::Right;

        assert!(resolve_paddle_contact(&mut ball, &paddle, Side::Opponent));
        assert_eq!(ball.dir_x, Horizontal::Left);
        assert_eq!(ball.pos.x, paddle.pos.x - BALL_WIDTH);
    }

    #[test]
    fn test_miss_leaves_ball_alone() {
        let paddle = Paddle::player();
        let mut ball = ball_at(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0);
        ball.dir_x = Horizontal::Left;
        let before = ball.clone();

        assert!(!resolve_paddle_contact(&mut ball, &paddle, Side::Player));
        assert_eq!(ball, before);
    }
}
