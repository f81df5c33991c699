//! Draw list generation for a match snapshot

use glam::Vec2;

use super::colors::{BACKGROUND, FOREGROUND};
use super::{DrawCommand, FONT_SIZE, Frame, banner_text};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::sim::MatchState;

/// Horizontal distance of each score from the board's center line
const SCORE_OFFSET_X: f32 = 300.0;
const SCORE_Y: f32 = 100.0;
const BANNER_Y: f32 = 300.0;

fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> DrawCommand {
    DrawCommand::Rect { pos, size, color }
}

fn text(x: f32, y: f32, text: String) -> DrawCommand {
    DrawCommand::Text {
        pos: Vec2::new(x, y),
        text,
        size: FONT_SIZE,
        color: FOREGROUND,
    }
}

/// Board, paddles, ball, scores and (once decided) the winner banner
pub fn compose_frame(state: &MatchState) -> Frame {
    let center_x = BOARD_WIDTH / 2.0;
    let mut commands = Vec::with_capacity(7);

    commands.push(rect(
        Vec2::ZERO,
        Vec2::new(BOARD_WIDTH, BOARD_HEIGHT),
        BACKGROUND,
    ));
    for paddle in [&state.player, &state.opponent] {
        commands.push(rect(paddle.pos, paddle.size, FOREGROUND));
    }
    commands.push(rect(state.ball.pos, state.ball.size, FOREGROUND));

    commands.push(text(
        center_x - SCORE_OFFSET_X,
        SCORE_Y,
        state.player.score.to_string(),
    ));
    commands.push(text(
        center_x + SCORE_OFFSET_X,
        SCORE_Y,
        state.opponent.score.to_string(),
    ));

    if let Some(winner) = state.winner() {
        commands.push(text(center_x, BANNER_Y, banner_text(winner).to_string()));
    }

    Frame { commands }
}
