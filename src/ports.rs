//! Seams between the simulation loop and the outside world
//!
//! The loop owns the match state. Everything behind these traits only ever
//! sees it by shared reference and can't write back.

use crate::sim::{GameEvent, MatchState, MoveIntent, Side};

/// Draws a finished tick
pub trait PresentationPort {
    /// Render board, paddles, ball, both scores and, once the match is over,
    /// the winner banner
    fn draw(&mut self, snapshot: &MatchState);
}

/// Fire-and-forget sound cues. Playback failures stay on this side of the seam.
pub trait AudioPort {
    fn on_paddle_hit(&mut self, side: Side);

    fn on_game_over(&mut self, winner: Side);

    /// Route one engine event to the matching cue
    fn handle(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PaddleHit(side) => self.on_paddle_hit(side),
            GameEvent::GameOver(winner) => self.on_game_over(winner),
            GameEvent::Scored(_) => {}
        }
    }
}

/// Source of the human paddle's movement intent
pub trait InputPort {
    /// Intent to apply this tick
    fn intent(&mut self) -> MoveIntent;
}

impl InputPort for MoveIntent {
    fn intent(&mut self) -> MoveIntent {
        *self
    }
}

/// Presentation that draws nothing (headless runs)
impl PresentationPort for () {
    fn draw(&mut self, _snapshot: &MatchState) {}
}

/// Silent audio
impl AudioPort for () {
    fn on_paddle_hit(&mut self, _side: Side) {}

    fn on_game_over(&mut self, _winner: Side) {}
}
