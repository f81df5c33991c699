//! Presentation module
//!
//! Turns a match snapshot into a flat list of draw commands that any 2D
//! backend (canvas, GPU, terminal) can replay in order.

pub mod shapes;

use glam::Vec2;

use crate::ports::PresentationPort;
use crate::sim::{MatchState, Side};

pub use shapes::compose_frame;

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const FOREGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Score and banner font size in pixels
pub const FONT_SIZE: f32 = 80.0;

/// One primitive, in board coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle anchored at its top-left corner
    Rect {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    /// Text horizontally centered on `pos.x`, baseline at `pos.y`
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: [f32; 4],
    },
}

/// Everything drawn for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Text items in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Rect { .. } => None,
        })
    }
}

/// Victory banner text
pub fn banner_text(winner: Side) -> &'static str {
    match winner {
        Side::Player => "Player Wins",
        Side::Opponent => "AI Wins",
    }
}

/// Presenter that composes a frame per tick and keeps the latest one
#[derive(Debug, Default)]
pub struct FramePresenter {
    last: Frame,
    frames_drawn: u64,
    banner_logged: bool,
}

impl FramePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently composed frame
    pub fn last_frame(&self) -> &Frame {
        &self.last
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl PresentationPort for FramePresenter {
    fn draw(&mut self, snapshot: &MatchState) {
        self.last = compose_frame(snapshot);
        self.frames_drawn += 1;
        log::trace!("frame {}: {} commands", self.frames_drawn, self.last.commands.len());

        if let Some(winner) = snapshot.winner() {
            if !self.banner_logged {
                log::info!(
                    "{} ({} - {})",
                    banner_text(winner),
                    snapshot.player.score,
                    snapshot.opponent.score
                );
                self.banner_logged = true;
            }
        }
    }
}
