//! Duel Pong - a two-paddle volley match
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, serve, scoring)
//! - `game_loop`: Per-frame driver that steps the sim and feeds the ports
//! - `ports`: Presentation/audio/input seams the loop talks to
//! - `renderer`: Backend-agnostic draw list for a frame
//! - `audio`: Sound cue dispatch
//! - `input`: Keyboard to movement intent mapping
//! - `settings`: Player preferences

pub mod audio;
pub mod game_loop;
pub mod input;
pub mod ports;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{LoopControl, MatchRunner};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per rendered frame)
    pub const SIM_HZ: u32 = 60;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 1400.0;
    pub const BOARD_HEIGHT: f32 = 700.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 65.0;
    /// Distance of each paddle from its board edge
    pub const PADDLE_EDGE_OFFSET: f32 = 150.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 11.0;
    /// Slightly slower than the ball and the player
    pub const OPPONENT_PADDLE_SPEED: f32 = 6.5;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;
    pub const BALL_START_SPEED: f32 = 7.0;
    /// Added to the ball speed every time either side scores
    pub const BALL_SPEED_INCREMENT: f32 = 0.2;

    /// First side to reach this many points wins
    pub const WINNING_SCORE: u32 = 2;

    /// Delay between a score and the next serve (1000 ms)
    pub const SERVE_DELAY_MS: u64 = 1000;
    pub const SERVE_DELAY_TICKS: u64 = SERVE_DELAY_MS * SIM_HZ as u64 / 1000;
}
