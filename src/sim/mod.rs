//! Deterministic simulation module
//!
//! All match logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, timing counted in ticks
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{ball_paddle_overlap, deflect, resolve_paddle_contact};
pub use opponent::{track_ball, tracking_target};
pub use state::{
    Ball, GameEvent, GamePhase, Horizontal, MatchState, MoveIntent, Paddle, RngState, Side,
    Vertical,
};
pub use tick::{TickInput, reset_ball, tick};
