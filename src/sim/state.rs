//! Match state and core simulation types
//!
//! Everything a match needs to resume deterministically lives here.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball parked at center, waiting for the serve delay
    Serving,
    /// Ball moving, collisions active
    InPlay,
    /// A side reached the winning score. Terminal.
    GameOver,
}

/// Which paddle a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle on the left
    Player,
    /// Engine-controlled paddle on the right
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Vertical motion along one axis. Also used as the player's movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Vertical {
    #[default]
    Stopped,
    Up,
    Down,
}

/// Movement intent for a paddle this tick
pub type MoveIntent = Vertical;

/// Horizontal motion of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Horizontal {
    #[default]
    Stopped,
    Left,
    Right,
}

impl Vertical {
    /// Signed y offset for one step of `speed` (screen coords, y grows downward)
    pub fn offset(self, speed: f32) -> f32 {
        match self {
            Vertical::Stopped => 0.0,
            Vertical::Up => -speed,
            Vertical::Down => speed,
        }
    }
}

impl Horizontal {
    pub fn offset(self, speed: f32) -> f32 {
        match self {
            Horizontal::Stopped => 0.0,
            Horizontal::Left => -speed,
            Horizontal::Right => speed,
        }
    }
}

/// A paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub score: u32,
    pub intent: MoveIntent,
    /// Units per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, BOARD_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            score: 0,
            intent: MoveIntent::Stopped,
            speed,
        }
    }

    /// Left paddle, driven by the human
    pub fn player() -> Self {
        Self::new(PADDLE_EDGE_OFFSET, PLAYER_PADDLE_SPEED)
    }

    /// Right paddle, driven by the engine
    pub fn opponent() -> Self {
        Self::new(BOARD_WIDTH - PADDLE_EDGE_OFFSET, OPPONENT_PADDLE_SPEED)
    }

    /// Largest y that keeps the paddle on the board
    pub fn max_y(&self) -> f32 {
        BOARD_HEIGHT - self.size.y
    }

    /// Keep the paddle inside `0 ..= BOARD_HEIGHT - height`
    pub fn clamp_to_board(&mut self) {
        self.pos.y = self.pos.y.clamp(0.0, self.max_y());
    }

    /// Apply the current intent for one tick
    pub fn apply_intent(&mut self) {
        self.pos.y += self.intent.offset(self.speed);
        self.clamp_to_board();
    }
}

/// The ball. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub dir_x: Horizontal,
    pub dir_y: Vertical,
    /// Units per tick on each moving axis
    pub speed: f32,
}

impl Ball {
    /// A stationary ball at board center
    pub fn new(speed: f32) -> Self {
        Self {
            pos: Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0),
            size: Vec2::new(BALL_WIDTH, BALL_HEIGHT),
            dir_x: Horizontal::Stopped,
            dir_y: Vertical::Stopped,
            speed,
        }
    }

    /// Move one tick along both axes independently
    pub fn advance(&mut self) {
        self.pos.y += self.dir_y.offset(self.speed);
        self.pos.x += self.dir_x.offset(self.speed);
    }
}

/// Something that happened during a tick, for audio/presentation consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// A side won the point
    Scored(Side),
    /// A side reached the winning score
    GameOver(Side),
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Number of RNGs handed out so far
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator for one draw; advances the stream so the next one differs.
    /// Seed and stream stay separate PCG inputs, so neighboring seeds don't
    /// replay each other's draws.
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Seed for the serve coin flip
    pub seed: u64,
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Paddle that receives the next serve
    pub serve_target: Option<Side>,
    /// Tick at or after which the pending serve fires
    pub serve_deadline: u64,
}

impl MatchState {
    /// Start a new match with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            phase: GamePhase::Serving,
            player: Paddle::player(),
            opponent: Paddle::opponent(),
            ball: Ball::new(BALL_START_SPEED),
            serve_target: Some(Side::Player),
            // First serve goes out on the first tick; later ones wait the delay
            serve_deadline: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Side that reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        if !self.is_over() {
            return None;
        }
        [Side::Player, Side::Opponent]
            .into_iter()
            .find(|&side| self.paddle(side).score >= WINNING_SCORE)
    }

    /// Whether the pending serve delay has run out
    pub fn serve_due(&self) -> bool {
        self.time_ticks >= self.serve_deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_layout() {
        let state = MatchState::new(1);
        assert_eq!(state.phase, GamePhase::Serving);
        assert_eq!(state.serve_target, Some(Side::Player));
        assert_eq!(state.player.pos, Vec2::new(150.0, 350.0));
        assert_eq!(state.opponent.pos, Vec2::new(1250.0, 350.0));
        assert_eq!(state.ball.pos, Vec2::new(700.0, 350.0));
        assert_eq!(state.ball.speed, 7.0);
        assert_eq!(state.player.score + state.opponent.score, 0);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_paddle_clamps_at_both_edges() {
        let mut paddle = Paddle::player();
        paddle.pos.y = 3.0;
        paddle.intent = MoveIntent::Up;
        paddle.apply_intent();
        assert_eq!(paddle.pos.y, 0.0);

        paddle.pos.y = paddle.max_y() - 1.0;
        paddle.intent = MoveIntent::Down;
        paddle.apply_intent();
        assert_eq!(paddle.pos.y, BOARD_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_stopped_ball_does_not_move() {
        let mut ball = Ball::new(9.0);
        let before = ball.pos;
        ball.advance();
        assert_eq!(ball.pos, before);
    }

    #[test]
    fn test_rng_streams_advance() {
        let mut rng_state = RngState::new(42);
        let _ = rng_state.next_rng();
        let _ = rng_state.next_rng();
        assert_eq!(rng_state.stream, 2);
        assert_eq!(rng_state.seed, 42);
    }

    #[test]
    fn test_neighboring_seeds_draw_independently() {
        use rand::RngCore;

        // Second draw of seed 5 vs first draw of seed 6
        let mut a = RngState::new(5);
        let _ = a.next_rng();
        let mut b = RngState::new(6);
        assert_ne!(a.next_rng().next_u64(), b.next_rng().next_u64());
    }

    #[test]
    fn test_same_seed_and_stream_repeat() {
        use rand::RngCore;

        let mut a = RngState::new(9);
        let mut b = RngState::new(9);
        assert_eq!(a.next_rng().next_u64(), b.next_rng().next_u64());
        assert_eq!(a.next_rng().next_u64(), b.next_rng().next_u64());
    }

    #[test]
    fn test_first_serve_is_due_immediately() {
        let state = MatchState::new(1);
        assert_eq!(state.serve_deadline, 0);
        assert!(state.serve_due());
    }
}
