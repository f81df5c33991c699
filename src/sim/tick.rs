//! Fixed-step match update
//!
//! One call to [`tick`] advances the match by one frame. Order of the steps
//! matters: each one sees what the earlier ones did in the same tick.

use rand::Rng;

use super::collision::resolve_paddle_contact;
use super::opponent::track_ball;
use super::state::{Ball, GameEvent, GamePhase, Horizontal, MatchState, MoveIntent, Side, Vertical};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// What the human wants the left paddle to do
    pub intent: MoveIntent,
}

impl TickInput {
    pub fn new(intent: MoveIntent) -> Self {
        Self { intent }
    }
}

/// Advance the match by one tick and report what happened.
///
/// A finished match is never touched again: no field changes and no events
/// are produced.
pub fn tick(state: &mut MatchState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;
    state.player.intent = input.intent;

    // Scoring. One check per tick: the replacement ball starts at center, so
    // it can't trip the other goal line in the same tick.
    if let Some(scorer) = goal_scored_by(&state.ball) {
        reset_ball(state, scorer, &mut events);
        if state.phase == GamePhase::GameOver {
            return events;
        }
    }

    // Top and bottom walls
    if state.ball.pos.y <= 0.0 {
        state.ball.dir_y = Vertical::Down;
    }
    if state.ball.pos.y >= BOARD_HEIGHT - state.ball.size.y {
        state.ball.dir_y = Vertical::Up;
    }

    state.player.apply_intent();

    if state.phase == GamePhase::Serving && state.serve_due() {
        if let Some(target) = state.serve_target {
            serve(state, target);
        }
    }

    state.ball.advance();

    track_ball(&mut state.opponent, &state.ball);

    if resolve_paddle_contact(&mut state.ball, &state.player, Side::Player) {
        events.push(GameEvent::PaddleHit(Side::Player));
    }
    if resolve_paddle_contact(&mut state.ball, &state.opponent, Side::Opponent) {
        events.push(GameEvent::PaddleHit(Side::Opponent));
    }

    events
}

/// Side that just won the point, if the ball crossed a goal line
fn goal_scored_by(ball: &Ball) -> Option<Side> {
    if ball.pos.x <= 0.0 {
        Some(Side::Opponent)
    } else if ball.pos.x >= BOARD_WIDTH - ball.size.x {
        Some(Side::Player)
    } else {
        None
    }
}

/// Award a point to `winner` and set up the next serve toward the loser.
///
/// The replacement ball is parked at center, a little faster than the last
/// one. Reaching [`WINNING_SCORE`] ends the match instead of scheduling a
/// serve.
pub fn reset_ball(state: &mut MatchState, winner: Side, events: &mut Vec<GameEvent>) {
    let score = {
        let paddle = state.paddle_mut(winner);
        paddle.score += 1;
        paddle.score
    };
    state.ball = Ball::new(state.ball.speed + BALL_SPEED_INCREMENT);
    events.push(GameEvent::Scored(winner));

    log::info!(
        "{:?} scored: player {} - opponent {}",
        winner,
        state.player.score,
        state.opponent.score
    );

    if score >= WINNING_SCORE {
        state.phase = GamePhase::GameOver;
        state.serve_target = None;
        events.push(GameEvent::GameOver(winner));
        log::info!("{:?} wins after {} ticks", winner, state.time_ticks);
        return;
    }

    state.serve_target = Some(winner.other());
    state.serve_deadline = state.time_ticks + SERVE_DELAY_TICKS;
    state.phase = GamePhase::Serving;
}

/// Launch the parked ball toward `target` with a coin-flip vertical direction
fn serve(state: &mut MatchState, target: Side) {
    let mut rng = state.rng_state.next_rng();

    state.ball.dir_x = match target {
        Side::Player => Horizontal::Left,
        Side::Opponent => Horizontal::Right,
    };
    state.ball.dir_y = if rng.random_bool(0.5) {
        Vertical::Up
    } else {
        Vertical::Down
    };
    state.ball.pos.y = BOARD_HEIGHT / 2.0;
    state.serve_target = None;
    state.phase = GamePhase::InPlay;

    log::debug!(
        "Serve toward {:?} ({:?}) at tick {}",
        target,
        state.ball.dir_y,
        state.time_ticks
    );
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn intent_strategy() -> impl Strategy<Value = MoveIntent> {
        prop_oneof![
            Just(MoveIntent::Stopped),
            Just(MoveIntent::Up),
            Just(MoveIntent::Down),
        ]
    }

    proptest! {
        /// Property: both paddles stay on the board whatever the player does
        #[test]
        fn prop_paddles_stay_on_board(
            seed in any::<u64>(),
            intents in prop::collection::vec(intent_strategy(), 1..600)
        ) {
            let mut state = MatchState::new(seed);
            for intent in intents {
                tick(&mut state, &TickInput::new(intent));
                for paddle in [&state.player, &state.opponent] {
                    prop_assert!(paddle.pos.y >= 0.0);
                    prop_assert!(paddle.pos.y <= BOARD_HEIGHT - paddle.size.y);
                }
            }
        }

        /// Property: ball speed never drops and grows by the increment per point
        #[test]
        fn prop_ball_speed_tracks_points(
            seed in any::<u64>(),
            intents in prop::collection::vec(intent_strategy(), 1..3000)
        ) {
            let mut state = MatchState::new(seed);
            for intent in intents {
                let speed_before = state.ball.speed;
                let events = tick(&mut state, &TickInput::new(intent));
                let points = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::Scored(_)))
                    .count();
                prop_assert!(points <= 1);
                if points == 1 {
                    prop_assert_eq!(state.ball.speed, speed_before + BALL_SPEED_INCREMENT);
                } else {
                    prop_assert_eq!(state.ball.speed, speed_before);
                }
            }
        }
    }
}
