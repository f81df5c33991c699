//! Duel Pong entry point
//!
//! Headless native driver: loads settings, plays one match with a simple
//! autopilot standing in for the keyboard, and logs the result.
//!
//! Usage: `duel-pong [settings.json]`

use std::path::PathBuf;

use duel_pong::audio::AudioManager;
use duel_pong::audio::LogSink;
use duel_pong::renderer::FramePresenter;
use duel_pong::sim::{Horizontal, MatchState, MoveIntent};
use duel_pong::{LoopControl, MatchRunner, Settings};

/// Chase the ball only while it is coming toward the player
fn autopilot(state: &MatchState) -> MoveIntent {
    if state.ball.dir_x != Horizontal::Left {
        return MoveIntent::Stopped;
    }
    let paddle_mid = state.player.pos.y + state.player.size.y / 2.0;
    let ball_mid = state.ball.pos.y + state.ball.size.y / 2.0;
    if ball_mid < paddle_mid - state.player.speed {
        MoveIntent::Up
    } else if ball_mid > paddle_mid + state.player.speed {
        MoveIntent::Down
    } else {
        MoveIntent::Stopped
    }
}

fn main() {
    env_logger::init();
    log::info!("Duel Pong (native) starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load_or_default(&path),
        None => Settings::default(),
    };

    let seed = settings.seed_or_random();
    log::info!("Game initialized with seed: {}", seed);

    let audio = AudioManager::from_settings(LogSink, &settings);
    let mut runner = MatchRunner::new(MatchState::new(seed), FramePresenter::new(), audio);

    runner.draw();
    runner.start();

    let frame_time = settings.frame_duration();
    let mut halted = false;
    for _ in 0..settings.max_frames {
        let mut intent = autopilot(runner.state());
        if runner.frame(&mut intent) == LoopControl::Halt {
            halted = true;
            break;
        }
        if settings.realtime {
            std::thread::sleep(frame_time);
        }
    }

    let state = runner.state();
    if halted {
        log::info!(
            "Final score: player {} - opponent {} ({} frames, {} cues)",
            state.player.score,
            state.opponent.score,
            runner.frames(),
            runner.audio().cues_played()
        );
    } else {
        log::warn!(
            "Stopped after {} frames without a winner ({} - {})",
            runner.frames(),
            state.player.score,
            state.opponent.score
        );
    }
}
