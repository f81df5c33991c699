//! Per-frame match driver
//!
//! The host calls [`MatchRunner::frame`] once per animation frame. Each call
//! runs one full tick, hands the result to presentation and audio, and tells
//! the host whether to schedule another frame.

use crate::ports::{AudioPort, InputPort, PresentationPort};
use crate::sim::{GameEvent, MatchState, TickInput, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request another frame
    Continue,
    /// Match is over, stop scheduling
    Halt,
}

/// Owns a match and drives it through the ports
pub struct MatchRunner<P, A> {
    state: MatchState,
    presenter: P,
    audio: A,
    /// Set once the first key arrives; frames before that only draw
    running: bool,
    frames: u64,
}

impl<P: PresentationPort, A: AudioPort> MatchRunner<P, A> {
    pub fn new(state: MatchState, presenter: P, audio: A) -> Self {
        Self {
            state,
            presenter,
            audio,
            running: false,
            frames: 0,
        }
    }

    /// Read-only view of the match
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames processed since the match started running
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Let ticks through. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            log::info!("Match started (seed {})", self.state.seed);
            self.running = true;
        }
    }

    /// Draw the board without advancing (initial frame before play starts)
    pub fn draw(&mut self) {
        self.presenter.draw(&self.state);
    }

    /// Run one frame: tick, draw, play cues.
    ///
    /// Before [`start`](Self::start) this only draws. Once the match is over it
    /// keeps returning [`LoopControl::Halt`] without touching the state.
    pub fn frame(&mut self, input: &mut impl InputPort) -> LoopControl {
        if !self.running {
            self.draw();
            return LoopControl::Continue;
        }
        if self.state.is_over() {
            return LoopControl::Halt;
        }

        let events = tick(&mut self.state, &TickInput::new(input.intent()));
        self.frames += 1;

        self.presenter.draw(&self.state);
        self.dispatch(&events);

        if self.state.is_over() {
            log::info!("Match over after {} frames, halting loop", self.frames);
            LoopControl::Halt
        } else {
            LoopControl::Continue
        }
    }

    /// Drive frames until the match ends or `max_frames` run out.
    /// Returns the number of frames run.
    pub fn run(&mut self, input: &mut impl InputPort, max_frames: u64) -> u64 {
        self.start();
        let mut ran = 0;
        while ran < max_frames {
            ran += 1;
            if self.frame(input) == LoopControl::Halt {
                break;
            }
        }
        ran
    }

    /// Give the finished match back, e.g. to start a new one
    pub fn into_state(self) -> MatchState {
        self.state
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            self.audio.handle(event);
        }
    }
}
