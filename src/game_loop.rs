//! Fixed-tick game loop
//!
//! One thread, one iteration per tick: poll input, update, render, then sleep
//! whatever is left of the tick budget. The quit signal is checked once per
//! iteration; once stopped the loop never runs again.

use std::time::Duration;

use crate::platform::{Clock, InputSource};
use crate::renderer::Renderer;
use crate::sim::{GameState, tick};

/// Whether the loop is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal
    Stopped,
}

/// Final tally of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub left_score: u32,
    pub right_score: u32,
}

/// Owns the match state and drives it with the given collaborators
pub struct GameLoop<I, R, C> {
    state: GameState,
    input: I,
    renderer: R,
    clock: C,
    tick_budget: Duration,
    loop_state: LoopState,
    ticks: u64,
}

impl<I: InputSource, R: Renderer, C: Clock> GameLoop<I, R, C> {
    pub fn new(state: GameState, input: I, renderer: R, clock: C, tick_rate_hz: u32) -> Self {
        Self {
            state,
            input,
            renderer,
            clock,
            tick_budget: Duration::from_secs(1) / tick_rate_hz.max(1),
            loop_state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_budget(&self) -> Duration {
        self.tick_budget
    }

    /// Run a single iteration
    pub fn step(&mut self) -> LoopState {
        if self.loop_state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        let started = self.clock.now();
        let input = self.input.poll();
        if input.quit {
            log::info!("Quit requested after {} ticks", self.ticks);
            self.loop_state = LoopState::Stopped;
            return LoopState::Stopped;
        }

        let outcome = tick(&mut self.state, &input);
        self.ticks += 1;
        if let Some(side) = outcome.scored {
            log::info!(
                "Point to {} player, score {}",
                side.as_str(),
                self.state.score_text()
            );
        }
        if outcome.ball_reset {
            log::debug!("Ball recentered by the out-of-bounds reset");
        }

        if let Err(e) = self.renderer.render(&self.state) {
            log::warn!("Render error: {}", e);
        }

        let elapsed = self.clock.now().saturating_sub(started);
        if elapsed < self.tick_budget {
            self.clock.sleep(self.tick_budget - elapsed);
        } else if elapsed > self.tick_budget {
            log::debug!(
                "Tick {} overran its budget: {:?} > {:?}",
                self.ticks,
                elapsed,
                self.tick_budget
            );
        }

        LoopState::Running
    }

    /// Run until the input source asks to quit
    pub fn run(&mut self) -> LoopSummary {
        log::info!(
            "Game loop running at {:?} per tick (left AI: {}, right AI: {})",
            self.tick_budget,
            self.state.left_ai,
            self.state.right_ai
        );
        while self.step() == LoopState::Running {}
        self.summary()
    }

    pub fn summary(&self) -> LoopSummary {
        LoopSummary {
            ticks: self.ticks,
            left_score: self.state.left_score,
            right_score: self.state.right_score,
        }
    }
}
