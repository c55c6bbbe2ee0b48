//! Input collaborators

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Produces one input snapshot per tick
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn poll(&mut self) -> TickInput {
        (**self).poll()
    }
}

/// Replays a fixed list of snapshots, then asks the loop to quit
///
/// Doubles as a tick limit for headless runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    /// Empty snapshots to hand out once `frames` runs dry
    idle_ticks: u64,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            idle_ticks: 0,
        }
    }

    /// `ticks` snapshots with no keys held
    pub fn idle(ticks: u64) -> Self {
        Self {
            frames: VecDeque::new(),
            idle_ticks: ticks,
        }
    }

    /// Snapshots left before the quit signal
    pub fn remaining(&self) -> u64 {
        self.frames.len() as u64 + self.idle_ticks
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        if let Some(frame) = self.frames.pop_front() {
            return frame;
        }
        if self.idle_ticks > 0 {
            self.idle_ticks -= 1;
            return TickInput::default();
        }
        TickInput::quit()
    }
}
