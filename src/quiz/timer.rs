// src/quiz/timer.rs

/// Per-question countdown, advanced one time unit per `tick()`.
///
/// Holds no clock of its own: whoever owns the repeating timer calls `tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn start(&mut self, duration: u32) {
        self.remaining = duration;
        self.running = duration > 0;
    }

    /// Counts down one unit. Returns `true` exactly once, on the tick that
    /// reaches zero; the countdown is stopped afterwards.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
