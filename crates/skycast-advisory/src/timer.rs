//! Focus timer countdown. The caller drives `tick` once per second.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FOCUS_SECS: u32 = 25 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTimer {
    duration_secs: u32,
    remaining_secs: u32,
    active: bool,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_SECS)
    }
}

impl FocusTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            active: false,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// No-op once the countdown has reached zero; `reset` first.
    pub fn start(&mut self) {
        if !self.is_finished() {
            self.active = true;
        }
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.remaining_secs = self.duration_secs;
        self.active = false;
    }

    /// Advance one second. Returns true on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if !self.active || self.remaining_secs == 0 {
            return false;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.active = false;
            return true;
        }
        false
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}
