//! Polled keyboard state.
//!
//! Keys are identified by their `KeyboardEvent.key` string.

use std::collections::{HashSet, VecDeque};

pub const ARROW_UP: &str = "ArrowUp";
pub const ARROW_DOWN: &str = "ArrowDown";
pub const ARROW_LEFT: &str = "ArrowLeft";
pub const ARROW_RIGHT: &str = "ArrowRight";

/// The set of keys currently down, plus a queue of key presses.
///
/// The down set persists until the matching key-up. The press queue is
/// drained by [`Keyboard::reset`] every frame.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    down: HashSet<String>,
    presses: VecDeque<String>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every key in `keys` is currently down.
    ///
    /// An empty slice is trivially satisfied.
    pub fn is_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().all(|k| self.down.contains(*k))
    }

    /// Key presses received since the last reset, oldest first.
    pub fn presses(&self) -> impl Iterator<Item = &str> {
        self.presses.iter().map(String::as_str)
    }

    pub fn handle_key_down(&mut self, key: &str) {
        if !self.down.contains(key) {
            self.down.insert(key.to_string());
        }
    }

    pub fn handle_key_up(&mut self, key: &str) {
        self.down.remove(key);
    }

    pub fn handle_key_press(&mut self, key: &str) {
        self.presses.push_back(key.to_string());
    }

    /// Drop every held key, e.g. when the window loses focus and key-up
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.down.clear();
    }

    /// Drain the press queue. Down keys are kept.
    pub fn reset(&mut self) {
        self.presses.clear();
    }
}
