// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key tracker: turn raw key levels into per-poll [`InputFrame`]s.
//!
//! ## Usage
//!
//! 1) Each frame, read which keys are physically down from your windowing or
//!    game library and map them onto [`Signals`].
//! 2) Call [`KeyTracker::update`] with that set and the frame time.
//! 3) Feed the returned frame to [`CommandWindow::poll`](crate::CommandWindow::poll).
//!
//! ## Minimal example
//!
//! ```
//! use rpgmenu_nav::KeyTracker;
//! use rpgmenu_tree::Signals;
//!
//! let mut keys = KeyTracker::new();
//! let f = keys.update(Signals::FORWARD, 16);
//! assert!(f.forward());
//! // Still down: no new edge, but the hold time grows.
//! let f = keys.update(Signals::FORWARD, 16);
//! assert!(!f.forward());
//! assert_eq!(f.forward_held_ms, 16);
//! ```

use rpgmenu_tree::{InputFrame, Signals};

/// Edge and hold-time tracker over key levels.
///
/// A signal is reported as pressed on the first update where it is down after
/// an update where it was up. Hold times count from that edge and reset to zero
/// on release.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyTracker {
    down: Signals,
    forward_held_ms: u32,
    back_held_ms: u32,
}

impl KeyTracker {
    /// A tracker with every key up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys down as of the last update.
    pub fn down(&self) -> Signals {
        self.down
    }

    /// Record the keys down this frame, `elapsed_ms` after the previous update.
    pub fn update(&mut self, down: Signals, elapsed_ms: u32) -> InputFrame {
        let pressed = down.difference(self.down);
        self.forward_held_ms = hold(self.forward_held_ms, self.down, down, Signals::FORWARD, elapsed_ms);
        self.back_held_ms = hold(self.back_held_ms, self.down, down, Signals::BACK, elapsed_ms);
        self.down = down;
        InputFrame {
            pressed,
            forward_held_ms: self.forward_held_ms,
            back_held_ms: self.back_held_ms,
        }
    }

    /// Forget every held key, e.g. after the menu was hidden.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn hold(held: u32, before: Signals, now: Signals, key: Signals, elapsed_ms: u32) -> u32 {
    match (before.contains(key), now.contains(key)) {
        (true, true) => held.saturating_add(elapsed_ms),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_reported_once() {
        let mut k = KeyTracker::new();
        assert!(k.update(Signals::CONFIRM, 16).confirm());
        assert!(!k.update(Signals::CONFIRM, 16).confirm());
        assert!(!k.update(Signals::empty(), 16).confirm());
        assert!(k.update(Signals::CONFIRM, 16).confirm());
    }

    #[test]
    fn hold_time_accumulates_and_resets() {
        let mut k = KeyTracker::new();
        let mut frame = k.update(Signals::BACK, 100);
        assert_eq!(frame.back_held_ms, 0);
        for _ in 0..5 {
            frame = k.update(Signals::BACK, 100);
        }
        assert_eq!(frame.back_held_ms, 500);
        assert_eq!(frame.forward_held_ms, 0);
        assert_eq!(k.update(Signals::empty(), 100).back_held_ms, 0);
    }

    #[test]
    fn chords_report_only_new_keys() {
        let mut k = KeyTracker::new();
        k.update(Signals::FORWARD, 16);
        let frame = k.update(Signals::FORWARD | Signals::CANCEL, 16);
        assert_eq!(frame.pressed, Signals::CANCEL);
        assert_eq!(frame.forward_held_ms, 16);
    }

    #[test]
    fn clear_forgets_levels() {
        let mut k = KeyTracker::new();
        k.update(Signals::CONFIRM, 16);
        k.clear();
        assert_eq!(k.down(), Signals::empty());
        assert!(k.update(Signals::CONFIRM, 16).confirm());
    }
}
