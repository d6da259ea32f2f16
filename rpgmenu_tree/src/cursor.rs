// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection cursor with hold-to-repeat, and the scroll viewport that follows it.

use crate::types::{InputFrame, RepeatPolicy};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Back,
}

/// Row cursor of one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) selection: usize,
    // Polls spent in the current repeat run; zero when no key is held past the threshold.
    repeat_ticks: u32,
}

impl Cursor {
    pub(crate) const fn at(selection: usize) -> Self {
        Self {
            selection,
            repeat_ticks: 0,
        }
    }

    /// Apply this poll's directional input to a list of `len` rows.
    ///
    /// Returns whether the selection changed.
    pub(crate) fn update(&mut self, len: usize, input: &InputFrame, policy: &RepeatPolicy) -> bool {
        let before = self.selection;
        if input.forward() {
            self.advance(Direction::Forward, len);
        } else if input.back() {
            self.advance(Direction::Back, len);
        } else if let Some(dir) = Self::held(input, policy) {
            let fire = self.repeat_ticks % policy.every.max(1) == 0;
            self.repeat_ticks = self.repeat_ticks.wrapping_add(1);
            if fire {
                log::trace!("hold repeat {dir:?}");
                self.advance(dir, len);
            }
        } else {
            self.repeat_ticks = 0;
        }
        self.selection != before
    }

    fn held(input: &InputFrame, policy: &RepeatPolicy) -> Option<Direction> {
        if input.forward_held_ms > policy.threshold_ms {
            Some(Direction::Forward)
        } else if input.back_held_ms > policy.threshold_ms {
            Some(Direction::Back)
        } else {
            None
        }
    }

    fn advance(&mut self, dir: Direction, len: usize) {
        let last = len.saturating_sub(1);
        self.selection = match dir {
            Direction::Forward => (self.selection + 1).min(last),
            Direction::Back => self.selection.saturating_sub(1).min(last),
        };
    }
}

/// Visible window over a node's rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Viewport {
    pub(crate) lines: usize,
    pub(crate) offset: usize,
}

impl Viewport {
    pub(crate) fn new(lines: usize) -> Self {
        Self {
            lines: lines.max(1),
            offset: 0,
        }
    }

    /// Scroll the minimum amount that keeps `selection` visible.
    pub(crate) fn follow(&mut self, selection: usize) {
        if self.offset > selection {
            self.offset = selection;
        }
        if selection > self.offset + self.lines - 1 {
            self.offset = selection + 1 - self.lines;
        }
    }

    /// Row range currently shown, clipped to `len`.
    pub(crate) fn visible(&self, len: usize) -> core::ops::Range<usize> {
        let start = self.offset.min(len);
        start..(self.offset + self.lines).min(len)
    }
}
