// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering seam: text measurement, drawing primitives, and a recording painter.
//!
//! ## Overview
//!
//! The tree never rasterizes anything. Layout asks a [`TextMeasure`] for label
//! extents when nodes are appended, and [`MenuTree::draw`](crate::MenuTree::draw)
//! issues a fixed sequence of [`Painter`] calls per node:
//!
//! 1) the panel (fill, then outline),
//! 2) one text call per visible row,
//! 3) the selection bar,
//! 4) scrollbar decorations, for scrolling kinds.
//!
//! [`Recorder`] captures that sequence as [`DrawCall`] values, which is how the
//! tests assert geometry and how headless hosts can replay a frame.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use unicode_width::UnicodeWidthStr;

use crate::types::Color;

/// Measures the extent of a single-line label.
pub trait TextMeasure {
    /// Size of `text` when drawn on one line.
    fn measure_text(&self, text: &str) -> Size;
}

/// Drawing primitives used by [`MenuTree::draw`](crate::MenuTree::draw).
pub trait Painter {
    /// Fill `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Outline `rect` with a stroke of `width` drawn inside its edges.
    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color);
    /// Fill a triangle.
    fn fill_triangle(&mut self, points: [Point; 3], color: Color);
    /// Draw `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point);
}

/// Cell-based measurement: every display column is `cell_width` wide.
///
/// Columns follow Unicode East Asian Width, so full-width labels measure twice
/// as wide as ASCII ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMeasure {
    /// Width of one display column.
    pub cell_width: f64,
    /// Height of one line.
    pub line_height: f64,
}

impl FixedMeasure {
    /// Number of display columns `text` occupies.
    pub fn columns(text: &str) -> usize {
        text.width()
    }
}

impl Default for FixedMeasure {
    fn default() -> Self {
        Self {
            cell_width: 6.0,
            line_height: 16.0,
        }
    }
}

impl TextMeasure for FixedMeasure {
    fn measure_text(&self, text: &str) -> Size {
        let columns = Self::columns(text) as f64;
        Size::new(columns * self.cell_width, self.line_height)
    }
}

/// One recorded painter call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// [`Painter::fill_rect`].
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Painter::stroke_rect`].
    StrokeRect {
        /// Outlined area.
        rect: Rect,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// [`Painter::fill_triangle`].
    Triangle {
        /// Vertices.
        points: [Point; 3],
        /// Fill color.
        color: Color,
    },
    /// [`Painter::draw_text`].
    Text {
        /// The string drawn.
        text: String,
        /// Top-left corner.
        origin: Point,
    },
}

/// A [`Painter`] that records calls instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// Calls in issue order.
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Text of every [`DrawCall::Text`], in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rectangles of every [`DrawCall::FillRect`] painted with `color`, in order.
    pub fn fills_with(&self, color: Color) -> impl Iterator<Item = Rect> + '_ {
        self.calls.iter().filter_map(move |c| match c {
            DrawCall::FillRect { rect, color: c } if *c == color => Some(*rect),
            _ => None,
        })
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Painter for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        self.calls.push(DrawCall::StrokeRect { rect, width, color });
    }

    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        self.calls.push(DrawCall::Triangle { points, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        self.calls.push(DrawCall::Text {
            text: text.into(),
            origin,
        });
    }
}
