// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the command tree: handles, entries, input frames, and configuration.

use alloc::string::String;
use kurbo::{Point, Size};

/// Identifier for a node in a [`MenuTree`](crate::MenuTree).
///
/// Trees are append-only, so a `NodeId` stays valid for the lifetime of the tree
/// that issued it. Handles carry no tree identity: a handle from a different tree
/// is only detected (as [`TreeError::StaleId`]) when its index is beyond this
/// tree's node count; otherwise it addresses whichever node has that index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Errors from tree construction and lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// No child with this label exists under the queried parent.
    #[error("no child labelled `{label}`")]
    NotFound {
        /// The label that was looked up.
        label: String,
    },
    /// [`MenuTree::try_append`](crate::MenuTree::try_append) refused a sibling with a label already in use.
    #[error("a sibling labelled `{label}` already exists")]
    DuplicateLabel {
        /// The label that collided.
        label: String,
    },
    /// Confirmation prompts and their yes/no rows take no further children.
    #[error("`{label}` is part of a confirmation prompt and takes no children")]
    FixedRows {
        /// Label of the refusing parent.
        label: String,
    },
    /// The handle's index is beyond this tree's nodes.
    #[error("node handle {0:?} does not belong to this tree")]
    StaleId(NodeId),
}

/// The fixed set of node behaviors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Every child is listed; confirm descends or resolves.
    Plain,
    /// Like `Plain`, but only a window of rows is shown, with a scrollbar.
    Scrollable,
    /// Scrollable list whose rows carry counts from an inventory; descent is gated on a positive count.
    QuantityGated,
    /// A yes/no prompt; "no" and cancel both back out. Its two rows are fixed leaves.
    Confirmation,
}

/// Label used for the accepting row of a confirmation prompt by default.
pub const DEFAULT_YES: &str = "Yes";
/// Label used for the declining row of a confirmation prompt by default.
pub const DEFAULT_NO: &str = "No";

/// Behavior chosen for a new node, with its variant-specific parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// See [`NodeKind::Plain`].
    Plain,
    /// See [`NodeKind::Scrollable`].
    Scrollable {
        /// Rows visible at once (at least one).
        visible_lines: usize,
    },
    /// See [`NodeKind::QuantityGated`].
    QuantityGated {
        /// Rows visible at once (at least one).
        visible_lines: usize,
    },
    /// See [`NodeKind::Confirmation`]. The two labels become the node's children.
    Confirmation {
        /// Accepting row (index 0).
        yes: String,
        /// Declining row (index 1), selected by default.
        no: String,
    },
}

impl EntryKind {
    /// The behavior tag this entry produces.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Plain => NodeKind::Plain,
            Self::Scrollable { .. } => NodeKind::Scrollable,
            Self::QuantityGated { .. } => NodeKind::QuantityGated,
            Self::Confirmation { .. } => NodeKind::Confirmation,
        }
    }
}

/// Description of a node to append to a tree.
///
/// ```
/// use rpgmenu_tree::{Entry, NodeKind};
/// use kurbo::Point;
///
/// let magic = Entry::scrollable("Magic", 12).with_position(Point::new(0.0, 24.0));
/// assert_eq!(magic.kind.kind(), NodeKind::Scrollable);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// Display name; also the key its parent indexes it by.
    pub label: String,
    /// Behavior and its parameters.
    pub kind: EntryKind,
    /// Offset of this node's panel inside the column it is drawn in.
    pub position: Point,
    /// Extra space added to the width computation. `None` picks the per-kind default.
    pub padding: Option<Size>,
}

impl Entry {
    fn new(label: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            label: label.into(),
            kind,
            position: Point::ORIGIN,
            padding: None,
        }
    }

    /// A plain command. With no children appended it is a selectable leaf.
    pub fn plain(label: impl Into<String>) -> Self {
        Self::new(label, EntryKind::Plain)
    }

    /// A scrolling list showing `visible_lines` rows at a time.
    pub fn scrollable(label: impl Into<String>, visible_lines: usize) -> Self {
        Self::new(label, EntryKind::Scrollable { visible_lines })
    }

    /// A scrolling item list gated by inventory counts.
    pub fn quantity_gated(label: impl Into<String>, visible_lines: usize) -> Self {
        Self::new(label, EntryKind::QuantityGated { visible_lines })
    }

    /// A yes/no prompt using [`DEFAULT_YES`] and [`DEFAULT_NO`].
    pub fn confirmation(label: impl Into<String>) -> Self {
        Self::confirmation_with(label, DEFAULT_YES, DEFAULT_NO)
    }

    /// A yes/no prompt with custom row labels, e.g. "Use"/"Cancel".
    pub fn confirmation_with(
        label: impl Into<String>,
        yes: impl Into<String>,
        no: impl Into<String>,
    ) -> Self {
        Self::new(
            label,
            EntryKind::Confirmation {
                yes: yes.into(),
                no: no.into(),
            },
        )
    }

    /// Set the panel offset.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Override the per-kind default padding.
    pub fn with_padding(mut self, padding: Size) -> Self {
        self.padding = Some(padding);
        self
    }
}

impl From<&str> for Entry {
    fn from(label: &str) -> Self {
        Self::plain(label)
    }
}

impl From<String> for Entry {
    fn from(label: String) -> Self {
        Self::plain(label)
    }
}

bitflags::bitflags! {
    /// The four menu keys.
    ///
    /// In [`InputFrame::pressed`] a bit is set only on the poll where the key went down.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Signals: u8 {
        /// Accept the highlighted row.
        const CONFIRM = 0b0000_0001;
        /// Back out one level.
        const CANCEL  = 0b0000_0010;
        /// Move the cursor to the next row.
        const FORWARD = 0b0000_0100;
        /// Move the cursor to the previous row.
        const BACK    = 0b0000_1000;
    }
}

impl Default for Signals {
    fn default() -> Self {
        Self::empty()
    }
}

/// Everything one poll needs to know about input.
///
/// `forward_held_ms`/`back_held_ms` report how long the directional keys have
/// been continuously down; they only drive hold-to-repeat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Keys that went down this poll.
    pub pressed: Signals,
    /// Continuous hold time of the forward key, in milliseconds.
    pub forward_held_ms: u32,
    /// Continuous hold time of the back key, in milliseconds.
    pub back_held_ms: u32,
}

impl InputFrame {
    /// No keys down.
    pub const IDLE: Self = Self {
        pressed: Signals::empty(),
        forward_held_ms: 0,
        back_held_ms: 0,
    };

    /// A frame where `signals` went down and nothing is held.
    pub const fn press(signals: Signals) -> Self {
        Self {
            pressed: signals,
            forward_held_ms: 0,
            back_held_ms: 0,
        }
    }

    /// A frame where the forward key has been held for `ms`.
    pub const fn hold_forward(ms: u32) -> Self {
        Self {
            pressed: Signals::empty(),
            forward_held_ms: ms,
            back_held_ms: 0,
        }
    }

    /// A frame where the back key has been held for `ms`.
    pub const fn hold_back(ms: u32) -> Self {
        Self {
            pressed: Signals::empty(),
            forward_held_ms: 0,
            back_held_ms: ms,
        }
    }

    /// Confirm went down this poll.
    pub fn confirm(&self) -> bool {
        self.pressed.contains(Signals::CONFIRM)
    }

    /// Cancel went down this poll.
    pub fn cancel(&self) -> bool {
        self.pressed.contains(Signals::CANCEL)
    }

    /// Forward went down this poll.
    pub fn forward(&self) -> bool {
        self.pressed.contains(Signals::FORWARD)
    }

    /// Back went down this poll.
    pub fn back(&self) -> bool {
        self.pressed.contains(Signals::BACK)
    }
}

/// Hold-to-repeat cadence for cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RepeatPolicy {
    /// A directional key must be held strictly longer than this before repeating.
    pub threshold_ms: u32,
    /// While repeating, move on every `every`-th poll (the first qualifying poll moves).
    pub every: u32,
}

impl Default for RepeatPolicy {
    fn default() -> Self {
        Self {
            threshold_ms: 400,
            every: 3,
        }
    }
}

/// Layout constants shared by every node of a tree.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Metrics {
    /// Nominal font size; also the side of the scrollbar arrow boxes.
    pub font_size: f64,
    /// Vertical distance between rows.
    pub line_pitch: f64,
    /// Horizontal inset of row text and the highlight bar.
    pub text_inset: f64,
    /// Space added to a label's width when sizing the panel.
    pub label_margin: f64,
    /// Vertical offset of the highlight bar within its row.
    pub highlight_offset: f64,
    /// Height of the highlight bar.
    pub highlight_height: f64,
    /// Width of the scrollbar column on scrolling lists.
    pub scrollbar_width: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            line_pitch: 24.0,
            text_inset: 4.0,
            label_margin: 8.0,
            highlight_offset: 2.0,
            highlight_height: 20.0,
            scrollbar_width: 12.0,
        }
    }
}

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Half-transparent light blue used for the selection bar.
    pub const HIGHLIGHT: Self = Self::rgba(173, 216, 230, 127);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Colors and stroke width used when drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Style {
    /// Panel background.
    pub fill: Color,
    /// Panel outline.
    pub border: Color,
    /// Outline thickness.
    pub border_width: f64,
    /// Selection bar.
    pub highlight: Color,
    /// Scrollbar thumb and arrow glyphs.
    pub thumb: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            border: Color::WHITE,
            border_width: 1.0,
            highlight: Color::HIGHLIGHT,
            thumb: Color::WHITE,
        }
    }
}
