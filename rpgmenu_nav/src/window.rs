// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation controller.
//!
//! ## Overview
//!
//! A [`CommandWindow`] pairs a [`MenuTree`] with the stack of levels the player
//! has drilled into. It is polled once per frame:
//!
//! - [`Outcome::Resolved`] carries the accepted command path; the stack is
//!   already back at the root.
//! - [`Outcome::Cancelled`] means the player backed out of the root level; the
//!   stack is already back at the root.
//! - [`Outcome::Continue`] covers everything else (cursor moves, descents,
//!   ascents, gated input that was swallowed).
//!
//! ## States
//!
//! | State        | Stack        | Left by                                   |
//! |--------------|--------------|-------------------------------------------|
//! | `IdleAtRoot` | `[root]`     | confirming a branch                        |
//! | `Descended`  | depth > 1    | cancelling back to the root, or resolving  |
//!
//! An empty stack only exists inside a single poll and is folded back into
//! `IdleAtRoot` before the poll returns.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use kurbo::Point;
use rpgmenu_inventory::Inventory;
use rpgmenu_tree::{InputFrame, MenuTree, NodeId, Painter, Style, TreeError};

/// Errors from the controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The navigation stack had no levels.
    #[error("navigation stack is empty")]
    EmptyStack,
    /// Building or querying the tree failed.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Result of one [`CommandWindow::poll`].
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was accepted or cancelled this poll.
    Continue,
    /// A leaf command was accepted; carries its `/`-joined path.
    Resolved(String),
    /// The player backed out past the root level.
    Cancelled,
}

impl Outcome {
    /// The resolved path, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Resolved(path) => Some(path),
            Self::Continue | Self::Cancelled => None,
        }
    }

    /// Take the resolved path, if any.
    pub fn into_path(self) -> Option<String> {
        match self {
            Self::Resolved(path) => Some(path),
            Self::Continue | Self::Cancelled => None,
        }
    }

    /// Whether this poll cancelled the menu.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Coarse navigation state, derived from the stack depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    /// Only the root level is open.
    IdleAtRoot,
    /// At least one level below the root is open.
    Descended,
}

/// A command tree plus the stack of open levels.
#[derive(Debug)]
pub struct CommandWindow {
    tree: MenuTree,
    stack: Vec<NodeId>,
    origin: Point,
}

impl CommandWindow {
    /// Label of the root node created by [`CommandWindow::new`].
    pub const ROOT_LABEL: &'static str = "base";

    /// An empty window whose columns start at `origin`.
    pub fn new(origin: Point) -> Self {
        Self::with_tree(MenuTree::new(Self::ROOT_LABEL), origin)
    }

    /// Wrap an existing tree.
    pub fn with_tree(tree: MenuTree, origin: Point) -> Self {
        let stack = vec![tree.root()];
        Self {
            tree,
            stack,
            origin,
        }
    }

    /// The command tree.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// The command tree, for appending commands.
    ///
    /// Trees are append-only, so open levels stay valid.
    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut self.tree
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Top-left corner of the first column.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the window.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Open levels, root first.
    pub fn stack(&self) -> &[NodeId] {
        &self.stack
    }

    /// Number of open levels.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The active level.
    pub fn top(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    /// Current state.
    pub fn state(&self) -> NavState {
        if self.stack.len() > 1 {
            NavState::Descended
        } else {
            NavState::IdleAtRoot
        }
    }

    /// Close every level but the root. Cursor positions are kept.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(self.tree.root());
    }

    /// Apply one frame of input.
    ///
    /// `inventory` is read (never written) by quantity-gated levels, so game logic
    /// may change it freely between polls.
    pub fn poll(&mut self, input: &InputFrame, inventory: &Inventory) -> Outcome {
        if self.stack.is_empty() {
            self.reset();
            return Outcome::Cancelled;
        }
        if let Some(path) = self.tree.step(&mut self.stack, input, inventory) {
            self.reset();
            return Outcome::Resolved(path);
        }
        if self.stack.is_empty() {
            log::debug!("menu cancelled at root");
            self.reset();
            return Outcome::Cancelled;
        }
        Outcome::Continue
    }

    /// Every open level's label plus the highlighted row of the active level,
    /// joined with `/` (e.g. `"base/Magic/Fire"`). Meant for title bars.
    pub fn current_path_preview(&self) -> Result<String, NavError> {
        let (&top, _) = self.stack.split_last().ok_or(NavError::EmptyStack)?;
        let label = |id| self.tree.get(id).map(|n| n.label()).ok_or(TreeError::StaleId(id));
        let mut out = String::new();
        for (i, &id) in self.stack.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            out.push_str(label(id)?);
        }
        let highlighted = self.tree.get(top).and_then(|n| n.selected_child());
        if let Some(child) = highlighted {
            out.push('/');
            out.push_str(label(child)?);
        }
        Ok(out)
    }

    /// Draw every open level, root first, each column placed right of the previous one.
    ///
    /// Returns the total width of the drawn columns.
    pub fn render<P: Painter + ?Sized>(
        &self,
        style: &Style,
        inventory: &Inventory,
        painter: &mut P,
    ) -> f64 {
        let mut at = self.origin;
        for &id in &self.stack {
            self.tree.draw(id, at, style, inventory, painter);
            if let Some(node) = self.tree.get(id) {
                at.x += node.frame().width();
            }
        }
        at.x - self.origin.x
    }
}
