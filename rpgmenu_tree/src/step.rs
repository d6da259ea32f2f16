// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-poll update rules for each node kind.
//!
//! ## Overview
//!
//! [`MenuTree::step`] looks at the node on top of the navigation stack and applies
//! that node's rule for this poll's [`InputFrame`]:
//!
//! - Confirm on a leaf resolves the path `a/b/.../leaf` (the root's own label is
//!   not part of it). Confirm on a branch pushes the branch.
//! - Cancel pops the stack. Popping the root leaves the stack empty, which the
//!   caller treats as "menu cancelled".
//! - Otherwise the cursor moves, with hold-to-repeat.
//!
//! The kinds differ only where noted:
//!
//! | Kind            | Differences                                                      |
//! |-----------------|------------------------------------------------------------------|
//! | `Plain`         | none                                                             |
//! | `Scrollable`    | viewport follows the cursor after every poll                     |
//! | `QuantityGated` | as `Scrollable`, and descent needs a positive inventory count    |
//! | `Confirmation`  | "no" pops instead of resolving; selection snaps back to "no"     |

use alloc::string::String;
use alloc::vec::Vec;
use rpgmenu_inventory::Inventory;

use crate::tree::{CONFIRM_NO_SLOT, MenuTree, Variant};
use crate::types::{InputFrame, NodeId};

impl MenuTree {
    /// Advance the node on top of `stack` by one poll.
    ///
    /// Returns the resolved path when a leaf command was accepted. The stack is
    /// left as is in that case; resetting it is the caller's job.
    /// `inventory` is only consulted by quantity-gated nodes.
    ///
    /// An empty stack, or a stack holding any handle this tree did not issue, is a no-op.
    pub fn step(
        &mut self,
        stack: &mut Vec<NodeId>,
        input: &InputFrame,
        inventory: &Inventory,
    ) -> Option<String> {
        let top = *stack.last()?;
        if let Some(&foreign) = stack.iter().find(|&&id| !self.contains(id)) {
            log::debug!("ignoring stack holding foreign handle {foreign:?}");
            return None;
        }
        match self.nodes[top.idx()].variant {
            Variant::Plain => self.step_plain(top, stack, input, None),
            Variant::Scrollable(_) => {
                let out = self.step_plain(top, stack, input, None);
                self.follow_cursor(top);
                out
            }
            Variant::QuantityGated(_) => {
                let out = self.step_plain(top, stack, input, Some(inventory));
                self.follow_cursor(top);
                out
            }
            Variant::Confirmation => self.step_confirmation(top, stack, input),
        }
    }

    /// Shared rule. With `gate` set, descending into a branch requires
    /// `gate.get(top label, branch label) > 0`; a closed gate swallows the input.
    fn step_plain(
        &mut self,
        top: NodeId,
        stack: &mut Vec<NodeId>,
        input: &InputFrame,
        gate: Option<&Inventory>,
    ) -> Option<String> {
        if input.confirm() {
            let child = self.selected(top)?;
            if self.is_leaf(child) {
                return Some(self.resolve(stack, child));
            }
            if let Some(inventory) = gate {
                let (category, item) = (self.label(top), self.label(child));
                let count = inventory.get(category, item);
                if count <= 0 {
                    log::debug!("gate closed: {category}/{item} has {count}");
                    return None;
                }
            }
            log::debug!("descend into `{}`", self.label(child));
            stack.push(child);
        } else if input.cancel() {
            stack.pop();
            log::debug!("ascend from `{}`", self.label(top));
        } else {
            self.move_cursor(top, input);
        }
        None
    }

    fn step_confirmation(
        &mut self,
        top: NodeId,
        stack: &mut Vec<NodeId>,
        input: &InputFrame,
    ) -> Option<String> {
        if input.confirm() {
            // Both rows are leaves: prompts refuse further children.
            let child = self.selected(top)?;
            let accepted = self.nodes[top.idx()].cursor.selection == 0;
            self.nodes[top.idx()].cursor.selection = CONFIRM_NO_SLOT;
            if accepted {
                return Some(self.resolve(stack, child));
            }
            stack.pop();
            log::debug!("declined `{}`", self.label(top));
        } else if input.cancel() {
            stack.pop();
            self.nodes[top.idx()].cursor.selection = CONFIRM_NO_SLOT;
            log::debug!("ascend from `{}`", self.label(top));
        } else {
            self.move_cursor(top, input);
        }
        None
    }

    fn selected(&self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id.idx()];
        let child = node.children.get(node.cursor.selection).copied();
        if child.is_none() {
            log::debug!("confirm on `{}` with nothing to select", node.label);
        }
        child
    }

    fn move_cursor(&mut self, id: NodeId, input: &InputFrame) {
        let policy = self.repeat;
        let node = &mut self.nodes[id.idx()];
        if node.cursor.update(node.children.len(), input, &policy) {
            log::trace!("`{}` cursor -> {}", node.label, node.cursor.selection);
        }
    }

    fn follow_cursor(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.idx()];
        let selection = node.cursor.selection;
        if let Some(viewport) = node.variant.viewport_mut() {
            viewport.follow(selection);
        }
    }

    /// Join the stack (minus the root) and `leaf` with `/`.
    pub(crate) fn resolve(&self, stack: &[NodeId], leaf: NodeId) -> String {
        let mut path = String::new();
        for &id in stack.iter().filter(|&&id| id != self.root()) {
            path.push_str(self.label(id));
            path.push('/');
        }
        path.push_str(self.label(leaf));
        log::debug!("resolved `{path}`");
        path
    }
}
