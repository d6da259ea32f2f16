// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rpgmenu_tree --heading-base-level=0

//! Rpgmenu Tree: a Kurbo-native command tree for turn-based game menus.
//!
//! Rpgmenu Tree holds the commands a battle or field menu offers, how each level
//! behaves when it is the active one, and how each level is drawn.
//!
//! - A [`MenuTree`] owns every node; callers address nodes with copyable [`NodeId`] handles.
//! - Each node has one of four fixed behaviors ([`NodeKind`]): plain lists, scrolling
//!   lists, quantity-gated item lists, and yes/no confirmation prompts.
//! - [`MenuTree::step`] applies one poll of input to the node on top of a navigation
//!   stack (a `Vec<NodeId>`) and may return a resolved command path such as `"Magic/Fire"`.
//! - [`MenuTree::draw`] emits rectangles, triangles and text through a [`Painter`].
//!
//! The navigation stack itself, and resetting it after a command resolves, lives
//! in `rpgmenu_nav`.
//!
//! ## Layout
//!
//! Sizing happens when children are appended and never afterwards: a panel is as
//! wide as its widest child label plus [`Metrics::label_margin`] plus the node's
//! padding, and one measured line taller per child. Text extents come from the
//! [`TextMeasure`] given at construction ([`FixedMeasure`] by default).
//!
//! ## Example
//!
//! ```
//! use rpgmenu_inventory::Inventory;
//! use rpgmenu_tree::{Entry, InputFrame, MenuTree, Signals};
//!
//! let mut tree = MenuTree::new("base");
//! let root = tree.root();
//! tree.append(root, "Attack");
//! let magic = tree.append(root, Entry::scrollable("Magic", 4));
//! tree.append_leaves(magic, ["Fire", "Ice", "Bolt"]);
//!
//! let inventory = Inventory::new();
//! let mut stack = vec![root];
//! let down = InputFrame::press(Signals::FORWARD);
//! let ok = InputFrame::press(Signals::CONFIRM);
//!
//! assert_eq!(tree.step(&mut stack, &down, &inventory), None);
//! assert_eq!(tree.step(&mut stack, &ok, &inventory), None);
//! assert_eq!(stack, [root, magic]);
//! assert_eq!(tree.step(&mut stack, &ok, &inventory).as_deref(), Some("Magic/Fire"));
//! ```
//!
//! ## Recording a frame
//!
//! ```
//! use kurbo::Point;
//! use rpgmenu_inventory::Inventory;
//! use rpgmenu_tree::{MenuTree, Recorder, Style};
//!
//! let mut tree = MenuTree::new("base");
//! tree.append_leaves(tree.root(), ["Attack", "Defend"]);
//!
//! let mut rec = Recorder::new();
//! tree.draw(tree.root(), Point::ORIGIN, &Style::default(), &Inventory::new(), &mut rec);
//! assert_eq!(rec.texts().collect::<Vec<_>>(), ["Attack", "Defend"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod draw;
mod paint;
mod step;
mod tree;
mod types;

pub use paint::{DrawCall, FixedMeasure, Painter, Recorder, TextMeasure};
pub use tree::{MenuTree, NodeRef};
pub use types::{
    Color, DEFAULT_NO, DEFAULT_YES, Entry, EntryKind, InputFrame, Metrics, NodeId, NodeKind,
    RepeatPolicy, Signals, Style, TreeError,
};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn frame_grows_with_each_append() {
        let mut tree = MenuTree::new("base");
        let root = tree.root();
        assert_eq!(tree.get(root).unwrap().frame(), Rect::ZERO);
        tree.append(root, "Run");
        assert_eq!(tree.get(root).unwrap().frame(), Rect::new(0.0, 0.0, 26.0, 16.0));
        tree.append(root, "Attack");
        assert_eq!(tree.get(root).unwrap().frame(), Rect::new(0.0, 0.0, 44.0, 32.0));
        // A narrower label leaves the width alone.
        tree.append(root, "Go");
        assert_eq!(tree.get(root).unwrap().frame(), Rect::new(0.0, 0.0, 44.0, 48.0));
    }

    #[test]
    fn position_offsets_the_frame() {
        let mut tree = MenuTree::new("base");
        let magic = tree.append(
            tree.root(),
            Entry::plain("Magic").with_position(kurbo::Point::new(0.0, 24.0)),
        );
        tree.append(magic, "Fire");
        let frame = tree.get(magic).unwrap().frame();
        assert_eq!(frame.origin(), kurbo::Point::new(0.0, 24.0));
        assert_eq!(frame.width(), 32.0);
    }

    #[test]
    fn lookup_by_label() {
        let mut tree = MenuTree::new("base");
        let root = tree.root();
        let item = tree.append(root, Entry::quantity_gated("Item", 4));
        let potion = tree.append(item, Entry::confirmation("Potion"));

        assert_eq!(tree.child(root, "Item"), Ok(item));
        assert_eq!(tree.find(["Item", "Potion"]), Ok(potion));
        assert_eq!(
            tree.find(["Item", "Elixir"]),
            Err(TreeError::NotFound {
                label: "Elixir".into()
            })
        );
    }

    #[test]
    fn duplicate_labels_overwrite_the_index() {
        let mut tree = MenuTree::new("base");
        let root = tree.root();
        let first = tree.append(root, "Fire");
        let second = tree.append(root, "Fire");
        assert_ne!(first, second);
        assert_eq!(tree.get(root).unwrap().children(), [first, second]);
        assert_eq!(tree.child(root, "Fire"), Ok(second));
    }

    #[test]
    fn try_append_refuses_duplicates() {
        let mut tree = MenuTree::new("base");
        let root = tree.root();
        tree.try_append(root, "Fire").unwrap();
        assert_eq!(
            tree.try_append(root, "Fire"),
            Err(TreeError::DuplicateLabel {
                label: "Fire".into()
            })
        );
        assert_eq!(tree.get(root).unwrap().children().len(), 1);
    }

    #[test]
    fn foreign_handles_are_reported() {
        let mut big = MenuTree::new("base");
        let far = (0..4).map(|i| big.append(big.root(), Entry::plain(alloc::format!("{i}")))).last().unwrap();
        let mut small = MenuTree::new("base");
        assert_eq!(small.try_append(far, "x"), Err(TreeError::StaleId(far)));
        assert!(small.get(far).is_none());
        assert_eq!(small.child(far, "x"), Err(TreeError::StaleId(far)));
    }

    #[test]
    fn confirmation_is_populated_at_construction() {
        let mut tree = MenuTree::new("base");
        let tent = tree.append(tree.root(), Entry::confirmation_with("Tent", "Use", "Cancel"));
        let view = tree.get(tent).unwrap();
        assert_eq!(view.kind(), NodeKind::Confirmation);
        assert_eq!(view.selection(), 1);
        let labels: alloc::vec::Vec<_> = view
            .children()
            .iter()
            .map(|&c| tree.get(c).unwrap().label())
            .collect();
        assert_eq!(labels, ["Use", "Cancel"]);
        assert!(view.children().iter().all(|&c| tree.get(c).unwrap().is_leaf()));
    }

    #[test]
    fn in_range_handles_are_not_tree_checked() {
        let mut big = MenuTree::new("base");
        let attack = big.append(big.root(), "Attack");
        let mut small = MenuTree::new("base");
        let run = small.append(small.root(), "Run");
        // Same index in both trees: the handle addresses `Run` in `small`.
        assert_eq!(attack, run);
        assert!(small.contains(attack));
        assert_eq!(small.get(attack).unwrap().label(), "Run");
    }

    #[test]
    fn confirmation_rows_are_fixed() {
        let mut tree = MenuTree::new("base");
        let tent = tree.append(tree.root(), Entry::confirmation("Tent"));
        let yes = tree.get(tent).unwrap().children()[0];
        assert_eq!(
            tree.try_append(tent, "Maybe"),
            Err(TreeError::FixedRows {
                label: "Tent".into()
            })
        );
        assert_eq!(
            tree.try_append(yes, "Sure"),
            Err(TreeError::FixedRows {
                label: "Yes".into()
            })
        );
        assert_eq!(tree.get(tent).unwrap().children().len(), 2);
        // Other parents are unaffected.
        assert!(tree.try_append(tree.root(), "Run").is_ok());
    }

    #[test]
    #[should_panic(expected = "takes no children")]
    fn append_under_prompt_panics() {
        let mut tree = MenuTree::new("base");
        let tent = tree.append(tree.root(), Entry::confirmation("Tent"));
        tree.append(tent, "Maybe");
    }

    #[test]
    fn scrolling_kinds_report_viewport() {
        let mut tree = MenuTree::new("base");
        let magic = tree.append(tree.root(), Entry::scrollable("Magic", 12));
        let view = tree.get(magic).unwrap();
        assert_eq!(view.visible_lines(), Some(12));
        assert_eq!(view.scroll_offset(), Some(0));
        assert_eq!(tree.get(tree.root()).unwrap().visible_lines(), None);
    }
}
