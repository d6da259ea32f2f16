// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative menu documents.
//!
//! A [`MenuDocument`] describes a whole command window (tree, layout, repeat
//! cadence, colors, and optionally a starting inventory) in any serde format.
//! In TOML, nested commands are written as `[[entry]]` tables:
//!
//! ```toml
//! root = "base"
//! origin = [320.0, 0.0]
//!
//! [[entry]]
//! label = "Attack"
//!
//! [[entry]]
//! label = "Magic"
//! kind = "scrollable"
//! lines = 12
//!
//!   [[entry.entry]]
//!   label = "Fire"
//!
//! [inventory.Item]
//! Potion = 3
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Point;
use rpgmenu_inventory::Inventory;
use rpgmenu_tree::{
    DEFAULT_NO, DEFAULT_YES, Entry, FixedMeasure, MenuTree, Metrics, NodeId, RepeatPolicy, Style,
    TreeError,
};
use serde::{Deserialize, Serialize};

use crate::window::{CommandWindow, NavError};

/// Rows shown by scrolling kinds whose document omits `lines`.
pub const DEFAULT_VISIBLE_LINES: usize = 6;

/// Node behavior as written in a document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindDocument {
    /// A plain list or leaf.
    #[default]
    Plain,
    /// A scrolling list.
    Scrollable,
    /// A scrolling list gated by inventory counts.
    QuantityGated,
    /// A yes/no prompt.
    Confirmation,
}

/// One command and its sub-commands.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDocument {
    /// Display name and lookup key.
    pub label: String,
    /// Behavior.
    pub kind: KindDocument,
    /// Visible rows for scrolling kinds.
    pub lines: Option<usize>,
    /// Accepting row label for confirmations.
    pub yes: Option<String>,
    /// Declining row label for confirmations.
    pub no: Option<String>,
    /// Panel offset inside its column.
    pub position: Option<[f64; 2]>,
    /// Sub-commands, in display order.
    #[serde(rename = "entry", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<EntryDocument>,
}

impl EntryDocument {
    /// The tree entry this document line describes.
    pub fn to_entry(&self) -> Entry {
        let lines = self.lines.unwrap_or(DEFAULT_VISIBLE_LINES);
        let entry = match self.kind {
            KindDocument::Plain => Entry::plain(self.label.clone()),
            KindDocument::Scrollable => Entry::scrollable(self.label.clone(), lines),
            KindDocument::QuantityGated => Entry::quantity_gated(self.label.clone(), lines),
            KindDocument::Confirmation => Entry::confirmation_with(
                self.label.clone(),
                self.yes.as_deref().unwrap_or(DEFAULT_YES),
                self.no.as_deref().unwrap_or(DEFAULT_NO),
            ),
        };
        match self.position {
            Some([x, y]) => entry.with_position(Point::new(x, y)),
            None => entry,
        }
    }
}

/// A complete command window description.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuDocument {
    /// Root label; never part of resolved paths.
    pub root: String,
    /// Top-left corner of the first column.
    pub origin: [f64; 2],
    /// Layout constants.
    pub metrics: Metrics,
    /// Hold-to-repeat cadence.
    pub repeat: RepeatPolicy,
    /// Colors and stroke width.
    pub style: Style,
    /// Top-level commands.
    #[serde(rename = "entry")]
    pub entries: Vec<EntryDocument>,
    /// Starting counts for quantity-gated lists.
    pub inventory: Inventory,
}

impl Default for MenuDocument {
    fn default() -> Self {
        Self {
            root: String::from(CommandWindow::ROOT_LABEL),
            origin: [0.0, 0.0],
            metrics: Metrics::default(),
            repeat: RepeatPolicy::default(),
            style: Style::default(),
            entries: Vec::new(),
            inventory: Inventory::new(),
        }
    }
}

impl MenuDocument {
    /// Build the described window.
    ///
    /// Fails on sibling commands sharing a label, and on children listed under a
    /// confirmation prompt.
    pub fn build(&self) -> Result<CommandWindow, NavError> {
        let mut tree = MenuTree::with_config(
            Entry::plain(self.root.clone()),
            self.metrics,
            self.repeat,
            FixedMeasure::default(),
        );
        let root = tree.root();
        append_all(&mut tree, root, &self.entries)?;
        log::debug!("built menu `{}` with {} nodes", self.root, tree.len());
        let [x, y] = self.origin;
        Ok(CommandWindow::with_tree(tree, Point::new(x, y)))
    }
}

fn append_all(tree: &mut MenuTree, parent: NodeId, entries: &[EntryDocument]) -> Result<(), TreeError> {
    for doc in entries {
        let id = tree.try_append(parent, doc.to_entry())?;
        append_all(tree, id, &doc.children)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpgmenu_tree::{InputFrame, NodeKind, Signals};

    const BATTLE: &str = r#"
        root = "base"
        origin = [320.0, 0.0]

        [repeat]
        every = 2

        [[entry]]
        label = "Attack"

        [[entry]]
        label = "Magic"
        kind = "scrollable"
        lines = 12

          [[entry.entry]]
          label = "Fire"

          [[entry.entry]]
          label = "Ice"

        [[entry]]
        label = "Item"
        kind = "quantity_gated"

          [[entry.entry]]
          label = "Potion"
          kind = "confirmation"
          yes = "Use"
          no = "Cancel"

        [inventory.Item]
        Potion = 2
    "#;

    #[test]
    fn toml_document_builds_window() {
        let doc: MenuDocument = toml::from_str(BATTLE).unwrap();
        assert_eq!(doc.repeat.every, 2);
        assert_eq!(doc.repeat.threshold_ms, RepeatPolicy::default().threshold_ms);
        assert_eq!(doc.inventory.get("Item", "Potion"), 2);

        let w = doc.build().unwrap();
        assert_eq!(w.origin(), Point::new(320.0, 0.0));
        let tree = w.tree();
        let magic = tree.get(tree.find(["Magic"]).unwrap()).unwrap();
        assert_eq!(magic.kind(), NodeKind::Scrollable);
        assert_eq!(magic.visible_lines(), Some(12));
        let item = tree.get(tree.find(["Item"]).unwrap()).unwrap();
        assert_eq!(item.visible_lines(), Some(DEFAULT_VISIBLE_LINES));
        assert!(tree.find(["Item", "Potion", "Use"]).is_ok());
    }

    #[test]
    fn built_window_resolves_item_path() {
        let doc: MenuDocument = toml::from_str(BATTLE).unwrap();
        let mut w = doc.build().unwrap();
        let inv = &doc.inventory;
        let ok = InputFrame::press(Signals::CONFIRM);
        let _ = w.poll(&InputFrame::press(Signals::FORWARD), inv);
        let _ = w.poll(&InputFrame::press(Signals::FORWARD), inv);
        let _ = w.poll(&ok, inv);
        let _ = w.poll(&ok, inv);
        let _ = w.poll(&InputFrame::press(Signals::BACK), inv);
        assert_eq!(w.poll(&ok, inv).into_path().as_deref(), Some("Item/Potion/Use"));
    }

    #[test]
    fn sibling_duplicates_are_rejected() {
        let doc: MenuDocument = toml::from_str(
            r#"
            [[entry]]
            label = "Run"
            [[entry]]
            label = "Run"
            "#,
        )
        .unwrap();
        assert_eq!(
            doc.build().unwrap_err(),
            NavError::Tree(TreeError::DuplicateLabel { label: "Run".into() })
        );
    }

    #[test]
    fn children_under_confirmation_are_rejected() {
        let doc: MenuDocument = toml::from_str(
            r#"
            [[entry]]
            label = "Run"
            kind = "confirmation"

              [[entry.entry]]
              label = "Maybe"
            "#,
        )
        .unwrap();
        assert_eq!(
            doc.build().unwrap_err(),
            NavError::Tree(TreeError::FixedRows { label: "Run".into() })
        );
    }

    #[test]
    fn empty_document_is_bare_root() {
        let doc: MenuDocument = toml::from_str("").unwrap();
        let w = doc.build().unwrap();
        assert_eq!(w.tree().len(), 1);
        assert_eq!(w.current_path_preview().unwrap(), "base");
    }
}
