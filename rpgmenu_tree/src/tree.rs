// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: storage, append-time layout, and lookups.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Rect, Size};

use crate::cursor::{Cursor, Viewport};
use crate::paint::{FixedMeasure, TextMeasure};
use crate::types::{Entry, EntryKind, Metrics, NodeId, NodeKind, RepeatPolicy, TreeError};

/// Selection index of the declining row of a confirmation prompt.
pub(crate) const CONFIRM_NO_SLOT: usize = 1;

/// Per-kind state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Variant {
    Plain,
    Scrollable(Viewport),
    QuantityGated(Viewport),
    Confirmation,
}

impl Variant {
    pub(crate) fn kind(&self) -> NodeKind {
        match self {
            Self::Plain => NodeKind::Plain,
            Self::Scrollable(_) => NodeKind::Scrollable,
            Self::QuantityGated(_) => NodeKind::QuantityGated,
            Self::Confirmation => NodeKind::Confirmation,
        }
    }

    pub(crate) fn viewport(&self) -> Option<&Viewport> {
        match self {
            Self::Scrollable(v) | Self::QuantityGated(v) => Some(v),
            Self::Plain | Self::Confirmation => None,
        }
    }

    pub(crate) fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        match self {
            Self::Scrollable(v) | Self::QuantityGated(v) => Some(v),
            Self::Plain | Self::Confirmation => None,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) label: String,
    pub(crate) children: Vec<NodeId>,
    // Label -> position in `children`.
    pub(crate) index: BTreeMap<String, usize>,
    pub(crate) cursor: Cursor,
    // Relative panel box; grows as children are appended.
    pub(crate) frame: Rect,
    pub(crate) padding: Size,
    // Widest child label in display columns.
    pub(crate) label_columns: usize,
    pub(crate) variant: Variant,
    // Confirmation prompts and their two rows take no further children.
    pub(crate) sealed: bool,
}

/// An append-only tree of menu commands.
///
/// The tree owns every node. Callers hold [`NodeId`] handles and the navigation
/// stack is just a list of them, so no node is shared or reference counted.
pub struct MenuTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) metrics: Metrics,
    pub(crate) repeat: RepeatPolicy,
    pub(crate) measure: Box<dyn TextMeasure>,
}

impl core::fmt::Debug for MenuTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuTree")
            .field("nodes", &self.nodes.len())
            .field("metrics", &self.metrics)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}

impl MenuTree {
    /// Create a tree whose root is a plain node labelled `root_label`,
    /// using default metrics, repeat policy and [`FixedMeasure`].
    pub fn new(root_label: &str) -> Self {
        Self::with_config(
            Entry::plain(root_label),
            Metrics::default(),
            RepeatPolicy::default(),
            FixedMeasure::default(),
        )
    }

    /// Create a tree with explicit configuration.
    ///
    /// The root entry may be of any kind; it is never resolved as a command itself.
    pub fn with_config(
        root: Entry,
        metrics: Metrics,
        repeat: RepeatPolicy,
        measure: impl TextMeasure + 'static,
    ) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            metrics,
            repeat,
            measure: Box::new(measure),
        };
        tree.alloc(root);
        tree
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Layout constants in use.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Hold-to-repeat cadence in use.
    pub fn repeat_policy(&self) -> &RepeatPolicy {
        &self.repeat
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` indexes a node of this tree.
    ///
    /// Only the index is checked; see [`NodeId`] for handles from other trees.
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// Append a child to `parent` and return its handle.
    ///
    /// A label already used by a sibling is accepted: the new child takes over the
    /// label in the lookup index (the older sibling stays listed and selectable, but
    /// [`child`](Self::child) no longer finds it). Use [`try_append`](Self::try_append)
    /// to refuse duplicates instead.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree, or if `parent` is a
    /// confirmation prompt or one of its rows.
    pub fn append(&mut self, parent: NodeId, entry: impl Into<Entry>) -> NodeId {
        assert!(self.contains(parent), "parent {parent:?} is not in this tree");
        assert!(
            !self.nodes[parent.idx()].sealed,
            "`{}` is part of a confirmation prompt and takes no children",
            self.nodes[parent.idx()].label
        );
        let entry = entry.into();
        if self.nodes[parent.idx()].index.contains_key(&entry.label) {
            log::warn!(
                "duplicate label `{}` under `{}`; lookup now resolves to the newer sibling",
                entry.label,
                self.nodes[parent.idx()].label
            );
        }
        let id = self.alloc(entry);
        self.link(parent, id);
        id
    }

    /// Append a child, refusing a label already used by a sibling.
    ///
    /// Confirmation prompts and their rows refuse every child with
    /// [`TreeError::FixedRows`].
    pub fn try_append(
        &mut self,
        parent: NodeId,
        entry: impl Into<Entry>,
    ) -> Result<NodeId, TreeError> {
        let entry = entry.into();
        let p = self.node(parent)?;
        if p.sealed {
            return Err(TreeError::FixedRows {
                label: p.label.clone(),
            });
        }
        if p.index.contains_key(&entry.label) {
            return Err(TreeError::DuplicateLabel { label: entry.label });
        }
        let id = self.alloc(entry);
        self.link(parent, id);
        Ok(id)
    }

    /// Append one plain leaf per label, in order.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn append_leaves<I, S>(&mut self, parent: NodeId, labels: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels
            .into_iter()
            .map(|l| self.append(parent, Entry::plain(l)))
            .collect()
    }

    /// Find the child of `parent` labelled `label`.
    pub fn child(&self, parent: NodeId, label: &str) -> Result<NodeId, TreeError> {
        let p = self.node(parent)?;
        p.index
            .get(label)
            .map(|&pos| p.children[pos])
            .ok_or_else(|| TreeError::NotFound {
                label: label.into(),
            })
    }

    /// Follow `labels` down from the root.
    pub fn find<'a>(
        &self,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Result<NodeId, TreeError> {
        labels
            .into_iter()
            .try_fold(self.root(), |id, label| self.child(id, label))
    }

    /// Read-only view of a node.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.get(id.idx()).map(|node| NodeRef { id, node })
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.idx()).ok_or(TreeError::StaleId(id))
    }

    pub(crate) fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.idx()].label
    }

    pub(crate) fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.idx()].children.is_empty()
    }

    fn default_padding(&self, kind: &EntryKind) -> Size {
        match kind {
            EntryKind::Plain | EntryKind::Confirmation { .. } => Size::ZERO,
            EntryKind::Scrollable { .. } => Size::new(self.metrics.scrollbar_width, 0.0),
            EntryKind::QuantityGated { .. } => {
                let count = self.measure.measure_text(" 00");
                Size::new(self.metrics.scrollbar_width + count.width, 0.0)
            }
        }
    }

    // Create a detached node; confirmation prompts get their two rows here.
    fn alloc(&mut self, entry: Entry) -> NodeId {
        let padding = entry
            .padding
            .unwrap_or_else(|| self.default_padding(&entry.kind));
        let sealed = matches!(entry.kind, EntryKind::Confirmation { .. });
        let (variant, cursor, rows) = match entry.kind {
            EntryKind::Plain => (Variant::Plain, Cursor::default(), None),
            EntryKind::Scrollable { visible_lines } => (
                Variant::Scrollable(Viewport::new(visible_lines)),
                Cursor::default(),
                None,
            ),
            EntryKind::QuantityGated { visible_lines } => (
                Variant::QuantityGated(Viewport::new(visible_lines)),
                Cursor::default(),
                None,
            ),
            EntryKind::Confirmation { yes, no } => (
                Variant::Confirmation,
                Cursor::at(CONFIRM_NO_SLOT),
                Some([yes, no]),
            ),
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            label: entry.label,
            children: Vec::new(),
            index: BTreeMap::new(),
            cursor,
            frame: Rect::from_origin_size(entry.position, padding),
            padding,
            label_columns: 0,
            variant,
            sealed,
        });
        if let Some(rows) = rows {
            for row in rows {
                let child = self.alloc(Entry::plain(row));
                self.nodes[child.idx()].sealed = true;
                self.link(id, child);
            }
        }
        id
    }

    // Attach `child` under `parent` and grow the parent's frame.
    fn link(&mut self, parent: NodeId, child: NodeId) {
        let label = self.nodes[child.idx()].label.clone();
        let extent = self.measure.measure_text(&label);
        let columns = FixedMeasure::columns(&label);
        let margin = self.metrics.label_margin;
        let p = &mut self.nodes[parent.idx()];
        let size = Size::new(
            p.frame.width().max(extent.width + margin + p.padding.width),
            p.frame.height() + extent.height,
        );
        p.frame = Rect::from_origin_size(p.frame.origin(), size);
        p.label_columns = p.label_columns.max(columns);
        p.index.insert(label, p.children.len());
        p.children.push(child);
    }
}

/// Read-only view of one node, from [`MenuTree::get`].
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    /// The node's handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display name.
    pub fn label(&self) -> &'a str {
        &self.node.label
    }

    /// Behavior tag.
    pub fn kind(&self) -> NodeKind {
        self.node.variant.kind()
    }

    /// Children in display order.
    pub fn children(&self) -> &'a [NodeId] {
        &self.node.children
    }

    /// A node without children is a leaf: confirming it resolves a path.
    pub fn is_leaf(&self) -> bool {
        self.node.children.is_empty()
    }

    /// Cursor position among the children.
    pub fn selection(&self) -> usize {
        self.node.cursor.selection
    }

    /// Child under the cursor, if the node has children.
    pub fn selected_child(&self) -> Option<NodeId> {
        self.node.children.get(self.node.cursor.selection).copied()
    }

    /// First visible row, for scrolling kinds.
    pub fn scroll_offset(&self) -> Option<usize> {
        self.node.variant.viewport().map(|v| v.offset)
    }

    /// Rows visible at once, for scrolling kinds.
    pub fn visible_lines(&self) -> Option<usize> {
        self.node.variant.viewport().map(|v| v.lines)
    }

    /// Panel box relative to the column origin it is drawn at.
    pub fn frame(&self) -> Rect {
        self.node.frame
    }
}
