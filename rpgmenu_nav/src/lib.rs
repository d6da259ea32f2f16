// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rpgmenu_nav --heading-base-level=0

//! Rpgmenu Nav: the stack-based controller that drives an `rpgmenu_tree` command tree.
//!
//! ## Overview
//!
//! A [`CommandWindow`] owns a [`MenuTree`](rpgmenu_tree::MenuTree) and the stack of
//! open levels. Once per frame the host:
//!
//! 1) turns its key state into an [`InputFrame`](rpgmenu_tree::InputFrame), for
//!    example with a [`KeyTracker`];
//! 2) calls [`CommandWindow::poll`] and acts on the [`Outcome`];
//! 3) calls [`CommandWindow::render`] with its own [`Painter`](rpgmenu_tree::Painter).
//!
//! Resolved commands are `/`-joined label paths without the root, such as
//! `"Magic/Fire"` or `"Item/Potion/Use"`. After a command resolves, or the player
//! cancels out of the root level, the window is back at its root and ready for
//! the next turn.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use rpgmenu_inventory::Inventory;
//! use rpgmenu_nav::{CommandWindow, KeyTracker, Outcome};
//! use rpgmenu_tree::{Entry, Signals};
//!
//! let mut window = CommandWindow::new(Point::new(320.0, 0.0));
//! let tree = window.tree_mut();
//! let root = tree.root();
//! tree.append(root, "Attack");
//! let magic = tree.append(root, Entry::scrollable("Magic", 12));
//! tree.append_leaves(magic, ["Fire", "Ice"]);
//!
//! let inventory = Inventory::new();
//! let mut keys = KeyTracker::new();
//! let script = [
//!     Signals::FORWARD,
//!     Signals::empty(),
//!     Signals::CONFIRM,
//!     Signals::empty(),
//!     Signals::CONFIRM,
//! ];
//! let mut resolved = None;
//! for down in script {
//!     if let Outcome::Resolved(path) = window.poll(&keys.update(down, 16), &inventory) {
//!         resolved = Some(path);
//!     }
//! }
//! assert_eq!(resolved.as_deref(), Some("Magic/Fire"));
//! ```
//!
//! ## Features
//!
//! - `serde`: [`MenuDocument`] for describing whole windows in TOML, JSON, or
//!   any other serde format.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "serde")]
mod document;
mod keys;
mod window;

#[cfg(feature = "serde")]
pub use document::{DEFAULT_VISIBLE_LINES, EntryDocument, KindDocument, MenuDocument};
pub use keys::KeyTracker;
pub use window::{CommandWindow, NavError, NavState, Outcome};
