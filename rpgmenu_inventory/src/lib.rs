// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rpgmenu_inventory --heading-base-level=0

//! Rpgmenu Inventory: a two-level count registry for quantity-gated menus.
//!
//! ## Overview
//!
//! An [`Inventory`] maps a *category* to a set of *items*, each with a signed
//! count. Game logic owns the registry and mutates it between frames with
//! [`Inventory::set`], [`Inventory::increment`], [`Inventory::decrement`] and
//! the reset operations. Menu code only reads it.
//!
//! Reads come in two flavors:
//! - [`Inventory::get`] is lenient: an unregistered category or item reads as `0`.
//! - [`Inventory::try_get`] is strict and reports which key was missing.
//!
//! Menus should use `get` so that a typo in a menu label closes a gate instead of
//! aborting the frame.
//!
//! ## Example
//!
//! ```
//! use rpgmenu_inventory::{Inventory, InventoryError};
//!
//! let mut inv = Inventory::new();
//! inv.set("Item", "Potion", 2);
//! inv.decrement("Item", "Potion", 1);
//! assert_eq!(inv.get("Item", "Potion"), 1);
//!
//! // Lenient reads treat unknown keys as empty.
//! assert_eq!(inv.get("Item", "Elixir"), 0);
//! assert!(matches!(
//!     inv.try_get("Item", "Elixir"),
//!     Err(InventoryError::UnknownItem { .. })
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;

pub use registry::{Inventory, InventoryError};
