// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry storage and lookups.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Failure from a strict registry lookup.
///
/// Returned by [`Inventory::try_get`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// No item was ever registered under this category.
    #[error("unknown inventory category `{category}`")]
    UnknownCategory {
        /// The category that was looked up.
        category: String,
    },
    /// The category exists but holds no entry for this item.
    #[error("unknown item `{item}` in inventory category `{category}`")]
    UnknownItem {
        /// The category that was looked up.
        category: String,
        /// The item that was looked up.
        item: String,
    },
}

/// Per-category item counts.
///
/// Counts are signed: decrementing below zero is allowed and simply keeps any
/// gate that depends on the item closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Inventory {
    categories: BTreeMap<String, BTreeMap<String, i32>>,
}

impl Inventory {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Register `item` under `category` with an exact count, replacing any previous value.
    pub fn set(&mut self, category: &str, item: &str, count: i32) {
        *self.slot(category, item) = count;
    }

    /// Count for `item` under `category`; unregistered keys read as `0`.
    pub fn get(&self, category: &str, item: &str) -> i32 {
        self.try_get(category, item).unwrap_or(0)
    }

    /// Count for `item` under `category`, reporting which key is unknown.
    pub fn try_get(&self, category: &str, item: &str) -> Result<i32, InventoryError> {
        let items = self
            .categories
            .get(category)
            .ok_or_else(|| InventoryError::UnknownCategory {
                category: category.into(),
            })?;
        items
            .get(item)
            .copied()
            .ok_or_else(|| InventoryError::UnknownItem {
                category: category.into(),
                item: item.into(),
            })
    }

    /// Add `delta` to the count, registering the item at `0` first if needed.
    pub fn increment(&mut self, category: &str, item: &str, delta: i32) {
        let count = self.slot(category, item);
        *count = count.saturating_add(delta);
    }

    /// Subtract `delta` from the count, registering the item at `0` first if needed.
    pub fn decrement(&mut self, category: &str, item: &str, delta: i32) {
        let count = self.slot(category, item);
        *count = count.saturating_sub(delta);
    }

    /// Forget every category and item.
    pub fn reset_all(&mut self) {
        self.categories.clear();
    }

    /// Forget every item in `category`.
    ///
    /// The category itself stays registered (empty), so strict lookups afterwards
    /// report [`InventoryError::UnknownItem`] rather than an unknown category.
    pub fn reset_category(&mut self, category: &str) {
        self.categories.entry(category.into()).or_default().clear();
        log::debug!("inventory category `{category}` cleared");
    }

    /// Whether `category` has been registered.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Iterate the registered categories in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// Iterate `(item, count)` pairs of a category in sorted order.
    ///
    /// Yields nothing for an unregistered category.
    pub fn items<'a>(&'a self, category: &str) -> impl Iterator<Item = (&'a str, i32)> + use<'a> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|items| items.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    /// True when no category is registered.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn slot(&mut self, category: &str, item: &str) -> &mut i32 {
        self.categories
            .entry(category.into())
            .or_default()
            .entry(item.into())
            .or_insert(0)
    }
}
