// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inventory gate.
//!
//! Quantity-gated lists refuse to open items whose count is zero. This demo
//! uses a potion until the stock runs out and shows the gate closing.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p rpgmenu_demos --example inventory_gate`

use kurbo::Point;
use rpgmenu_inventory::Inventory;
use rpgmenu_nav::{CommandWindow, Outcome};
use rpgmenu_tree::{Entry, InputFrame, Signals};

const OK: InputFrame = InputFrame::press(Signals::CONFIRM);
const UP: InputFrame = InputFrame::press(Signals::BACK);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut window = CommandWindow::new(Point::ORIGIN);
    let tree = window.tree_mut();
    let item = tree.append(tree.root(), Entry::quantity_gated("Item", 4));
    tree.append(item, Entry::confirmation_with("Potion", "Use", "Cancel"));

    let mut inventory = Inventory::new();
    inventory.set("Item", "Potion", 2);

    for turn in 1..=4 {
        // Open Item, open Potion, move to "Use", accept.
        let outcomes = [OK, OK, UP, OK].map(|f| window.poll(&f, &inventory));
        let resolved = outcomes.iter().find_map(Outcome::path);
        match resolved {
            Some(path) => {
                inventory.decrement("Item", "Potion", 1);
                println!(
                    "turn {turn}: {path}, {} left",
                    inventory.get("Item", "Potion")
                );
            }
            None => {
                println!("turn {turn}: no potions, menu stays at depth {}", window.depth());
                window.reset();
            }
        }
    }

    inventory.reset_category("Item");
    println!("after reset: {:?}", inventory.items("Item").collect::<Vec<_>>());
}
