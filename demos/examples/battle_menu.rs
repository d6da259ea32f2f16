// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Battle menu.
//!
//! Build the classic Attack / Magic / Item menu in code and drive it with a
//! scripted sequence of key states, printing every resolved command.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p rpgmenu_demos --example battle_menu`

use kurbo::Point;
use rpgmenu_inventory::Inventory;
use rpgmenu_nav::{CommandWindow, KeyTracker, Outcome};
use rpgmenu_tree::{Entry, Signals};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut window = CommandWindow::new(Point::new(320.0, 0.0));
    let tree = window.tree_mut();
    let root = tree.root();
    tree.append(root, "Attack");
    let magic = tree.append(root, Entry::scrollable("Magic", 12));
    for i in 0..32 {
        tree.append(magic, format!("Magic{i:02}"));
    }
    let item = tree.append(root, Entry::quantity_gated("Item", 6));
    for i in 0..32 {
        tree.append(
            item,
            Entry::confirmation_with(format!("Item{i:02}"), "Use", "Cancel"),
        );
    }

    let mut inventory = Inventory::new();
    for i in 0..32 {
        inventory.set("Item", &format!("Item{i:02}"), i % 4);
    }

    // One entry per 16ms frame; `NONE` releases every key.
    const NONE: Signals = Signals::empty();
    let mut script = vec![Signals::CONFIRM, NONE];
    script.extend([Signals::FORWARD, NONE, Signals::CONFIRM, NONE]);
    // Hold down for half a second inside Magic.
    script.extend(std::iter::repeat_n(Signals::FORWARD, 32));
    script.extend([NONE, Signals::CONFIRM, NONE]);
    script.extend([Signals::FORWARD, NONE, Signals::CONFIRM, NONE]);
    script.extend([Signals::FORWARD, NONE, Signals::CONFIRM, NONE]);
    script.extend([Signals::BACK, NONE, Signals::CONFIRM, NONE]);
    script.extend([Signals::CANCEL, NONE]);

    let mut keys = KeyTracker::new();
    for (frame, &down) in script.iter().enumerate() {
        let input = keys.update(down, 16);
        match window.poll(&input, &inventory) {
            Outcome::Resolved(path) => {
                println!("frame {frame:3}: resolved {path}");
                if let Some(name) = path.strip_prefix("Item/").and_then(|p| p.strip_suffix("/Use")) {
                    inventory.decrement("Item", name, 1);
                    println!("            {name} left: {}", inventory.get("Item", name));
                }
            }
            Outcome::Cancelled => println!("frame {frame:3}: cancelled"),
            Outcome::Continue => {}
        }
        if input.pressed != NONE {
            if let Ok(preview) = window.current_path_preview() {
                println!("frame {frame:3}: {preview}");
            }
        }
    }
}
