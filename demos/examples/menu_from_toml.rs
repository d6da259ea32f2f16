// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu from TOML.
//!
//! Load a whole command window (commands, layout, repeat cadence, starting
//! inventory) from a TOML document and walk a few commands.
//!
//! Run:
//! - `cargo run -p rpgmenu_demos --example menu_from_toml`
//! - `cargo run -p rpgmenu_demos --example menu_from_toml -- path/to/menu.toml`

use std::error::Error;

use rpgmenu_nav::{MenuDocument, Outcome};
use rpgmenu_tree::{InputFrame, Signals};

const BATTLE: &str = include_str!("../menus/battle.toml");

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => BATTLE.to_owned(),
    };
    let doc: MenuDocument = toml::from_str(&text)?;
    let mut window = doc.build()?;
    let inventory = doc.inventory.clone();
    log::info!("loaded `{}` ({} nodes)", doc.root, window.tree().len());

    let press = InputFrame::press;
    let script = [
        // Magic, third spell.
        press(Signals::FORWARD),
        press(Signals::CONFIRM),
        press(Signals::FORWARD),
        press(Signals::FORWARD),
        press(Signals::CONFIRM),
        // Run, then decline.
        press(Signals::FORWARD),
        press(Signals::FORWARD),
        press(Signals::CONFIRM),
        press(Signals::CONFIRM),
        // Run, accept.
        press(Signals::CONFIRM),
        press(Signals::BACK),
        press(Signals::CONFIRM),
    ];
    for input in &script {
        match window.poll(input, &inventory) {
            Outcome::Resolved(path) => println!("resolved {path}"),
            Outcome::Cancelled => println!("cancelled"),
            Outcome::Continue => println!("  {}", window.current_path_preview()?),
        }
    }
    Ok(())
}
