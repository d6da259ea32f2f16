// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render trace.
//!
//! Open the Item list and print the draw calls a frame produces, using a
//! custom `Painter` that writes one line per primitive.
//!
//! Run:
//! - `cargo run -p rpgmenu_demos --example render_trace`

use kurbo::{Point, Rect};
use rpgmenu_inventory::Inventory;
use rpgmenu_nav::CommandWindow;
use rpgmenu_tree::{Color, Entry, InputFrame, Painter, Signals, Style};

/// Prints every primitive instead of rasterizing it.
struct TracePainter;

impl Painter for TracePainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        println!("fill     {rect:?} #{:02x}{:02x}{:02x}{:02x}", color.r, color.g, color.b, color.a);
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, _color: Color) {
        println!("stroke   {rect:?} w={width}");
    }

    fn fill_triangle(&mut self, points: [Point; 3], _color: Color) {
        println!("triangle {points:?}");
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        println!("text     {origin:?} {text:?}");
    }
}

fn main() {
    let mut window = CommandWindow::new(Point::new(320.0, 0.0));
    let tree = window.tree_mut();
    let root = tree.root();
    tree.append(root, "Attack");
    let item = tree.append(root, Entry::quantity_gated("Item", 3));
    for name in ["Potion", "Hi-Potion", "Ether", "Elixir"] {
        tree.append(item, Entry::confirmation(name));
    }

    let mut inventory = Inventory::new();
    inventory.set("Item", "Potion", 7);
    inventory.set("Item", "Hi-Potion", 12);

    for signal in [Signals::FORWARD, Signals::CONFIRM, Signals::FORWARD] {
        let _ = window.poll(&InputFrame::press(signal), &inventory);
    }
    let width = window.render(&Style::default(), &inventory, &mut TracePainter);
    println!("columns span {width}px");
}
