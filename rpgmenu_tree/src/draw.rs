// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing each node kind through a [`Painter`].

use alloc::format;
use alloc::string::String;
use kurbo::{Point, Rect, Size, Vec2};
use rpgmenu_inventory::Inventory;

use crate::cursor::Viewport;
use crate::paint::{FixedMeasure, Painter};
use crate::tree::{MenuTree, Node, Variant};
use crate::types::{NodeId, Style};

impl MenuTree {
    /// Draw node `id` with its column placed at `origin`.
    ///
    /// Quantity-gated nodes print each row's count from `inventory`, read under
    /// `(node label, row label)`; unknown keys print as `00`.
    /// Handles not issued by this tree draw nothing.
    pub fn draw<P: Painter + ?Sized>(
        &self,
        id: NodeId,
        origin: Point,
        style: &Style,
        inventory: &Inventory,
        painter: &mut P,
    ) {
        let Some(node) = self.nodes.get(id.idx()) else {
            return;
        };
        let base = origin + node.frame.origin().to_vec2();
        match &node.variant {
            Variant::Plain | Variant::Confirmation => self.draw_list(node, base, style, painter),
            Variant::Scrollable(view) => {
                self.draw_window(node, view, base, style, painter, |tree, child| {
                    String::from(tree.label(child))
                });
            }
            Variant::QuantityGated(view) => {
                let width = node.label_columns;
                self.draw_window(node, view, base, style, painter, |tree, child| {
                    let label = tree.label(child);
                    let pad = width.saturating_sub(FixedMeasure::columns(label));
                    let count = inventory.get(&node.label, label);
                    format!("{label}{:pad$} {count:02}", "")
                });
            }
        }
    }

    fn draw_list<P: Painter + ?Sized>(
        &self,
        node: &Node,
        base: Point,
        style: &Style,
        painter: &mut P,
    ) {
        let m = &self.metrics;
        let panel = Rect::from_origin_size(base, node.frame.size());
        panel_box(painter, panel, style);
        for (row, &child) in node.children.iter().enumerate() {
            painter.draw_text(self.label(child), base + row_offset(m.text_inset, m.line_pitch, row));
        }
        if !node.children.is_empty() {
            let bar = Rect::from_origin_size(
                base + Vec2::new(m.text_inset, m.highlight_offset + m.line_pitch * node.cursor.selection as f64),
                Size::new(node.frame.width() - m.label_margin, m.highlight_height),
            );
            painter.fill_rect(bar, style.highlight);
        }
    }

    fn draw_window<P: Painter + ?Sized>(
        &self,
        node: &Node,
        view: &Viewport,
        base: Point,
        style: &Style,
        painter: &mut P,
        row_text: impl Fn(&Self, NodeId) -> String,
    ) {
        let m = &self.metrics;
        let height = m.line_pitch * view.lines as f64;
        let list = Rect::from_origin_size(base, Size::new(node.frame.width() - m.scrollbar_width, height));
        panel_box(painter, list, style);

        let visible = view.visible(node.children.len());
        for (row, &child) in node.children[visible].iter().enumerate() {
            painter.draw_text(&row_text(self, child), base + row_offset(m.text_inset, m.line_pitch, row));
        }

        if !node.children.is_empty() {
            let row = node.cursor.selection.saturating_sub(view.offset) as f64;
            let bar = Rect::from_origin_size(
                base + Vec2::new(m.text_inset, m.highlight_offset + m.line_pitch * row),
                Size::new(
                    node.frame.width() - m.label_margin - m.scrollbar_width,
                    m.highlight_height,
                ),
            );
            painter.fill_rect(bar, style.highlight);
        }

        self.draw_scrollbar(node, view, base, height, style, painter);
    }

    fn draw_scrollbar<P: Painter + ?Sized>(
        &self,
        node: &Node,
        view: &Viewport,
        base: Point,
        height: f64,
        style: &Style,
        painter: &mut P,
    ) {
        let m = &self.metrics;
        let fs = m.font_size;
        let x = base.x + node.frame.width() - m.scrollbar_width;
        let up = Rect::from_origin_size((x, base.y), (fs, fs));
        let down = Rect::from_origin_size((x, base.y + height - fs), (fs, fs));
        let track = Rect::from_origin_size((x, base.y + fs), (fs, height - 2.0 * fs));
        for r in [up, down, track] {
            panel_box(painter, r, style);
        }

        // Arrow glyphs sit inside the stroke.
        let inset = style.border_width + 1.0;
        painter.fill_triangle(
            [
                Point::new(up.x0 + fs / 2.0, up.y0 + inset),
                Point::new(up.x0 + inset, up.y0 + fs - inset),
                Point::new(up.x0 + fs - inset, up.y0 + fs - inset),
            ],
            style.thumb,
        );
        painter.fill_triangle(
            [
                Point::new(down.x0 + fs / 2.0, down.y0 + fs - inset),
                Point::new(down.x0 + inset, down.y0 + inset),
                Point::new(down.x0 + fs - inset, down.y0 + inset),
            ],
            style.thumb,
        );

        let count = node.children.len();
        if count == 0 {
            return;
        }
        let count = count as f64;
        // Capped at the track height, never floored.
        let thumb_height = (track.height() * view.lines as f64 / count).min(track.height());
        let thumb_y = track.y0 + track.height() * view.offset as f64 / count;
        painter.fill_rect(
            Rect::from_origin_size((track.x0, thumb_y), (track.width(), thumb_height)),
            style.thumb,
        );
    }
}

fn row_offset(inset: f64, pitch: f64, row: usize) -> Vec2 {
    Vec2::new(inset, pitch * row as f64)
}

fn panel_box<P: Painter + ?Sized>(painter: &mut P, rect: Rect, style: &Style) {
    painter.fill_rect(rect, style.fill);
    painter.stroke_rect(rect, style.border_width, style.border);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use kurbo::{Point, Rect};
    use rpgmenu_inventory::Inventory;

    use crate::paint::{DrawCall, Recorder};
    use crate::types::{Color, Entry, InputFrame, Signals, Style};
    use crate::MenuTree;

    fn draw(tree: &MenuTree, id: crate::NodeId, inv: &Inventory) -> Recorder {
        let mut rec = Recorder::new();
        tree.draw(id, Point::new(100.0, 10.0), &Style::default(), inv, &mut rec);
        rec
    }

    #[test]
    fn plain_draws_panel_rows_then_highlight() {
        let mut tree = MenuTree::new("base");
        let root = tree.root();
        tree.append_leaves(root, ["Attack", "Defend"]);
        let rec = draw(&tree, root, &Inventory::new());

        // Width: "Attack"/"Defend" are 6 columns * 6px + 8px margin.
        let panel = Rect::new(100.0, 10.0, 144.0, 42.0);
        assert_eq!(
            rec.calls,
            [
                DrawCall::FillRect {
                    rect: panel,
                    color: Color::BLACK
                },
                DrawCall::StrokeRect {
                    rect: panel,
                    width: 1.0,
                    color: Color::WHITE
                },
                DrawCall::Text {
                    text: "Attack".into(),
                    origin: Point::new(104.0, 10.0)
                },
                DrawCall::Text {
                    text: "Defend".into(),
                    origin: Point::new(104.0, 34.0)
                },
                DrawCall::FillRect {
                    rect: Rect::new(104.0, 12.0, 140.0, 32.0),
                    color: Color::HIGHLIGHT
                },
            ]
        );
    }

    #[test]
    fn confirmation_highlights_no_by_default() {
        let mut tree = MenuTree::new("base");
        let potion = tree.append(tree.root(), Entry::confirmation("Potion"));
        let rec = draw(&tree, potion, &Inventory::new());
        let bars: Vec<_> = rec.fills_with(Color::HIGHLIGHT).collect();
        assert_eq!(bars.len(), 1);
        // Second row: y = 10 + 2 + 24.
        assert_eq!(bars[0].y0, 36.0);
        assert_eq!(rec.texts().collect::<Vec<_>>(), ["Yes", "No"]);
    }

    #[test]
    fn scrollable_draws_only_visible_rows_and_thumb() {
        let mut tree = MenuTree::new("base");
        let magic = tree.append(tree.root(), Entry::scrollable("Magic", 4));
        for i in 0..8 {
            tree.append(magic, alloc::format!("M{i}"));
        }
        let inv = Inventory::new();
        let mut stack = alloc::vec![tree.root(), magic];
        for _ in 0..5 {
            tree.step(&mut stack, &InputFrame::press(Signals::FORWARD), &inv);
        }
        // selection 5, offset 2.
        let rec = draw(&tree, magic, &inv);
        assert_eq!(rec.texts().collect::<Vec<_>>(), ["M2", "M3", "M4", "M5"]);

        let frame = tree.get(magic).unwrap().frame();
        let highlight: Vec<_> = rec.fills_with(Color::HIGHLIGHT).collect();
        assert_eq!(
            highlight,
            [Rect::from_origin_size(
                (104.0, 10.0 + 2.0 + 24.0 * 3.0),
                (frame.width() - 8.0 - 12.0, 20.0)
            )]
        );

        // Track spans 4 rows (96px) minus two 12px arrow boxes.
        let thumbs: Vec<_> = rec.fills_with(Color::WHITE).collect();
        let thumb = thumbs.last().copied().unwrap();
        let track_h = 96.0 - 24.0;
        assert_eq!(thumb.height(), track_h * 4.0 / 8.0);
        assert_eq!(thumb.y0, 10.0 + 12.0 + track_h * 2.0 / 8.0);

        let order: Vec<_> = rec
            .calls
            .iter()
            .map(|c| match c {
                DrawCall::FillRect { .. } => 'f',
                DrawCall::StrokeRect { .. } => 's',
                DrawCall::Triangle { .. } => 't',
                DrawCall::Text { .. } => 'x',
            })
            .collect();
        let order: alloc::string::String = order.into_iter().collect();
        assert_eq!(order, "fsxxxxffsfsfsttf");
    }

    #[test]
    fn thumb_is_capped_at_track_height() {
        let mut tree = MenuTree::new("base");
        let magic = tree.append(tree.root(), Entry::scrollable("Magic", 6));
        tree.append_leaves(magic, ["Fire", "Ice"]);
        let rec = draw(&tree, magic, &Inventory::new());
        let thumb = rec.fills_with(Color::WHITE).last().unwrap();
        let track_h = 24.0 * 6.0 - 24.0;
        assert_eq!(thumb.height(), track_h);
    }

    #[test]
    fn empty_scrollable_has_no_thumb_or_highlight() {
        let mut tree = MenuTree::new("base");
        let magic = tree.append(tree.root(), Entry::scrollable("Magic", 3));
        let rec = draw(&tree, magic, &Inventory::new());
        assert_eq!(rec.fills_with(Color::HIGHLIGHT).count(), 0);
        // Panel + up + down + track fills only.
        assert_eq!(rec.fills_with(Color::BLACK).count(), 4);
        assert_eq!(rec.fills_with(Color::WHITE).count(), 0);
    }

    #[test]
    fn gated_rows_show_padded_counts() {
        let mut tree = MenuTree::new("base");
        let item = tree.append(tree.root(), Entry::quantity_gated("Item", 6));
        tree.append(item, Entry::confirmation("Potion"));
        tree.append(item, Entry::confirmation("Ether"));
        tree.append(item, Entry::confirmation("Elixir"));
        let mut inv = Inventory::new();
        inv.set("Item", "Potion", 3);
        inv.set("Item", "Ether", 12);

        let rec = draw(&tree, item, &inv);
        assert_eq!(
            rec.texts().collect::<Vec<_>>(),
            ["Potion 03", "Ether  12", "Elixir 00"]
        );
    }

    #[test]
    fn gated_width_reserves_count_column() {
        let mut tree = MenuTree::new("base");
        let item = tree.append(tree.root(), Entry::quantity_gated("Item", 6));
        tree.append(item, "Potion");
        // 36 text + 8 margin + 12 scrollbar + 18 for " 00".
        assert_eq!(tree.get(item).unwrap().frame().width(), 74.0);
    }
}
