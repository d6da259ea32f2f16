// Copyright 2025 the Rpgmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use rpgmenu_inventory::Inventory;
use rpgmenu_nav::CommandWindow;
use rpgmenu_tree::{Entry, InputFrame, Recorder, Signals, Style};

/// Root with a scrolling spell list of `spells` rows and a gated item list of `items` rows.
fn battle(spells: usize, items: usize) -> (CommandWindow, Inventory) {
    let mut w = CommandWindow::new(Point::new(320.0, 0.0));
    let tree = w.tree_mut();
    let root = tree.root();
    tree.append(root, "Attack");
    let magic = tree.append(root, Entry::scrollable("Magic", 12));
    for i in 0..spells {
        tree.append(magic, format!("Magic{i:03}"));
    }
    let item = tree.append(root, Entry::quantity_gated("Item", 6));
    let mut inv = Inventory::new();
    for i in 0..items {
        let name = format!("Item{i:03}");
        tree.append(item, Entry::confirmation_with(name.clone(), "Use", "Cancel"));
        inv.set("Item", &name, (i % 3) as i32);
    }
    (w, inv)
}

/// Down once, into Magic, scroll `scroll` rows, accept.
fn magic_script(scroll: usize) -> Vec<InputFrame> {
    let mut out = vec![
        InputFrame::press(Signals::FORWARD),
        InputFrame::press(Signals::CONFIRM),
    ];
    out.extend(std::iter::repeat_n(InputFrame::press(Signals::FORWARD), scroll));
    out.push(InputFrame::press(Signals::CONFIRM));
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32_usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64 * 2));
        group.bench_function(format!("battle_n{n}"), |b| {
            b.iter(|| black_box(battle(n, n)));
        });
    }
    group.finish();
}

fn bench_poll(c: &mut Criterion) {
    let mut group = c.benchmark_group("poll");
    for &n in &[32_usize, 256, 1024] {
        let script = magic_script(n - 1);
        group.throughput(Throughput::Elements(script.len() as u64));
        group.bench_function(format!("scroll_resolve_n{n}"), |b| {
            b.iter_batched(
                || battle(n, 0),
                |(mut w, inv)| {
                    let mut resolved = 0;
                    for f in &script {
                        resolved += usize::from(w.poll(f, &inv).path().is_some());
                    }
                    black_box(resolved);
                },
                BatchSize::SmallInput,
            );
        });
    }
    let held = InputFrame::hold_forward(1_000);
    group.bench_function("hold_repeat_1000", |b| {
        b.iter_batched(
            || {
                let (mut w, inv) = battle(1024, 0);
                let _ = w.poll(&InputFrame::press(Signals::FORWARD), &inv);
                let _ = w.poll(&InputFrame::press(Signals::CONFIRM), &inv);
                (w, inv)
            },
            |(mut w, inv)| {
                for _ in 0..1000 {
                    let _ = w.poll(&held, &inv);
                }
                black_box(w.depth());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let style = Style::default();
    for &n in &[32_usize, 1024] {
        let (mut w, inv) = battle(n, n);
        for f in [Signals::FORWARD, Signals::FORWARD, Signals::CONFIRM] {
            let _ = w.poll(&InputFrame::press(f), &inv);
        }
        group.bench_function(format!("item_column_n{n}"), |b| {
            let mut rec = Recorder::new();
            b.iter(|| {
                rec.clear();
                black_box(w.render(&style, &inv, &mut rec));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_poll, bench_render);
criterion_main!(benches);
