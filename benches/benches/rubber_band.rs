// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use orgtree_model::TreeNode;
use orgtree_render::{RendererOptions, SelectionController, TreeRenderer};
use orgtree_scene::Canvas;

/// A root with `n` leaf children laid out in one row.
fn wide_row(n: usize) -> TreeNode {
    TreeNode::new("root", "Root").with_expanded(true).with_children(
        (1..=n).map(|i| TreeNode::new(format!("root-{i}"), format!("Leaf {i}")).with_level(1)),
    )
}

fn bench_select_in_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("rubber_band");
    for n in [100_usize, 1_000, 10_000] {
        let mut canvas = Canvas::new(Size::new(1920.0, 1080.0));
        let mut renderer = TreeRenderer::new(&mut canvas, RendererOptions::default());
        let mut controller = SelectionController::new(&mut canvas);
        renderer.set_tree_data(wide_row(n));
        renderer.render_tree(&mut canvas);

        // Left half of the row.
        let half = Rect::new(-1.0e9, 0.0, 100.0, 200.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("replace_n{n}"), |b| {
            b.iter(|| {
                let matched = controller.select_nodes_in_bounds(
                    &mut renderer,
                    &mut canvas.scene,
                    black_box(half),
                    false,
                );
                let _ = controller.drain_events(&mut renderer);
                black_box(matched)
            });
        });
        group.bench_function(format!("additive_n{n}"), |b| {
            b.iter(|| {
                let matched = controller.select_nodes_in_bounds(
                    &mut renderer,
                    &mut canvas.scene,
                    black_box(half),
                    true,
                );
                let _ = controller.drain_events(&mut renderer);
                black_box(matched)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select_in_bounds);
criterion_main!(benches);
