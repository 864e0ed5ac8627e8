// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use orgtree_gen::{Preset, generate_preset, generate_tree_with_node_count};
use orgtree_model::TreeNode;
use orgtree_render::{RendererOptions, TreeRenderer};
use orgtree_scene::Canvas;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn expanded(mut tree: TreeNode) -> TreeNode {
    tree.for_each_mut(|n| n.expanded = true);
    tree
}

fn setup(tree: &TreeNode) -> (Canvas, TreeRenderer) {
    let mut canvas = Canvas::new(Size::new(1920.0, 1080.0));
    let mut renderer = TreeRenderer::new(&mut canvas, RendererOptions::default());
    renderer.set_tree_data(tree.clone());
    (canvas, renderer)
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tree");
    for target in [1_000_usize, 10_000, 50_000] {
        let tree = expanded(generate_tree_with_node_count(
            target,
            &mut SmallRng::seed_from_u64(17),
        ));
        group.throughput(Throughput::Elements(tree.count() as u64));
        group.bench_function(format!("first_render_n{target}"), |b| {
            b.iter_batched(
                || setup(&tree),
                |(mut canvas, mut renderer)| {
                    renderer.render_tree(&mut canvas);
                    black_box(renderer.view_count());
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_function(format!("rerender_n{target}"), |b| {
            let (mut canvas, mut renderer) = setup(&tree);
            renderer.render_tree(&mut canvas);
            b.iter(|| {
                renderer.render_tree(&mut canvas);
                black_box(renderer.edge_count());
            });
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");
    let tree = generate_preset(Preset::Medium, &mut SmallRng::seed_from_u64(3));
    let first_child = tree.children.first().map(|n| n.id.clone()).unwrap_or_default();

    group.bench_function("expand_collapse_medium", |b| {
        let (mut canvas, mut renderer) = setup(&tree);
        renderer.render_tree(&mut canvas);
        b.iter(|| {
            renderer.toggle_node_expanded(&mut canvas, black_box(&first_child), None);
            let _ = renderer.drain_events();
        });
    });

    group.bench_function("select_toggle_medium", |b| {
        let (mut canvas, mut renderer) = setup(&tree);
        renderer.render_tree(&mut canvas);
        b.iter(|| {
            renderer.toggle_node_selection(&mut canvas.scene, black_box(&first_child), None);
            let _ = renderer.drain_events();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_full_render, bench_toggle);
criterion_main!(benches);
