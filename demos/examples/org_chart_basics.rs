// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate a small organization, lay it out, expand and collapse a department.
//!
//! Run:
//! - `cargo run -p orgtree_demos --example org_chart_basics`
//! - `RUST_LOG=orgtree_render=trace cargo run -p orgtree_demos --example org_chart_basics`

use kurbo::Size;
use orgtree_gen::{Preset, count_nodes, generate_preset};
use orgtree_render::{RendererOptions, TreeRenderer};
use orgtree_scene::Canvas;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut rng = SmallRng::seed_from_u64(2025);
    let tree = generate_preset(Preset::Small, &mut rng);
    println!(
        "generated {} nodes, depth {}",
        count_nodes(Some(&tree)),
        tree.max_depth()
    );

    let mut canvas = Canvas::new(Size::new(1280.0, 720.0));
    let mut renderer = TreeRenderer::new(&mut canvas, RendererOptions::default());
    renderer.set_tree_data(tree);
    renderer.render_tree(&mut canvas);
    info!(
        boxes = renderer.view_count(),
        edges = renderer.edge_count(),
        "first render"
    );

    print_level(&renderer, 0);
    print_level(&renderer, 1);

    // Collapse the first department, then open it again.
    let first = renderer
        .tree()
        .and_then(|t| t.children.first())
        .map(|n| n.id.clone());
    if let Some(id) = first {
        renderer.toggle_node_expanded(&mut canvas, &id, Some(false));
        println!("after collapsing {id}: {} boxes", renderer.view_count());
        renderer.toggle_node_expanded(&mut canvas, &id, Some(true));
        println!("after expanding {id}: {} boxes", renderer.view_count());
    }
    for event in renderer.drain_events() {
        println!("event: {event:?}");
    }

    let visible = canvas.viewport.visible_bounds();
    let on_screen = renderer
        .views()
        .filter(|v| visible.contains(v.center()))
        .count();
    println!("{on_screen} boxes have their center on screen ({visible:?})");

    renderer.dispose(&mut canvas);
    println!(
        "disposed: scene nodes {}, tick callbacks {}",
        canvas.scene.len(),
        canvas.ticker.len()
    );
}

fn print_level(renderer: &TreeRenderer, level: u32) {
    let Some(tree) = renderer.tree() else {
        return;
    };
    let mut row: Vec<_> = tree
        .iter()
        .filter(|n| n.data.level == level)
        .filter_map(|n| renderer.view(&n.id))
        .collect();
    row.sort_by(|a, b| a.position().x.total_cmp(&b.position().x));
    println!("level {level}:");
    for view in row {
        println!(
            "  {:<12} at ({:>7.1}, {:>5.1})  {}",
            view.id(),
            view.position().x,
            view.position().y,
            view.data().name
        );
    }
}
