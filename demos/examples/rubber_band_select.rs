// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive the selection controller with a pointer script.
//!
//! A Ctrl-drag over the left half of a row replaces the selection; a second
//! drag with Shift held at release adds to it; a plain click on a checkbox
//! toggles one node.
//!
//! Run:
//! - `cargo run -p orgtree_demos --example rubber_band_select`

use kurbo::{Point, Size};
use orgtree_model::TreeNode;
use orgtree_render::{RendererOptions, SelectionController, TreeEvent, TreeRenderer};
use orgtree_scene::{Canvas, Modifiers, PointerEvent, PointerKind};
use tracing_subscriber::EnvFilter;

fn row(n: usize) -> TreeNode {
    TreeNode::new("root", "Board").with_expanded(true).with_children(
        (1..=n).map(|i| TreeNode::new(format!("root-{i}"), format!("Team {i}")).with_level(1)),
    )
}

fn at(canvas: &Canvas, x: f64, y: f64) -> Point {
    canvas.viewport.to_screen(Point::new(x, y))
}

fn drag(
    controller: &mut SelectionController,
    renderer: &mut TreeRenderer,
    canvas: &mut Canvas,
    from: Point,
    to: Point,
    release: Modifiers,
) {
    let script = [
        PointerEvent::new(PointerKind::Down, at(canvas, from.x, from.y))
            .with_modifiers(Modifiers::CTRL),
        PointerEvent::new(PointerKind::Move, at(canvas, to.x, to.y)).with_modifiers(Modifiers::CTRL),
        PointerEvent::new(PointerKind::Up, at(canvas, to.x, to.y))
            .with_modifiers(Modifiers::CTRL | release),
    ];
    for event in &script {
        controller.handle_pointer(renderer, canvas, event);
    }
}

fn report(controller: &mut SelectionController, renderer: &mut TreeRenderer) {
    for event in controller.drain_events(renderer) {
        match event {
            TreeEvent::SelectionChange(ids) => println!("  selection: {ids:?}"),
            other => println!("  {other:?}"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut canvas = Canvas::new(Size::new(1600.0, 600.0));
    let mut renderer = TreeRenderer::new(&mut canvas, RendererOptions::default());
    let mut controller = SelectionController::new(&mut canvas);
    renderer.set_tree_data(row(6));
    renderer.render_tree(&mut canvas);

    let left = renderer.views().map(|v| v.bounds().x0).fold(f64::INFINITY, f64::min);
    let y = renderer.options().level_height;

    println!("ctrl-drag over the left half:");
    drag(
        &mut controller,
        &mut renderer,
        &mut canvas,
        Point::new(left - 10.0, y - 10.0),
        Point::new(100.0, y + 40.0),
        Modifiers::empty(),
    );
    report(&mut controller, &mut renderer);

    println!("shift-release drag over the right end:");
    drag(
        &mut controller,
        &mut renderer,
        &mut canvas,
        Point::new(500.0, y - 10.0),
        Point::new(2000.0, y + 40.0),
        Modifiers::SHIFT,
    );
    report(&mut controller, &mut renderer);

    println!("click the root checkbox:");
    let click = PointerEvent::new(PointerKind::Click, at(&canvas, 15.0, 15.0));
    controller.handle_pointer(&mut renderer, &mut canvas, &click);
    report(&mut controller, &mut renderer);

    println!("{} selected", controller.selected_count(&renderer));
    controller.destroy(&mut canvas);
    renderer.dispose(&mut canvas);
}
