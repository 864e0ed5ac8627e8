// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-trip a generated tree through JSON and render what comes back.
//!
//! Selection made through the renderer shows up in the serialized `selected` flags.
//!
//! Run:
//! - `cargo run -p orgtree_demos --example tree_json`

use kurbo::Size;
use orgtree_gen::{GeneratorOptions, generate_tree_data};
use orgtree_model::TreeNode;
use orgtree_render::{RendererOptions, TreeRenderer};
use orgtree_scene::Canvas;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = GeneratorOptions::from_toml_str(
        r#"
        root_name = "Acme"
        max_depth = 2
        max_children_per_node = 3
        min_children_per_node = 2
        "#,
    )?;
    let tree = generate_tree_data(&options, &mut SmallRng::seed_from_u64(9));
    let json = serde_json::to_string_pretty(&tree)?;
    let back: TreeNode = serde_json::from_str(&json)?;
    back.validate()?;

    let renderer_options = RendererOptions::from_toml_str("node_width = 180.0\nnode_padding = 16.0")?;
    let mut canvas = Canvas::new(Size::new(1024.0, 768.0));
    let mut renderer = TreeRenderer::new(&mut canvas, renderer_options);
    renderer.set_tree_data(back);
    renderer.render_tree(&mut canvas);

    if let Some(id) = renderer.tree().and_then(|t| t.children.first()).map(|n| n.id.clone()) {
        renderer.toggle_node_selection(&mut canvas.scene, &id, Some(true));
    }
    if let Some(tree) = renderer.tree() {
        println!("{}", serde_json::to_string_pretty(tree)?);
    }
    renderer.dispose(&mut canvas);
    Ok(())
}
