// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgtree Gen: random organization trees for demos, tests, and benches.
//!
//! Trees have departments down to `max_depth - 1` and employees at
//! `max_depth`. Ids are `"root"` for the root and `"{parent}-{n}"` below it,
//! where `n` counts up from 1 across the whole tree, so ids are unique.
//! Every function takes the random source explicitly; seed it for
//! reproducible output.
//!
//! ```
//! use orgtree_gen::{GeneratorOptions, generate_tree_data};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let tree = generate_tree_data(&GeneratorOptions::default(), &mut rng);
//! assert_eq!(tree.id, "root");
//! assert_eq!(tree.max_depth(), 4);
//! assert!(tree.validate().is_ok());
//! ```

mod options;

use orgtree_model::{NodeKind, TreeNode};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

pub use options::{GeneratorError, GeneratorOptions, Preset};
pub use orgtree_model::count_nodes;

const ROOT_ID: &str = "root";

const DEPARTMENT_WORDS: &[&str] = &[
    "Engineering",
    "Research",
    "Marketing",
    "Sales",
    "People",
    "Finance",
    "Administration",
    "Operations",
    "Support",
    "Product",
    "Design",
    "Quality",
    "Testing",
    "Data",
    "Security",
    "Legal",
    "Strategy",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "John",
    "Katherine", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Tim", "Yukihiro",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Hopper", "Knuth", "Lamarr", "Liskov", "Lovelace", "Hamilton", "Perlman",
    "Ritchie", "Shannon", "Thompson", "Turing", "Wirth",
];

/// Generate a tree shaped by `options`.
pub fn generate_tree_data<R: Rng + ?Sized>(options: &GeneratorOptions, rng: &mut R) -> TreeNode {
    let mut builder = Builder {
        options,
        rng,
        counter: 1,
    };
    let tree = builder.node(ROOT_ID.to_owned(), options.root_name.clone(), 0);
    debug!(
        nodes = tree.count(),
        max_depth = options.max_depth,
        "generated tree"
    );
    tree
}

/// Generate a tree from a [`Preset`].
pub fn generate_preset<R: Rng + ?Sized>(preset: Preset, rng: &mut R) -> TreeNode {
    generate_tree_data(&preset.options(), rng)
}

/// Generate a tree of roughly `target` nodes.
///
/// Depth and fan-out are picked from the size of `target`. If the first tree
/// misses the target by more than 30%, the fan-out is nudged toward it and
/// one more tree is generated, which is returned as is.
pub fn generate_tree_with_node_count<R: Rng + ?Sized>(target: usize, rng: &mut R) -> TreeNode {
    let (max_depth, mut max, mut min) = match target {
        0..=500 => (3, 4, 2),
        501..=5_000 => (4, 8, 3),
        5_001..=50_000 => (5, 10, 5),
        _ => (6, 12, 8),
    };
    let mut options = GeneratorOptions {
        root_name: format!("About {target} nodes"),
        max_depth,
        max_children_per_node: max,
        min_children_per_node: Some(min),
        ..GeneratorOptions::default()
    };
    let tree = generate_tree_data(&options, rng);
    let count = tree.count();

    #[allow(
        clippy::cast_precision_loss,
        reason = "node counts are far below f64 precision limits"
    )]
    let far_off = count.abs_diff(target) as f64 > target as f64 * 0.3;
    if !far_off {
        return tree;
    }

    if count < target {
        max = (max + 2).min(15);
        min = (min + 1).min(max - 1);
    } else {
        max = max.saturating_sub(2).max(min + 1);
        min = min.saturating_sub(1).max(1);
    }
    debug!(target, count, min, max, "regenerating with adjusted fan-out");
    options.max_children_per_node = max;
    options.min_children_per_node = Some(min);
    generate_tree_data(&options, rng)
}

struct Builder<'a, R: ?Sized> {
    options: &'a GeneratorOptions,
    rng: &'a mut R,
    counter: usize,
}

impl<R: Rng + ?Sized> Builder<'_, R> {
    fn node(&mut self, id: String, name: String, depth: u32) -> TreeNode {
        let max_depth = self.options.max_depth;
        let kind = if depth == max_depth {
            NodeKind::Employee
        } else {
            NodeKind::Department
        };
        let expanded = self.options.expand_all || depth <= self.options.initial_expanded_depth;
        let node = TreeNode::new(id, name)
            .with_level(depth)
            .with_kind(kind)
            .with_expanded(expanded);
        if depth >= max_depth {
            return node;
        }

        let (lo, hi) = self.options.fan_out();
        let count = self.rng.random_range(lo..=hi);
        let mut children = Vec::with_capacity(count);
        for _ in 0..count {
            let child_id = format!("{}-{}", node.id, self.counter);
            self.counter += 1;
            let child_name = if depth + 1 == max_depth {
                self.employee_name()
            } else {
                self.department_name()
            };
            children.push(self.node(child_id, child_name, depth + 1));
        }
        node.with_children(children)
    }

    fn department_name(&mut self) -> String {
        let words = self.rng.random_range(1..=2);
        let mut name = format!("Dept {}", self.counter);
        for _ in 0..words {
            name.push(' ');
            name.push_str(DEPARTMENT_WORDS.choose(&mut *self.rng).copied().unwrap_or("General"));
        }
        name
    }

    fn employee_name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut *self.rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut *self.rng).copied().unwrap_or("Doe");
        format!("Employee {} {first} {last}", self.counter)
    }
}
