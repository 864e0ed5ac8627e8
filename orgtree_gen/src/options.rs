// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// Failure to load [`GeneratorOptions`].
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The TOML source did not parse into options.
    #[error("invalid generator options: {0}")]
    Parse(#[from] toml::de::Error),
    /// `min_children_per_node` exceeds `max_children_per_node`.
    #[error("child count range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },
}

/// Shape of a generated tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Display name of the root.
    pub root_name: String,
    /// Depth of the leaves; nodes at this depth are employees.
    pub max_depth: u32,
    /// Upper bound on the children of a department.
    pub max_children_per_node: usize,
    /// Lower bound on the children of a department; half of the maximum
    /// (at least 1) when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_children_per_node: Option<usize>,
    /// Nodes at this depth or shallower start expanded.
    pub initial_expanded_depth: u32,
    /// Start with every node expanded.
    pub expand_all: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            root_name: String::from("Organization"),
            max_depth: 4,
            max_children_per_node: 5,
            min_children_per_node: None,
            initial_expanded_depth: 1,
            expand_all: false,
        }
    }
}

impl GeneratorOptions {
    /// Options with the given fan-out and the derived minimum.
    pub fn with_max_children(max: usize) -> Self {
        Self {
            max_children_per_node: max,
            ..Self::default()
        }
    }

    /// The lower bound on children, falling back to half of the maximum, at least 1.
    pub fn min_children(&self) -> usize {
        self.min_children_per_node
            .unwrap_or_else(|| (self.max_children_per_node / 2).max(1))
    }

    /// Parse options from TOML and validate them.
    pub fn from_toml_str(src: &str) -> Result<Self, GeneratorError> {
        let opts: Self = toml::from_str(src)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check that the child count range is not inverted.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let min = self.min_children();
        if min > self.max_children_per_node {
            return Err(GeneratorError::InvertedRange {
                min,
                max: self.max_children_per_node,
            });
        }
        Ok(())
    }

    /// Inclusive child count range. An inverted range collapses to `max`.
    pub(crate) fn fan_out(&self) -> (usize, usize) {
        let max = self.max_children_per_node;
        (self.min_children().min(max), max)
    }
}

/// Named tree sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Depth 3, 2 to 4 children, expanded two levels deep. Tens of nodes.
    Small,
    /// Depth 4, 3 to 8 children. Hundreds to low thousands of nodes.
    Medium,
    /// Depth 5, 5 to 10 children. Tens of thousands of nodes.
    Large,
    /// Depth 6, 8 to 12 children. Hundreds of thousands of nodes or more.
    Huge,
}

impl Preset {
    /// The generator options this preset stands for.
    pub fn options(self) -> GeneratorOptions {
        let (root_name, max_depth, min, max, initial_expanded_depth) = match self {
            Self::Small => ("Small organization", 3, 2, 4, 2),
            Self::Medium => ("Medium organization", 4, 3, 8, 1),
            Self::Large => ("Large organization", 5, 5, 10, 1),
            Self::Huge => ("Huge organization", 6, 8, 12, 1),
        };
        GeneratorOptions {
            root_name: root_name.into(),
            max_depth,
            max_children_per_node: max,
            min_children_per_node: Some(min),
            initial_expanded_depth,
            expand_all: false,
        }
    }
}
