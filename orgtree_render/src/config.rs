// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.

use kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Box geometry and feature switches for [`TreeRenderer`](crate::TreeRenderer).
///
/// Every field is optional when deserializing; missing fields take the
/// [`Default`] values.
///
/// ```
/// use orgtree_render::RendererOptions;
///
/// let opts = RendererOptions::from_toml_str("node_width = 160.0\nlevel_height = 80.0").unwrap();
/// assert_eq!(opts.node_width, 160.0);
/// assert_eq!(opts.node_height, 30.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    /// Width of every node box.
    pub node_width: f64,
    /// Height of every node box.
    pub node_height: f64,
    /// Vertical distance between the tops of a parent and its children.
    pub level_height: f64,
    /// Horizontal gap between sibling boxes.
    pub node_padding: f64,
    /// Reserved; accepted and carried but not acted on.
    pub use_instancing: bool,
    /// Reserved; accepted and carried but not acted on.
    pub use_quad_tree: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            node_width: 200.0,
            node_height: 30.0,
            level_height: 60.0,
            node_padding: 20.0,
            use_instancing: false,
            use_quad_tree: false,
        }
    }
}

impl RendererOptions {
    /// Parse options from TOML and validate them.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let opts: Self = toml::from_str(src)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject dimensions the layout cannot use.
    ///
    /// Sizes and level height must be finite and positive; padding must be
    /// finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("level_height", self.level_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        if !self.node_padding.is_finite() || self.node_padding < 0.0 {
            return Err(ConfigError::InvalidDimension {
                field: "node_padding",
                value: self.node_padding,
            });
        }
        Ok(())
    }

    /// The uniform box size.
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Horizontal distance between the left edges of adjacent siblings.
    pub fn sibling_step(&self) -> f64 {
        self.node_width + self.node_padding
    }
}
