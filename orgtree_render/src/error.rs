// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Failure to load [`RendererOptions`](crate::RendererOptions).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML source did not parse into options.
    #[error("invalid renderer options: {0}")]
    Parse(#[from] toml::de::Error),
    /// A dimension is out of range.
    #[error("`{field}` is out of range: {value}")]
    InvalidDimension {
        /// Name of the offending option.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}
