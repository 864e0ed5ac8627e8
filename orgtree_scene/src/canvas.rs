// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bundle of capabilities a scene consumer borrows: scene, camera, clock.

use kurbo::Size;

use crate::scene::Scene;
use crate::ticker::Ticker;
use crate::viewport::Viewport;

/// Scene graph, viewport, and ticker owned together by the host.
///
/// Consumers take `&mut Canvas` per operation rather than holding shared
/// references, so every mutation of the scene is visible in a signature.
#[derive(Debug)]
pub struct Canvas {
    /// Retained scene graph in canvas-local coordinates.
    pub scene: Scene,
    /// Camera mapping canvas-local coordinates to the screen.
    pub viewport: Viewport,
    /// Per-frame tick source.
    pub ticker: Ticker,
}

impl Canvas {
    /// An empty canvas for a screen of the given size.
    pub fn new(screen: Size) -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::new(screen),
            ticker: Ticker::new(),
        }
    }
}
