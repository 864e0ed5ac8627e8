// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visual box for one tree node.
//!
//! A view owns one scene node whose display list is rebuilt from scratch
//! whenever anything it shows changes. Local coordinates have the origin at
//! the top-left corner of the box.
//!
//! From left to right a box shows the expand glyph (x 6), the checkbox (x 20),
//! the employee marker (x 44, employees only) and the label.

use kurbo::{Point, Rect, Size};
use orgtree_model::{NodeKind, TreeNode};
use orgtree_scene::{Color, Fill, Graphics, LocalNode, NodeId, Scene, Stroke, TextStyle};

/// Box fill when selected.
pub const SELECTED_FILL: Color = Color(0xBB_DE_FB);
/// Box border when selected, also the checkbox mark.
pub const ACCENT: Color = Color(0x21_96_F3);
/// Box fill when not selected.
pub const UNSELECTED_FILL: Color = Color(0xF5_F5_F5);
/// Box border when not selected.
pub const UNSELECTED_BORDER: Color = Color(0xCC_CC_CC);
/// Multiplicative tint applied to the box fill under the pointer.
pub const HOVER_TINT: Color = Color(0xEE_EE_EE);
/// Checkbox outline.
pub const CHECKBOX_BORDER: Color = Color(0xAA_AA_AA);
/// Employee marker.
pub const EMPLOYEE_ICON: Color = Color(0x66_66_66);
/// Label text and expand glyph.
pub const INK: Color = Color(0x33_33_33);

const CORNER_RADIUS: f64 = 4.0;
const GLYPH_BAR: Rect = Rect::new(6.0, 14.0, 14.0, 16.0);
const GLYPH_STEM: Rect = Rect::new(9.0, 11.0, 11.0, 19.0);
const CHECKBOX: Rect = Rect::new(20.0, 8.0, 34.0, 22.0);
const CHECKBOX_MARK: Rect = Rect::new(22.0, 10.0, 32.0, 20.0);
// Clicks are accepted a little to the left of the drawn checkbox.
const CHECKBOX_HIT: Rect = Rect::new(10.0, 8.0, 24.0, 22.0);
const ICON_CENTER: Point = Point::new(44.0, 15.0);
const ICON_RADIUS: f64 = 4.0;
const LABEL_X: f64 = 44.0;
const EMPLOYEE_LABEL_X: f64 = 54.0;
const LABEL_Y: f64 = 8.0;
const FONT_SIZE: f64 = 12.0;

/// The slice of a [`TreeNode`] a view displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewData {
    /// Node id.
    pub id: String,
    /// Label text.
    pub name: String,
    /// Whether an expand glyph is shown.
    pub has_children: bool,
    /// Selects between the collapse and expand glyph.
    pub expanded: bool,
    /// Employees get a marker and a shifted label.
    pub kind: NodeKind,
}

impl ViewData {
    /// Snapshot the displayed fields of `node`.
    pub fn from_node(node: &TreeNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            has_children: node.has_children(),
            expanded: node.expanded,
            kind: node.data.kind,
        }
    }
}

/// Part of a box under a local point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitRegion {
    /// The selection checkbox.
    Checkbox,
    /// Anywhere else on the box.
    Body,
}

/// Visual box for a single node.
#[derive(Clone, Debug)]
pub struct TreeNodeView {
    node: NodeId,
    data: ViewData,
    position: Point,
    size: Size,
    selected: bool,
    hovered: bool,
}

impl TreeNodeView {
    /// Insert a view under `parent` with its top-left corner at `position`.
    pub fn new(
        scene: &mut Scene,
        parent: Option<NodeId>,
        data: ViewData,
        position: Point,
        size: Size,
        selected: bool,
    ) -> Self {
        let node = scene.insert(parent, LocalNode::at(position, size.to_rect()));
        let view = Self {
            node,
            data,
            position,
            size,
            selected,
            hovered: false,
        };
        view.redraw(scene);
        view
    }

    /// Replace the displayed data and redraw.
    pub fn update(&mut self, scene: &mut Scene, data: ViewData) {
        self.data = data;
        self.redraw(scene);
    }

    /// Set the selection look. Redraws and returns `true` only on a change.
    pub fn update_selection(&mut self, scene: &mut Scene, selected: bool) -> bool {
        if self.selected == selected {
            return false;
        }
        self.selected = selected;
        self.redraw(scene);
        true
    }

    /// Apply or remove the hover tint.
    pub fn set_hovered(&mut self, scene: &mut Scene, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.redraw(scene);
        }
    }

    /// Classify a point in the view's local coordinates.
    ///
    /// The checkbox region is closed on all sides.
    pub fn hit_region(&self, local: Point) -> HitRegion {
        let r = CHECKBOX_HIT;
        if local.x >= r.x0 && local.x <= r.x1 && local.y >= r.y0 && local.y <= r.y1 {
            HitRegion::Checkbox
        } else {
            HitRegion::Body
        }
    }

    /// Node id of the bound data.
    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Bound data.
    pub fn data(&self) -> &ViewData {
        &self.data
    }

    /// Top-left corner in container coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Box size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Box rectangle in container coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Box center in container coordinates.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Whether the selection look is shown.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the hover tint is applied.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Scene node holding the display list.
    pub fn scene_node(&self) -> NodeId {
        self.node
    }

    fn redraw(&self, scene: &mut Scene) {
        scene.set_graphics(self.node, self.paint());
    }

    fn paint(&self) -> Graphics {
        let mut g = Graphics::new();

        let (fill, border) = if self.selected {
            (SELECTED_FILL, ACCENT)
        } else {
            (UNSELECTED_FILL, UNSELECTED_BORDER)
        };
        let fill = if self.hovered {
            fill.tinted(HOVER_TINT)
        } else {
            fill
        };
        g.rounded_rect(
            self.size.to_rect(),
            CORNER_RADIUS,
            Some(Fill::solid(fill)),
            Some(Stroke::new(1.0, border)),
        );

        if self.data.has_children {
            g.rect(GLYPH_BAR, Some(Fill::solid(INK)), None);
            if !self.data.expanded {
                g.rect(GLYPH_STEM, Some(Fill::solid(INK)), None);
            }
        }

        g.rect(
            CHECKBOX,
            Some(Fill::solid(Color::WHITE)),
            Some(Stroke::new(1.0, CHECKBOX_BORDER)),
        );
        if self.selected {
            g.rect(CHECKBOX_MARK, Some(Fill::solid(ACCENT)), None);
        }

        let label_x = if self.data.kind == NodeKind::Employee {
            g.circle(ICON_CENTER, ICON_RADIUS, Fill::solid(EMPLOYEE_ICON));
            EMPLOYEE_LABEL_X
        } else {
            LABEL_X
        };
        g.text(
            Point::new(label_x, LABEL_Y),
            self.data.name.as_str(),
            TextStyle {
                font_size: FONT_SIZE,
                fill: INK,
                ..TextStyle::default()
            },
        );
        g
    }
}
