//! Abstract rendered scene
//!
//! A `Scene` is a tree of positioned rectangle and text primitives produced
//! by some rendering surface. It deliberately carries no toolkit types:
//! every node exposes only its kind, local bounds, paints and children, so
//! the SVG exporter works identically over any host UI technology.

use serde::{Deserialize, Serialize};

/// An RGBA color. Alpha is a fraction in [0.0, 1.0].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// CSS `rgba(r,g,b,a)` form used for SVG fill/stroke attributes.
    pub fn to_rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, format_alpha(self.a))
    }
}

fn format_alpha(a: f32) -> String {
    // Trim trailing zeros so 1.0 prints as "1" and 0.5 as "0.5"
    let mut s = format!("{:.3}", a);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// One stop of a linear gradient.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Offset along the gradient axis, in [0.0, 1.0]
    pub offset: f64,
    pub color: Color,
}

/// Fill or stroke paint of a scene node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum Paint {
    /// No paint; the exporter omits the attribute entirely
    #[default]
    None,
    Solid(Color),
    /// Horizontal linear gradient, stops ordered by offset
    LinearGradient(Vec<GradientStop>),
}

impl Paint {
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Paint::Solid(color) => Some(*color),
            _ => None,
        }
    }
}

/// A rectangle in the parent node's coordinate space.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Bounds { x, y, width, height }
    }

    /// This rectangle shifted into the coordinate space of the scene root,
    /// given the absolute origin of the parent node.
    pub fn offset_by(&self, origin_x: f64, origin_y: f64) -> Bounds {
        Bounds {
            x: self.x + origin_x,
            y: self.y + origin_y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Per-side stroke widths. The SVG export format only supports a uniform
/// stroke width, so the exporter takes the top value as representative.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct StrokeWidth {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl StrokeWidth {
    pub fn uniform(width: f64) -> Self {
        StrokeWidth {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }
}

/// Primitive kind of a scene node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Bordered box, optionally with rounded corners
    Rect { corner_radius: f64 },
    /// A run of text, anchored at the vertical center of its bounds
    Text {
        content: String,
        font_family: String,
        font_size: f64,
    },
}

/// One positioned primitive in the scene tree.
///
/// Bounds are local to the parent; absolute positions are recovered by the
/// exporter by accumulating origins down the ancestor chain.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub bounds: Bounds,
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: StrokeWidth,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn rect(bounds: Bounds) -> Self {
        SceneNode {
            kind: NodeKind::Rect { corner_radius: 0.0 },
            bounds,
            fill: Paint::None,
            stroke: Paint::None,
            stroke_width: StrokeWidth::default(),
            children: Vec::new(),
        }
    }

    pub fn text(content: &str, bounds: Bounds, font_family: &str, font_size: f64) -> Self {
        SceneNode {
            kind: NodeKind::Text {
                content: content.to_string(),
                font_family: font_family.to_string(),
                font_size,
            },
            bounds,
            fill: Paint::None,
            stroke: Paint::None,
            stroke_width: StrokeWidth::default(),
            children: Vec::new(),
        }
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        if let NodeKind::Rect { corner_radius } = &mut self.kind {
            *corner_radius = radius;
        }
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Paint, width: StrokeWidth) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }
}
