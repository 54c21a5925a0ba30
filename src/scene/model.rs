use crate::foundation::core::{Affine, Point, Rect, Rgba8Premul, Vec2};

/// Stroke paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    pub color: Rgba8Premul,
    pub width: f64,
}

/// Per-node style. Opacity and transforms compose down the tree.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub translate: Vec2,
    pub scale: f64,
    /// In-plane rotation, degrees.
    pub rotation_deg: f64,
    /// Perspective tilt around the X and Y axes, degrees. Carried for the host; not part of the
    /// 2D affine.
    pub tilt_deg: Vec2,
    /// Pivot for scale and rotation, in local coordinates.
    pub origin: Point,
    pub fill: Option<Rgba8Premul>,
    pub stroke: Option<Stroke>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
            tilt_deg: Vec2::ZERO,
            origin: Point::ORIGIN,
            fill: None,
            stroke: None,
        }
    }
}

impl Style {
    /// Local transform: `T(translate) * T(origin) * R * S * T(-origin)`.
    pub fn to_affine(&self) -> Affine {
        let origin = self.origin.to_vec2();
        Affine::translate(self.translate)
            * Affine::translate(origin)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }
}

/// Drawable primitive or group.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Group {
        children: Vec<Node>,
    },
    Rect {
        rect: Rect,
        corner_radius: f64,
    },
    Text {
        /// Baseline-left anchor.
        origin: Point,
        text: String,
        size_px: f64,
        weight: u16,
    },
    Line {
        from: Point,
        to: Point,
    },
    Circle {
        center: Point,
        radius: f64,
    },
}

/// One element of a scene tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    pub id: String,
    pub style: Style,
    pub shape: Shape,
}

impl Node {
    fn with_shape(id: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            style: Style::default(),
            shape,
        }
    }

    pub fn group(id: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_shape(id, Shape::Group { children })
    }

    pub fn rect(id: impl Into<String>, rect: Rect) -> Self {
        Self::with_shape(
            id,
            Shape::Rect {
                rect,
                corner_radius: 0.0,
            },
        )
    }

    pub fn text(
        id: impl Into<String>,
        origin: Point,
        text: impl Into<String>,
        size_px: f64,
    ) -> Self {
        Self::with_shape(
            id,
            Shape::Text {
                origin,
                text: text.into(),
                size_px,
                weight: 400,
            },
        )
    }

    pub fn line(id: impl Into<String>, from: Point, to: Point) -> Self {
        Self::with_shape(id, Shape::Line { from, to })
    }

    pub fn circle(id: impl Into<String>, center: Point, radius: f64) -> Self {
        Self::with_shape(id, Shape::Circle { center, radius })
    }

    /// Round a rect's corners; no-op for other shapes.
    pub fn rounded(mut self, radius: f64) -> Self {
        if let Shape::Rect { corner_radius, .. } = &mut self.shape {
            *corner_radius = radius;
        }
        self
    }

    /// Set text weight; no-op for other shapes.
    pub fn weight(mut self, w: u16) -> Self {
        if let Shape::Text { weight, .. } = &mut self.shape {
            *weight = w;
        }
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self
    }

    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        self.style.translate = Vec2::new(dx, dy);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.style.scale = scale;
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.style.rotation_deg = deg;
        self
    }

    pub fn tilt(mut self, x_deg: f64, y_deg: f64) -> Self {
        self.style.tilt_deg = Vec2::new(x_deg, y_deg);
        self
    }

    pub fn origin(mut self, origin: Point) -> Self {
        self.style.origin = origin;
        self
    }

    pub fn fill(mut self, color: Rgba8Premul) -> Self {
        self.style.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Rgba8Premul, width: f64) -> Self {
        self.style.stroke = Some(Stroke { color, width });
        self
    }

    pub fn children(&self) -> &[Node] {
        match &self.shape {
            Shape::Group { children } => children,
            _ => &[],
        }
    }
}

/// A leaf primitive with its accumulated opacity and transform.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLeaf<'a> {
    /// Slash-joined ids from the root.
    pub path: String,
    pub opacity: f64,
    pub transform: Affine,
    pub node: &'a Node,
}

/// Immutable render output of one scene (or the whole composition) for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SceneTree {
    pub nodes: Vec<Node>,
}

impl SceneTree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Tree that draws nothing; returned by scenes before their first beat.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wrap every top-level node in one group.
    pub fn into_group(self, id: impl Into<String>) -> Node {
        Node::group(id, self.nodes)
    }

    /// Depth-first leaves with composed opacity and transform, in paint order.
    pub fn leaves(&self) -> Vec<ResolvedLeaf<'_>> {
        let mut out = Vec::new();
        for node in &self.nodes {
            collect_leaves(node, "", 1.0, Affine::IDENTITY, &mut out);
        }
        out
    }

    /// Leaves that would put any ink on the canvas.
    pub fn visible_leaves(&self) -> Vec<ResolvedLeaf<'_>> {
        self.leaves()
            .into_iter()
            .filter(|l| l.opacity > 0.0)
            .collect()
    }

    /// `true` when nothing in the tree is visible.
    pub fn is_transparent(&self) -> bool {
        self.visible_leaves().is_empty()
    }

    /// Find a node by its slash-joined id path, e.g. `"card/button"`.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let mut parts = path.split('/');
        let first = parts.next()?;
        let mut node = self.nodes.iter().find(|n| n.id == first)?;
        for part in parts {
            node = node.children().iter().find(|n| n.id == part)?;
        }
        Some(node)
    }
}

fn collect_leaves<'a>(
    node: &'a Node,
    prefix: &str,
    parent_opacity: f64,
    parent_transform: Affine,
    out: &mut Vec<ResolvedLeaf<'a>>,
) {
    let path = if prefix.is_empty() {
        node.id.clone()
    } else {
        format!("{prefix}/{}", node.id)
    };
    let opacity = parent_opacity * node.style.opacity;
    let transform = parent_transform * node.style.to_affine();
    match &node.shape {
        Shape::Group { children } => {
            for child in children {
                collect_leaves(child, &path, opacity, transform, out);
            }
        }
        _ => out.push(ResolvedLeaf {
            path,
            opacity,
            transform,
            node,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
