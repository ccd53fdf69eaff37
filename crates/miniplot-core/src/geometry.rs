// File: crates/miniplot-core/src/geometry.rs
// Summary: Pixel-space geometry and the drawable primitives a scene is made of.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}

impl From<PointF> for (f32, f32) {
    fn from(p: PointF) -> Self { (p.x, p.y) }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// What a primitive depicts; the theme decides the color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Grid,
    Axis,
    Tick,
    Label,
    Title,
    Series,
    SeriesFill,
    Marker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: PointF, to: PointF, role: Role, width: f32 },
    Rect { rect: RectF, role: Role },
    Polyline { points: Vec<PointF>, role: Role, width: f32 },
    /// Closed, filled outline.
    Polygon { points: Vec<PointF>, role: Role },
    Marker { center: PointF, radius: f32, role: Role },
    /// `anchor` is the text baseline point; `align` is relative to it.
    Text { content: String, anchor: PointF, size: f32, align: Align, role: Role },
}

impl Primitive {
    pub fn role(&self) -> Role {
        match self {
            Primitive::Line { role, .. }
            | Primitive::Rect { role, .. }
            | Primitive::Polyline { role, .. }
            | Primitive::Polygon { role, .. }
            | Primitive::Marker { role, .. }
            | Primitive::Text { role, .. } => *role,
        }
    }
}
