// File: crates/miniplot-core/src/engine/mod.rs
// Summary: RenderEngine; lays a ChartSpec out into a Scene and rasterizes it through a backend.

mod area;
mod bar;
mod frame;
mod histogram;
mod line;
mod scatter;

use tracing::debug;

use crate::axis::Axis;
use crate::backend::RenderBackend;
use crate::chart::{RenderArtifact, RenderOptions};
use crate::error::RenderError;
use crate::geometry::{PointF, Primitive, RectF, Role};
use crate::histogram::Histogram;
use crate::kind::ChartKind;
use crate::spec::{ChartBody, ChartSpec};

use frame::Frame;

/// One input observation as placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedPoint {
    /// Category label, formatted X value, or bucket label.
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub px: PointF,
}

/// Drawable geometry for one chart, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub kind: ChartKind,
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub plot: RectF,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub primitives: Vec<Primitive>,
    /// Data points in input order (bucket midpoints for histograms).
    pub points: Vec<PlottedPoint>,
    pub histogram: Option<Histogram>,
}

impl Scene {
    pub fn count(&self, role: Role) -> usize {
        self.primitives.iter().filter(|p| p.role() == role).count()
    }

    /// Contents of every title text primitive.
    pub fn title_texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { content, role: Role::Title, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Filled series rectangles (bars and histogram buckets).
    pub fn series_rects(&self) -> Vec<RectF> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect { rect, role: Role::Series } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn markers(&self) -> Vec<PointF> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Marker { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Vertices of the series polyline, if the chart has one.
    pub fn polyline(&self) -> Option<&[PointF]> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Polyline { points, role: Role::Series, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn fill_polygon(&self) -> Option<&[PointF]> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Polygon { points, role: Role::SeriesFill } => Some(points.as_slice()),
            _ => None,
        })
    }
}

pub struct RenderEngine {
    options: RenderOptions,
}

impl RenderEngine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions { &self.options }

    pub fn layout(&self, spec: &ChartSpec) -> Scene {
        let frame = Frame::new(&self.options, spec.title());
        match spec.body() {
            ChartBody::Bar { labels, values } => bar::layout(frame, labels, values),
            ChartBody::Line { x, y } => line::layout(frame, x, y),
            ChartBody::Scatter { x, y } => scatter::layout(frame, x, y),
            ChartBody::Histogram { data, bins } => histogram::layout(frame, data, *bins),
            ChartBody::Area { x, y } => area::layout(frame, x, y),
        }
    }

    pub fn render(&self, spec: &ChartSpec, backend: &dyn RenderBackend) -> Result<RenderArtifact, RenderError> {
        let kind = spec.kind();
        if !backend.supports(kind) {
            return Err(RenderError::UnsupportedKind(kind));
        }
        let scene = self.layout(spec);
        let bytes = backend.rasterize(&scene, &self.options)?;
        debug!(
            kind = kind.slug(),
            backend = backend.name(),
            primitives = scene.primitives.len(),
            bytes = bytes.len(),
            "chart rasterized"
        );
        Ok(RenderArtifact {
            kind,
            title: scene.title,
            width: scene.width as u32,
            height: scene.height as u32,
            format: self.options.format,
            bytes,
        })
    }
}
