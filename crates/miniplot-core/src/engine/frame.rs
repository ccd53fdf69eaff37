// File: crates/miniplot-core/src/engine/frame.rs
// Summary: Shared chart frame: plot rectangle, title, grid, axis lines and tick labels.

use crate::axis::{Axis, AxisKind};
use crate::chart::RenderOptions;
use crate::geometry::{Align, PointF, Primitive, RectF, Role};
use crate::histogram::Histogram;
use crate::kind::ChartKind;
use crate::types::{LABEL_SIZE, TITLE_BAND, TITLE_SIZE};

use super::{PlottedPoint, Scene};

const TICK_LEN: f32 = 4.0;
pub(super) const MARKER_RADIUS: f32 = 3.0;
pub(super) const STROKE_WIDTH: f32 = 2.0;

pub(super) struct Frame {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub plot: RectF,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn new(opts: &RenderOptions, title: &str) -> Self {
        let (w, h) = (opts.width.max(1) as f32, opts.height.max(1) as f32);
        let ins = opts.insets;
        // Small canvases shrink the margins instead of inverting the plot.
        let left = (ins.left as f32).min(w * 0.3);
        let right = (w - ins.right as f32).max(left + w * 0.4);
        let top = ((ins.top + TITLE_BAND) as f32).min(h * 0.3);
        let bottom = (h - ins.bottom as f32).max(top + h * 0.4);

        let title_baseline = (ins.top as f32 + TITLE_SIZE).min(top - 2.0).max(TITLE_SIZE * 0.8);
        let primitives = vec![Primitive::Text {
            content: title.to_string(),
            anchor: PointF::new(w * 0.5, title_baseline),
            size: TITLE_SIZE,
            align: Align::Center,
            role: Role::Title,
        }];
        Self {
            width: opts.width,
            height: opts.height,
            title: title.to_string(),
            plot: RectF::from_ltrb(left, top, right.min(w), bottom.min(h)),
            primitives,
        }
    }

    /// Preferred tick counts along each axis for the plot size.
    pub fn x_ticks(&self) -> usize { ((self.plot.width() / 100.0) as usize).clamp(3, 10) }
    pub fn y_ticks(&self) -> usize { ((self.plot.height() / 60.0) as usize).clamp(3, 10) }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Grid, axis lines, tick marks and tick labels for both axes.
    pub fn axes(&mut self, x: &Axis, y: &Axis) {
        let p = self.plot;
        if x.kind == AxisKind::Linear {
            for t in &x.ticks {
                self.push(line((t.px, p.top), (t.px, p.bottom), Role::Grid, 1.0));
            }
        }
        for t in &y.ticks {
            self.push(line((p.left, t.px), (p.right, t.px), Role::Grid, 1.0));
        }

        self.push(line((p.left, p.bottom), (p.right, p.bottom), Role::Axis, 1.5));
        self.push(line((p.left, p.top), (p.left, p.bottom), Role::Axis, 1.5));

        for t in &x.ticks {
            self.push(line((t.px, p.bottom), (t.px, p.bottom + TICK_LEN), Role::Axis, 1.0));
            self.push(text(&t.label, (t.px, p.bottom + TICK_LEN + LABEL_SIZE + 2.0), Align::Center, Role::Tick));
        }
        for t in &y.ticks {
            self.push(line((p.left - TICK_LEN, t.px), (p.left, t.px), Role::Axis, 1.0));
            self.push(text(&t.label, (p.left - TICK_LEN - 4.0, t.px + LABEL_SIZE * 0.35), Align::Right, Role::Tick));
        }
    }

    pub fn finish(
        self,
        kind: ChartKind,
        x_axis: Axis,
        y_axis: Axis,
        points: Vec<PlottedPoint>,
        histogram: Option<Histogram>,
    ) -> Scene {
        Scene {
            kind,
            width: self.width,
            height: self.height,
            title: self.title,
            plot: self.plot,
            x_axis,
            y_axis,
            primitives: self.primitives,
            points,
            histogram,
        }
    }
}

pub(super) fn line(from: (f32, f32), to: (f32, f32), role: Role, width: f32) -> Primitive {
    Primitive::Line { from: PointF::new(from.0, from.1), to: PointF::new(to.0, to.1), role, width }
}

pub(super) fn text(content: &str, at: (f32, f32), align: Align, role: Role) -> Primitive {
    Primitive::Text {
        content: content.to_string(),
        anchor: PointF::new(at.0, at.1),
        size: LABEL_SIZE,
        align,
        role,
    }
}
