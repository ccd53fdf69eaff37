// File: crates/miniplot-core/src/engine/bar.rs
// Summary: Bar layout: one uniform-width bar per category, in input order.

use crate::axis::Axis;
use crate::geometry::{Align, PointF, Primitive, RectF, Role};
use crate::kind::ChartKind;
use crate::scale::{extent, BandScale, LinearScale};

use super::frame::{text, Frame};
use super::{PlottedPoint, Scene};

/// Share of the category band a bar occupies.
pub const BAR_FILL: f32 = 0.8;

/// From 0 (or the minimum when negative) up to 5 % above the maximum.
pub(crate) fn value_domain(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = extent(values).unwrap_or((0.0, 1.0));
    (lo.min(0.0), (hi * 1.05).clamp(0.0, f64::MAX))
}

pub(super) fn layout(mut frame: Frame, labels: &[String], values: &[f64]) -> Scene {
    let plot = frame.plot;
    let band = BandScale::new(labels.len(), (plot.left, plot.right));
    let y_scale = LinearScale::new(value_domain(values), (plot.bottom, plot.top));
    let x_axis = Axis::categorical(labels, &band);
    let y_axis = Axis::linear(&y_scale, frame.y_ticks());
    frame.axes(&x_axis, &y_axis);

    let half = band.band_width() * BAR_FILL * 0.5;
    let zero = y_scale.map(0.0_f64.clamp(y_scale.domain_min, y_scale.domain_max));
    let mut points = Vec::with_capacity(values.len());
    for (i, (label, &v)) in labels.iter().zip(values).enumerate() {
        let cx = band.center(i);
        let top = y_scale.map(v);
        frame.push(Primitive::Rect {
            rect: RectF::from_ltrb(cx - half, top.min(zero), cx + half, top.max(zero)),
            role: Role::Series,
        });
        let label_y = if v >= 0.0 { top - 4.0 } else { top + 14.0 };
        frame.push(text(&format!("{v:.1}"), (cx, label_y), Align::Center, Role::Label));
        points.push(PlottedPoint { label: label.clone(), x: i as f64, y: v, px: PointF::new(cx, top) });
    }
    frame.finish(ChartKind::Bar, x_axis, y_axis, points, None)
}
