// File: crates/miniplot-core/src/engine/histogram.rs
// Summary: Histogram layout: one bar per bucket spanning its edges.

use crate::axis::Axis;
use crate::geometry::{PointF, Primitive, RectF, Role};
use crate::histogram::Histogram;
use crate::kind::ChartKind;
use crate::scale::LinearScale;

use super::frame::Frame;
use super::{PlottedPoint, Scene};

/// Horizontal gap between neighbouring buckets, in pixels.
const GAP: f32 = 1.0;

pub(super) fn layout(mut frame: Frame, data: &[f64], bins: usize) -> Scene {
    let hist = Histogram::compute(data, bins);
    let plot = frame.plot;
    let x_scale = LinearScale::new(hist.range(), (plot.left, plot.right));
    let y_scale = LinearScale::new((0.0, hist.max_count() as f64 * 1.05), (plot.bottom, plot.top));
    let x_axis = Axis::linear(&x_scale, frame.x_ticks());
    let y_axis = Axis::linear(&y_scale, frame.y_ticks());
    frame.axes(&x_axis, &y_axis);

    let floor = y_scale.map(0.0);
    let mut points = Vec::with_capacity(hist.bins());
    for i in 0..hist.bins() {
        let (a, b, count) = hist.bucket(i);
        let (l, r) = (x_scale.map(a), x_scale.map(b));
        let gap = if r - l > 2.0 * GAP { GAP } else { 0.0 };
        let top = y_scale.map(count as f64);
        frame.push(Primitive::Rect { rect: RectF::from_ltrb(l + gap, top, r - gap, floor), role: Role::Series });
        let mid = (a + b) * 0.5;
        points.push(PlottedPoint {
            label: hist.bucket_label(i),
            x: mid,
            y: count as f64,
            px: PointF::new(x_scale.map(mid), top),
        });
    }
    frame.finish(ChartKind::Histogram, x_axis, y_axis, points, Some(hist))
}
