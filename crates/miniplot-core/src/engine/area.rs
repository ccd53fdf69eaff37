// File: crates/miniplot-core/src/engine/area.rs
// Summary: Area layout: the line geometry over a filled region down to the baseline.

use crate::geometry::{PointF, Primitive, Role};
use crate::kind::ChartKind;
use crate::scale::{extent, padded};
use crate::spec::XValues;

use super::frame::Frame;
use super::line::{project_xy, series_strokes};
use super::Scene;

/// Zero, unless every value is positive; then the smallest value.
pub(crate) fn baseline(y: &[f64]) -> f64 {
    match extent(y) {
        Some((lo, _)) if lo > 0.0 => lo,
        _ => 0.0,
    }
}

pub(super) fn layout(mut frame: Frame, x: &XValues, y: &[f64]) -> Scene {
    let base = baseline(y);
    let (lo, hi) = extent(y).unwrap_or((0.0, 1.0));
    let (dlo, dhi) = padded(lo.min(base), hi.max(base), 0.05);
    // The baseline sits on the plot floor unless data dips below it.
    let domain = (if base <= lo { base } else { dlo }, dhi);

    let proj = project_xy(&frame, x, y, domain);
    frame.axes(&proj.x_axis, &proj.y_axis);

    let pixels = proj.pixels();
    if let (Some(first), Some(last)) = (pixels.first(), pixels.last()) {
        let floor = proj.y_scale.map(base);
        let mut outline = Vec::with_capacity(pixels.len() + 2);
        outline.push(PointF::new(first.x, floor));
        outline.extend(pixels.iter().copied());
        outline.push(PointF::new(last.x, floor));
        frame.push(Primitive::Polygon { points: outline, role: Role::SeriesFill });
    }
    series_strokes(&mut frame, pixels);
    frame.finish(ChartKind::Area, proj.x_axis, proj.y_axis, proj.points, None)
}
