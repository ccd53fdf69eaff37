// File: crates/miniplot-core/src/engine/scatter.rs
// Summary: Scatter layout: one marker per pair, nothing connecting them.

use crate::geometry::{Primitive, Role};
use crate::kind::ChartKind;
use crate::spec::XValues;

use super::frame::{Frame, MARKER_RADIUS};
use super::line::{project_xy, y_domain};
use super::Scene;

pub(super) fn layout(mut frame: Frame, x: &[f64], y: &[f64]) -> Scene {
    let proj = project_xy(&frame, &XValues::Numeric(x.to_vec()), y, y_domain(y));
    frame.axes(&proj.x_axis, &proj.y_axis);
    for p in &proj.points {
        frame.push(Primitive::Marker { center: p.px, radius: MARKER_RADIUS + 1.0, role: Role::Marker });
    }
    frame.finish(ChartKind::Scatter, proj.x_axis, proj.y_axis, proj.points, None)
}
