// File: crates/miniplot-core/src/engine/line.rs
// Summary: Line layout and the X/Y projection shared with area and scatter charts.

use crate::axis::Axis;
use crate::geometry::{PointF, Primitive, Role};
use crate::kind::ChartKind;
use crate::scale::{extent, padded, BandScale, LinearScale};
use crate::spec::XValues;

use super::frame::{Frame, MARKER_RADIUS, STROKE_WIDTH};
use super::{PlottedPoint, Scene};

pub(super) struct Projection {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y_scale: LinearScale,
    pub points: Vec<PlottedPoint>,
}

impl Projection {
    pub fn pixels(&self) -> Vec<PointF> {
        self.points.iter().map(|p| p.px).collect()
    }
}

/// Place every (x[i], y[i]) in input order. Categorical X uses band centers;
/// numeric X a linear scale over its extent padded by 5 %. `y_domain` is
/// used as given.
pub(super) fn project_xy(frame: &Frame, x: &XValues, y: &[f64], y_domain: (f64, f64)) -> Projection {
    let plot = frame.plot;
    let y_scale = LinearScale::new(y_domain, (plot.bottom, plot.top));

    let (x_axis, xs): (Axis, Vec<(f64, f32)>) = match x {
        XValues::Categorical(labels) => {
            let band = BandScale::new(labels.len(), (plot.left, plot.right));
            let xs = (0..labels.len()).map(|i| (i as f64, band.center(i))).collect();
            (Axis::categorical(labels, &band), xs)
        }
        XValues::Numeric(values) => {
            let (lo, hi) = extent(values).unwrap_or((0.0, 1.0));
            let scale = LinearScale::new(padded(lo, hi, 0.05), (plot.left, plot.right));
            let xs = values.iter().map(|&v| (v, scale.map(v))).collect();
            (Axis::linear(&scale, frame.x_ticks()), xs)
        }
    };

    let points = xs
        .into_iter()
        .zip(y)
        .enumerate()
        .map(|(i, ((xv, px), &yv))| PlottedPoint {
            label: x.label(i),
            x: xv,
            y: yv,
            px: PointF::new(px, y_scale.map(yv)),
        })
        .collect();

    Projection { x_axis, y_axis: Axis::linear(&y_scale, frame.y_ticks()), y_scale, points }
}

/// Y extent padded by 5 %.
pub(super) fn y_domain(y: &[f64]) -> (f64, f64) {
    let (lo, hi) = extent(y).unwrap_or((0.0, 1.0));
    padded(lo, hi, 0.05)
}

/// Polyline through the points, then a marker on each vertex.
pub(super) fn series_strokes(frame: &mut Frame, points: Vec<PointF>) {
    let markers: Vec<Primitive> = points
        .iter()
        .map(|&center| Primitive::Marker { center, radius: MARKER_RADIUS, role: Role::Marker })
        .collect();
    frame.push(Primitive::Polyline { points, role: Role::Series, width: STROKE_WIDTH });
    frame.primitives.extend(markers);
}

pub(super) fn layout(mut frame: Frame, x: &XValues, y: &[f64]) -> Scene {
    let proj = project_xy(&frame, x, y, y_domain(y));
    frame.axes(&proj.x_axis, &proj.y_axis);
    series_strokes(&mut frame, proj.pixels());
    frame.finish(ChartKind::Line, proj.x_axis, proj.y_axis, proj.points, None)
}
