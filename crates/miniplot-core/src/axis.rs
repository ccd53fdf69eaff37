// File: crates/miniplot-core/src/axis.rs
// Summary: Axis model: value range, kind, and the ticks laid out along it.

use crate::grid::{nice_step, nice_ticks, span_step, thin_indices};
use crate::scale::{BandScale, LinearScale};

/// Most category labels drawn along one axis before thinning kicks in.
pub const MAX_CATEGORY_LABELS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Linear,
    Categorical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Pixel position along the axis direction.
    pub px: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Linear axis over the scale's domain with about `target` nice ticks.
    pub fn linear(scale: &LinearScale, target: usize) -> Self {
        let (min, max) = (scale.domain_min, scale.domain_max);
        let step = nice_step(span_step(min, max, target.max(2)));
        let ticks = nice_ticks(min, max, target)
            .into_iter()
            .map(|value| Tick { value, label: format_tick(value, step), px: scale.map(value) })
            .collect();
        Self { min, max, kind: AxisKind::Linear, ticks }
    }

    /// One tick per category at band centers, thinned to at most
    /// [`MAX_CATEGORY_LABELS`].
    pub fn categorical(labels: &[String], band: &BandScale) -> Self {
        let ticks = thin_indices(labels.len(), MAX_CATEGORY_LABELS)
            .into_iter()
            .map(|i| Tick { value: i as f64, label: labels[i].clone(), px: band.center(i) })
            .collect();
        Self {
            min: 0.0,
            max: labels.len().saturating_sub(1) as f64,
            kind: AxisKind::Categorical,
            ticks,
        }
    }

    pub fn tick_values(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value).collect()
    }
}

/// Tick label with as many decimals as the step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).clamp(0.0, 6.0) as usize
    } else {
        2
    };
    let v = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    format!("{v:.decimals$}")
}
