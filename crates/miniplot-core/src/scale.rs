// File: crates/miniplot-core/src/scale.rs
// Summary: Data → pixel transforms: linear value scales and categorical bands.

use crate::grid::{half_span, unit_fraction};

/// Linear mapping of a value domain onto a pixel range. The range may be
/// inverted (Y axes map the domain minimum to the bottom pixel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_start: f32,
    pub range_end: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (mut dmin, mut dmax) = domain;
        if dmin > dmax { std::mem::swap(&mut dmin, &mut dmax); }
        if (dmax - dmin).abs() < 1e-12 { dmax = dmin + 1.0; }
        Self { domain_min: dmin, domain_max: dmax, range_start: range.0, range_end: range.1 }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f32 {
        let t = unit_fraction(v, self.domain_min, self.domain_max);
        self.range_start + t as f32 * (self.range_end - self.range_start)
    }
}

/// Evenly split pixel range with one band per category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range_start: f32,
    pub range_end: f32,
}

impl BandScale {
    pub fn new(count: usize, range: (f32, f32)) -> Self {
        Self { count: count.max(1), range_start: range.0, range_end: range.1 }
    }

    #[inline]
    pub fn band_width(&self) -> f32 {
        (self.range_end - self.range_start) / self.count as f32
    }

    #[inline]
    pub fn start(&self, i: usize) -> f32 {
        self.range_start + self.band_width() * i as f32
    }

    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.start(i) + self.band_width() * 0.5
    }
}

/// Min/max of finite values, `None` for an empty slice.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    })
}

/// Grow [min, max] by `frac` of its span on both sides; a zero span grows by ±0.5.
/// Results are clamped to the finite range.
pub fn padded(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let half = half_span(min, max);
    if half.abs() < 0.5e-12 {
        return (min - 0.5, max + 0.5);
    }
    let pad = half * frac * 2.0;
    ((min - pad).max(f64::MIN), (max + pad).min(f64::MAX))
}
