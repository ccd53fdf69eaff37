// File: crates/miniplot-core/src/grid.rs
// Summary: Grid/tick spacing helpers shared by axes and histogram edges.

// Spans are taken on halved values: `b - a` overflows to infinity for finite
// endpoints more than f64::MAX apart, `b/2 - a/2` never does.

/// Half of `b - a`, finite for any finite endpoints.
#[inline]
pub fn half_span(a: f64, b: f64) -> f64 {
    b * 0.5 - a * 0.5
}

/// Point at fraction `t` of the way from `a` to `b`; monotone in `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let h = half_span(a, b) * t;
    a + h + h
}

/// Position of `v` in [lo, hi] as a fraction (0 at `lo`, 1 at `hi`).
#[inline]
pub fn unit_fraction(v: f64, lo: f64, hi: f64) -> f64 {
    half_span(lo, v) / half_span(lo, hi)
}

/// `(max - min) / n`; doubling back can reach infinity only when `n` < 2.
#[inline]
pub fn span_step(min: f64, max: f64, n: usize) -> f64 {
    half_span(min, max) / n.max(1) as f64 * 2.0
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = (steps - 1) as f64;
    let mut out: Vec<f64> = (0..steps).map(|i| lerp(start, end, i as f64 / last)).collect();
    // Pin the end and keep rounding from stepping past it.
    out[steps - 1] = end;
    if start <= end {
        out.iter_mut().for_each(|v| *v = v.clamp(start, end));
    }
    out
}

/// Indices of `n` items to label so that at most `max_labels` are shown,
/// always starting at the first item.
pub fn thin_indices(n: usize, max_labels: usize) -> Vec<usize> {
    if n == 0 || max_labels == 0 { return Vec::new(); }
    let stride = n.div_ceil(max_labels).max(1);
    (0..n).step_by(stride).collect()
}

/// Round a rough step to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(rough: f64) -> f64 {
    if !rough.is_finite() || rough <= 0.0 { return 1.0; }
    let magnitude = 10f64.powf(rough.log10().floor());
    let residual = rough / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// "Nice number" tick values inside [min, max], about `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if target == 0 || !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(span_step(min, max, target.max(2)));
    let first = (min / step).ceil();
    let tolerance = step * 1e-9;
    let mut ticks = Vec::new();
    for i in 0..=(target * 4) {
        let v = (first + i as f64) * step;
        if v > max + tolerance { break; }
        ticks.push(if v.abs() < tolerance { 0.0 } else { v });
    }
    ticks
}
