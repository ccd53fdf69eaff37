// File: crates/miniplot-core/src/histogram.rs
// Summary: Equal-width binning over the data range.
// Buckets are closed below and open above ([a, b)), except the last one which is
// closed on both ends so the maximum is always counted.

use crate::grid::{linspace, unit_fraction};

#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin `data` into `bins` buckets (at least one) spanning [min, max].
    /// A zero-width range is widened to [min - 0.5, max + 0.5]; non-finite
    /// values are skipped.
    pub fn compute(data: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (lo, hi) = data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));
        let (lo, hi) = if hi - lo > 0.0 { (lo, hi) } else { (lo - 0.5, hi + 0.5) };

        let edges = linspace(lo, hi, bins + 1);
        let mut hist = Self { edges, counts: vec![0; bins] };
        for &v in data {
            if let Some(i) = hist.bucket_index(v) {
                hist.counts[i] += 1;
            }
        }
        hist
    }

    /// Bucket a value falls into, or `None` when it is outside [min, max].
    pub fn bucket_index(&self, v: f64) -> Option<usize> {
        let bins = self.counts.len();
        let lo = self.edges[0];
        let hi = self.edges[bins];
        if !(v >= lo && v <= hi) {
            return None;
        }
        if v == hi {
            return Some(bins - 1);
        }
        let mut i = ((unit_fraction(v, lo, hi) * bins as f64).floor() as usize).min(bins - 1);
        // Settle rounding at the edges against the stored boundaries.
        while i > 0 && v < self.edges[i] {
            i -= 1;
        }
        while i + 1 < bins && v >= self.edges[i + 1] {
            i += 1;
        }
        Some(i)
    }

    pub fn bins(&self) -> usize { self.counts.len() }

    /// `bins + 1` boundaries, ascending.
    pub fn edges(&self) -> &[f64] { &self.edges }

    pub fn counts(&self) -> &[usize] { &self.counts }

    pub fn total(&self) -> usize { self.counts.iter().sum() }

    pub fn max_count(&self) -> usize { self.counts.iter().copied().max().unwrap_or(0) }

    pub fn range(&self) -> (f64, f64) { (self.edges[0], self.edges[self.bins()]) }

    /// (lower edge, upper edge, count) of bucket `i`.
    pub fn bucket(&self, i: usize) -> (f64, f64, usize) {
        (self.edges[i], self.edges[i + 1], self.counts[i])
    }

    /// Interval notation for bucket `i`: "[a, b)" or "[a, b]" for the last one.
    pub fn bucket_label(&self, i: usize) -> String {
        let (a, b, _) = self.bucket(i);
        let close = if i + 1 == self.bins() { ']' } else { ')' };
        format!("[{}, {}{}", crate::series::format_number(a), crate::series::format_number(b), close)
    }
}
