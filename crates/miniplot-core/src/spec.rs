// File: crates/miniplot-core/src/spec.rs
// Summary: ChartSpec construction and per-kind validation of decoded series.

use tracing::debug;

use crate::decode::DecodedSeries;
use crate::error::ValidationError;
use crate::kind::ChartKind;
use crate::series::Series;

/// Upper bound for an explicit histogram bin count.
pub const MAX_BINS: usize = 10_000;

/// Parameters supplied next to the series (typed boundary arguments).
/// When absent, the decoded trailing integer line is used instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChartParams {
    pub bins: Option<i64>,
}

impl ChartParams {
    pub fn bins(bins: i64) -> Self {
        Self { bins: Some(bins) }
    }
}

/// X values of a line/area chart: numeric when every token is a number,
/// otherwise categorical and placed by index.
#[derive(Clone, Debug, PartialEq)]
pub enum XValues {
    Categorical(Vec<String>),
    Numeric(Vec<f64>),
}

impl XValues {
    fn from_series(series: &Series) -> Self {
        match series.numbers() {
            Ok(numbers) => XValues::Numeric(numbers),
            Err(_) => XValues::Categorical(series.labels()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            XValues::Categorical(v) => v.len(),
            XValues::Numeric(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn label(&self, i: usize) -> String {
        match self {
            XValues::Categorical(v) => v[i].clone(),
            XValues::Numeric(v) => crate::series::format_number(v[i]),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartBody {
    Bar { labels: Vec<String>, values: Vec<f64> },
    Line { x: XValues, y: Vec<f64> },
    Scatter { x: Vec<f64>, y: Vec<f64> },
    Histogram { data: Vec<f64>, bins: usize },
    Area { x: XValues, y: Vec<f64> },
}

/// A validated chart request. Constructed only through [`ChartSpec::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    title: String,
    body: ChartBody,
}

impl ChartSpec {
    pub fn build(kind: ChartKind, decoded: DecodedSeries, params: ChartParams) -> Result<Self, ValidationError> {
        let result = Self::build_body(kind, &decoded, params);
        if let Err(err) = &result {
            debug!(kind = kind.slug(), error = %err, "chart spec rejected");
        }
        Ok(Self { title: decoded.title, body: result? })
    }

    fn build_body(kind: ChartKind, decoded: &DecodedSeries, params: ChartParams) -> Result<ChartBody, ValidationError> {
        match kind {
            ChartKind::Bar => {
                let (x, y) = paired(decoded)?;
                Ok(ChartBody::Bar { labels: x.labels(), values: y })
            }
            ChartKind::Line => {
                let (x, y) = paired(decoded)?;
                Ok(ChartBody::Line { x: XValues::from_series(&x), y })
            }
            ChartKind::Area => {
                let (x, y) = paired(decoded)?;
                Ok(ChartBody::Area { x: XValues::from_series(&x), y })
            }
            ChartKind::Scatter => {
                let (x, y) = paired(decoded)?;
                Ok(ChartBody::Scatter { x: numeric("x", &x)?, y })
            }
            ChartKind::Histogram => {
                let data = decoded.series_or_empty(0);
                if data.is_empty() {
                    return Err(ValidationError::EmptySeries("data"));
                }
                let data = numeric("data", &data)?;
                let bins = resolve_bins(params.bins.or(decoded.int_param), data.len())?;
                Ok(ChartBody::Histogram { data, bins })
            }
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self.body {
            ChartBody::Bar { .. } => ChartKind::Bar,
            ChartBody::Line { .. } => ChartKind::Line,
            ChartBody::Scatter { .. } => ChartKind::Scatter,
            ChartBody::Histogram { .. } => ChartKind::Histogram,
            ChartBody::Area { .. } => ChartKind::Area,
        }
    }

    pub fn title(&self) -> &str { &self.title }

    pub fn body(&self) -> &ChartBody { &self.body }

    /// Number of input observations (pairs, or histogram samples).
    pub fn len(&self) -> usize {
        match &self.body {
            ChartBody::Bar { values, .. } => values.len(),
            ChartBody::Line { y, .. } | ChartBody::Area { y, .. } | ChartBody::Scatter { y, .. } => y.len(),
            ChartBody::Histogram { data, .. } => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// X and Y series of a paired chart: lengths first, then emptiness, then Y types.
fn paired(decoded: &DecodedSeries) -> Result<(Series, Vec<f64>), ValidationError> {
    let x = decoded.series_or_empty(0);
    let y = decoded.series_or_empty(1);
    if x.len() != y.len() {
        return Err(ValidationError::LengthMismatch { x: x.len(), y: y.len() });
    }
    if x.is_empty() {
        return Err(ValidationError::EmptySeries("x"));
    }
    let y = numeric("y", &y)?;
    Ok((x, y))
}

fn numeric(name: &'static str, series: &Series) -> Result<Vec<f64>, ValidationError> {
    series
        .numbers()
        .map_err(|(index, token)| ValidationError::NonNumeric { series: name, index, token })
}

/// ⌈√n⌉, at least one bucket.
pub fn default_bin_count(n: usize) -> usize {
    ((n as f64).sqrt().ceil() as usize).clamp(1, MAX_BINS)
}

/// A positive request is honored up to [`MAX_BINS`]; missing or non-positive
/// requests fall back to [`default_bin_count`].
pub fn resolve_bins(requested: Option<i64>, n: usize) -> Result<usize, ValidationError> {
    match requested {
        Some(b) if b > 0 => {
            if b as u64 > MAX_BINS as u64 {
                return Err(ValidationError::InvalidParam(format!("bin count {b} exceeds the maximum of {MAX_BINS}")));
            }
            Ok(b as usize)
        }
        _ => Ok(default_bin_count(n)),
    }
}
