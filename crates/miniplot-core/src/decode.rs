// File: crates/miniplot-core/src/decode.rs
// Summary: Line-oriented payload decoder (title line, one comma-separated line per series,
//          optional trailing integer parameter).

use std::path::Path;

use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::kind::ChartKind;
use crate::series::Series;

/// Which lines a payload carries for a given chart kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayloadLayout {
    /// Series names in payload order.
    pub series: &'static [&'static str],
    /// Whether a single-integer line follows the series lines.
    pub int_param: bool,
}

impl PayloadLayout {
    pub const XY: PayloadLayout = PayloadLayout { series: &["x", "y"], int_param: false };
    pub const HISTOGRAM: PayloadLayout = PayloadLayout { series: &["data"], int_param: true };

    pub const fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Histogram => Self::HISTOGRAM,
            ChartKind::Bar | ChartKind::Line | ChartKind::Scatter | ChartKind::Area => Self::XY,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedSeries {
    pub title: String,
    pub series: Vec<Series>,
    pub int_param: Option<i64>,
}

impl DecodedSeries {
    pub fn new(title: impl Into<String>, series: Vec<Series>) -> Self {
        Self { title: title.into(), series, int_param: None }
    }

    pub fn with_param(mut self, param: Option<i64>) -> Self {
        self.int_param = param;
        self
    }

    /// Series at `index`, or an empty one when the payload did not carry it.
    pub fn series_or_empty(&self, index: usize) -> Series {
        self.series.get(index).cloned().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SeriesDecoder {
    kind: ChartKind,
    layout: PayloadLayout,
}

impl SeriesDecoder {
    pub const fn for_kind(kind: ChartKind) -> Self {
        Self { kind, layout: PayloadLayout::for_kind(kind) }
    }

    pub fn layout(&self) -> PayloadLayout { self.layout }

    /// Decode a payload. Only a missing title line is an error; everything else is
    /// permissive and left to validation.
    pub fn decode(&self, payload: &str) -> Result<DecodedSeries, DecodeError> {
        let mut lines = payload.lines();
        let title = lines
            .next()
            .ok_or(DecodeError::MalformedPayload("empty payload: missing title line"))?
            .to_string();

        let series: Vec<Series> = self
            .layout
            .series
            .iter()
            .map(|_| lines.next().map(Series::parse_line).unwrap_or_default())
            .collect();

        let int_param = if self.layout.int_param {
            lines.next().and_then(parse_int_param)
        } else {
            None
        };

        let extra = lines.count();
        if extra > 0 {
            trace!(kind = self.kind.slug(), extra, "ignoring trailing payload lines");
        }

        debug!(
            kind = self.kind.slug(),
            lengths = ?series.iter().map(Series::len).collect::<Vec<_>>(),
            int_param = ?int_param,
            "decoded payload"
        );
        Ok(DecodedSeries { title, series, int_param })
    }

    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<DecodedSeries, DecodeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| DecodeError::Io { path: path.to_path_buf(), source })?;
        self.decode(&text)
    }
}

/// Integer line; integral floats ("5.0") are accepted, anything else means "absent".
fn parse_int_param(line: &str) -> Option<i64> {
    let t = line.trim();
    if let Ok(v) = t.parse::<i64>() {
        return Some(v);
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Some(v as i64),
        _ => None,
    }
}
