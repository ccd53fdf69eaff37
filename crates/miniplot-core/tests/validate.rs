// File: crates/miniplot-core/tests/validate.rs
// Purpose: ChartSpec construction: per-kind required series, length rule, bin count handling.

use miniplot_core::spec::{default_bin_count, resolve_bins, ChartBody, XValues, MAX_BINS};
use miniplot_core::{ChartKind, ChartParams, ChartSpec, DecodedSeries, Series, SeriesDecoder, ValidationError};

fn xy(x: &[&str], y: &[&str]) -> DecodedSeries {
    DecodedSeries::new("t", vec![Series::from_tokens(x), Series::from_tokens(y)])
}

fn build(kind: ChartKind, d: DecodedSeries) -> Result<ChartSpec, ValidationError> {
    ChartSpec::build(kind, d, ChartParams::default())
}

#[test]
fn length_mismatch_is_reported_first() {
    let err = build(ChartKind::Bar, xy(&["A", "B", "C"], &["1", "2"])).unwrap_err();
    assert_eq!(err, ValidationError::LengthMismatch { x: 3, y: 2 });
    assert_eq!(err.to_string(), "length mismatch: x has 3 values, y has 2");

    // Even when one side is empty or holds text
    let err = build(ChartKind::Line, xy(&[], &["oops"])).unwrap_err();
    assert_eq!(err, ValidationError::LengthMismatch { x: 0, y: 1 });
}

#[test]
fn empty_pairs_are_rejected() {
    for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Scatter, ChartKind::Area] {
        let err = build(kind, xy(&[], &[])).unwrap_err();
        assert_eq!(err, ValidationError::EmptySeries("x"), "{kind}");
    }
    let err = build(ChartKind::Histogram, DecodedSeries::new("h", vec![Series::default()])).unwrap_err();
    assert_eq!(err, ValidationError::EmptySeries("data"));
}

#[test]
fn y_must_be_numeric() {
    let err = build(ChartKind::Bar, xy(&["A", "B"], &["1", "NULL"])).unwrap_err();
    assert_eq!(err, ValidationError::NonNumeric { series: "y", index: 1, token: "NULL".into() });
}

#[test]
fn scatter_requires_numeric_x() {
    let err = build(ChartKind::Scatter, xy(&["1", "two"], &["1", "2"])).unwrap_err();
    assert!(matches!(err, ValidationError::NonNumeric { series: "x", index: 1, .. }), "{err:?}");
}

#[test]
fn bar_uses_numbers_as_labels() {
    let spec = build(ChartKind::Bar, xy(&["2020", "2021.5"], &["1", "2"])).unwrap();
    match spec.body() {
        ChartBody::Bar { labels, values } => {
            assert_eq!(labels, &vec!["2020".to_string(), "2021.5".to_string()]);
            assert_eq!(values, &vec![1.0, 2.0]);
        }
        other => panic!("unexpected body {other:?}"),
    }
    assert_eq!(spec.kind(), ChartKind::Bar);
    assert_eq!(spec.len(), 2);
}

#[test]
fn line_x_is_numeric_only_when_every_token_is() {
    let spec = build(ChartKind::Line, xy(&["1", "2", "3"], &["4", "5", "6"])).unwrap();
    assert!(matches!(spec.body(), ChartBody::Line { x: XValues::Numeric(_), .. }));

    let spec = build(ChartKind::Area, xy(&["1", "b", "3"], &["4", "5", "6"])).unwrap();
    match spec.body() {
        ChartBody::Area { x: XValues::Categorical(labels), .. } => assert_eq!(labels[1], "b"),
        other => panic!("unexpected body {other:?}"),
    }
}

#[test]
fn empty_title_is_valid() {
    let spec = ChartSpec::build(
        ChartKind::Scatter,
        DecodedSeries::new("", vec![Series::from_numbers(&[1.0]), Series::from_numbers(&[2.0])]),
        ChartParams::default(),
    )
    .unwrap();
    assert_eq!(spec.title(), "");
}

#[test]
fn histogram_bins_follow_parameter_rules() {
    let data = Series::from_numbers(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let bins_of = |d: DecodedSeries, p: ChartParams| match ChartSpec::build(ChartKind::Histogram, d, p).unwrap().body() {
        ChartBody::Histogram { bins, .. } => *bins,
        other => panic!("unexpected body {other:?}"),
    };
    let d = || DecodedSeries::new("h", vec![data.clone()]);

    assert_eq!(bins_of(d(), ChartParams::default()), 3);
    assert_eq!(bins_of(d().with_param(Some(4)), ChartParams::default()), 4);
    assert_eq!(bins_of(d().with_param(Some(0)), ChartParams::default()), 3);
    assert_eq!(bins_of(d().with_param(Some(-2)), ChartParams::default()), 3);
    // The typed argument wins over the decoded line
    assert_eq!(bins_of(d().with_param(Some(4)), ChartParams::bins(7)), 7);
}

#[test]
fn histogram_bin_cap() {
    assert_eq!(resolve_bins(Some(MAX_BINS as i64), 5), Ok(MAX_BINS));
    let err = resolve_bins(Some(MAX_BINS as i64 + 1), 5).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidParam(_)));
    assert_eq!(default_bin_count(0), 1);
    assert_eq!(default_bin_count(1), 1);
    assert_eq!(default_bin_count(10), 4);
}

#[test]
fn decoded_payload_feeds_validation() {
    let decoded = SeriesDecoder::for_kind(ChartKind::Histogram).decode("H\n1,2,2,3,4\n2\n").unwrap();
    let spec = ChartSpec::build(ChartKind::Histogram, decoded, ChartParams::default()).unwrap();
    assert_eq!(spec.body(), &ChartBody::Histogram { data: vec![1.0, 2.0, 2.0, 3.0, 4.0], bins: 2 });
}
