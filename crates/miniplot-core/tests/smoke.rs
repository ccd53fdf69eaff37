// File: crates/miniplot-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing PNG and SVG files.

use miniplot_core::{Chart, ChartKind, ChartParams, ChartSpec, ImageFormat, RenderOptions, SeriesDecoder};

fn chart(kind: ChartKind, payload: &str) -> Chart {
    let decoded = SeriesDecoder::for_kind(kind).decode(payload).expect("decode");
    Chart::new(ChartSpec::build(kind, decoded, ChartParams::default()).expect("spec"))
}

#[test]
fn render_smoke_png() {
    let chart = chart(ChartKind::Line, "Smoke\n0,1,2,3,4\n0,2,1,3.5,2.5\n");
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_file(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_svg() {
    let chart = chart(ChartKind::Bar, "Sales\nA,B,C\n30,50,80\n");
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_file(&RenderOptions::default(), &out).expect("svg render");
    let text = std::fs::read_to_string(&out).expect("svg written");
    assert!(text.contains("<svg"), "not an svg document");
    assert_eq!(ImageFormat::for_path(&out), ImageFormat::Svg);
}

#[test]
fn every_kind_and_theme_renders() {
    let payloads = [
        (ChartKind::Bar, "B\nA,B,C\n30,-50,80\n"),
        (ChartKind::Line, "L\nmon,tue,wed\n1,4,2\n"),
        (ChartKind::Scatter, "S\n1,2,3\n3,1,2\n"),
        (ChartKind::Histogram, "H\n1,2,2,3,4,4,4,5\n3\n"),
        (ChartKind::Area, "\n1,2,3\n2,2,2\n"),
    ];
    for theme in miniplot_core::theme::presets() {
        let opts = RenderOptions { theme, width: 320, height: 200, ..RenderOptions::default() };
        for (kind, payload) in payloads {
            let bytes = chart(kind, payload).render_to_png_bytes(&opts).expect("render");
            assert!(bytes.starts_with(&[137, 80, 78, 71]), "{kind} / {}", theme.name);
        }
    }
}
