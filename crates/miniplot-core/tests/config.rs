// File: crates/miniplot-core/tests/config.rs
// Purpose: Environment configuration parsing and fallbacks, via an injected lookup.

use std::collections::HashMap;
use std::path::PathBuf;

use miniplot_core::config::{default_viewer_candidates, MiniplotConfig};
use miniplot_core::{ImageFormat, PresentMode};

fn config(vars: &[(&str, &str)]) -> MiniplotConfig {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    MiniplotConfig::from_lookup(|k| map.get(k).cloned())
}

#[test]
fn defaults() {
    let c = config(&[]);
    match c.present {
        PresentMode::Viewer { program, blocking, dir } => {
            assert_eq!(program, None);
            assert!(!blocking);
            assert_eq!(dir, std::env::temp_dir());
        }
        other => panic!("unexpected mode {other:?}"),
    }
    assert_eq!((c.render.width, c.render.height), (800, 600));
    assert_eq!(c.render.theme.name, "light");
    assert_eq!(c.render.format, ImageFormat::Png);
    assert!(c.render.draw_labels);
}

#[test]
fn explicit_values() {
    let c = config(&[
        ("MINIPLOT_PRESENT", "File"),
        ("MINIPLOT_OUTPUT_DIR", "/tmp/charts"),
        ("MINIPLOT_WIDTH", "1024"),
        ("MINIPLOT_HEIGHT", " 480 "),
        ("MINIPLOT_THEME", "solarized-dark"),
        ("MINIPLOT_FORMAT", "svg"),
        ("MINIPLOT_LABELS", "0"),
    ]);
    assert_eq!(c.present, PresentMode::File { dir: PathBuf::from("/tmp/charts") });
    assert_eq!((c.render.width, c.render.height), (1024, 480));
    assert_eq!(c.render.theme.name, "solarized-dark");
    assert_eq!(c.render.format, ImageFormat::Svg);
    assert!(!c.render.draw_labels);

    assert_eq!(config(&[("MINIPLOT_PRESENT", "memory")]).present, PresentMode::Memory);
}

#[test]
fn invalid_values_fall_back() {
    let c = config(&[
        ("MINIPLOT_PRESENT", "hologram"),
        ("MINIPLOT_WIDTH", "10"),
        ("MINIPLOT_HEIGHT", "tall"),
        ("MINIPLOT_THEME", "neon"),
        ("MINIPLOT_FORMAT", "gif"),
        ("MINIPLOT_LABELS", "maybe"),
    ]);
    assert!(matches!(c.present, PresentMode::Viewer { .. }));
    assert_eq!((c.render.width, c.render.height), (800, 600));
    assert_eq!(c.render.theme.name, "light");
    assert_eq!(c.render.format, ImageFormat::Png);
    assert!(c.render.draw_labels);
}

#[test]
fn viewer_program_and_legacy_alias() {
    let program = |c: MiniplotConfig| match c.present {
        PresentMode::Viewer { program, .. } => program,
        other => panic!("unexpected mode {other:?}"),
    };
    assert_eq!(program(config(&[("CHART_VIEWER_PATH", "/opt/old")])), Some(PathBuf::from("/opt/old")));
    assert_eq!(
        program(config(&[("CHART_VIEWER_PATH", "/opt/old"), ("MINIPLOT_VIEWER_PATH", "/opt/new")])),
        Some(PathBuf::from("/opt/new"))
    );
    let c = config(&[("MINIPLOT_VIEWER_BLOCKING", "true")]);
    assert!(matches!(c.present, PresentMode::Viewer { blocking: true, .. }));
}

#[test]
fn viewer_mode_forces_png() {
    let c = config(&[("MINIPLOT_FORMAT", "svg")]);
    assert_eq!(c.render.format, ImageFormat::Png);
}

#[test]
fn viewer_candidates_end_on_path_lookup() {
    let candidates = default_viewer_candidates();
    assert_eq!(candidates.len(), 3);
    let bin = format!("miniplot-viewer{}", std::env::consts::EXE_SUFFIX);
    assert_eq!(candidates[2], PathBuf::from(&bin));
    assert!(candidates[0].ends_with(&bin));
}
