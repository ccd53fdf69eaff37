// File: crates/miniplot-core/src/config.rs
// Summary: Environment-driven configuration for presentation mode and render options.

use std::path::PathBuf;

use tracing::warn;

use crate::chart::{ImageFormat, RenderOptions};
use crate::present::PresentMode;
use crate::theme;
use crate::types::{MAX_EDGE, MIN_EDGE};

pub const PRESENT_ENV: &str = "MINIPLOT_PRESENT";
pub const VIEWER_PATH_ENV: &str = "MINIPLOT_VIEWER_PATH";
/// Older name for [`VIEWER_PATH_ENV`], still honored.
pub const LEGACY_VIEWER_PATH_ENV: &str = "CHART_VIEWER_PATH";
pub const VIEWER_BLOCKING_ENV: &str = "MINIPLOT_VIEWER_BLOCKING";
pub const OUTPUT_DIR_ENV: &str = "MINIPLOT_OUTPUT_DIR";
pub const WIDTH_ENV: &str = "MINIPLOT_WIDTH";
pub const HEIGHT_ENV: &str = "MINIPLOT_HEIGHT";
pub const THEME_ENV: &str = "MINIPLOT_THEME";
pub const FORMAT_ENV: &str = "MINIPLOT_FORMAT";
pub const LABELS_ENV: &str = "MINIPLOT_LABELS";
pub const LIB_PATH_ENV: &str = "MINIPLOT_LIB_PATH";

#[derive(Clone, Debug, PartialEq)]
pub struct MiniplotConfig {
    pub present: PresentMode,
    pub render: RenderOptions,
}

impl Default for MiniplotConfig {
    fn default() -> Self {
        Self {
            present: PresentMode::Viewer { program: None, blocking: false, dir: std::env::temp_dir() },
            render: RenderOptions::default(),
        }
    }
}

impl MiniplotConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let dir = get(OUTPUT_DIR_ENV).map(PathBuf::from).unwrap_or_else(std::env::temp_dir);
        let present = match get(PRESENT_ENV).map(|v| v.to_ascii_lowercase()).as_deref() {
            None | Some("viewer") => PresentMode::Viewer {
                program: get(VIEWER_PATH_ENV).or_else(|| get(LEGACY_VIEWER_PATH_ENV)).map(PathBuf::from),
                blocking: get(VIEWER_BLOCKING_ENV).map(|v| parse_flag(VIEWER_BLOCKING_ENV, &v, false)).unwrap_or(false),
                dir,
            },
            Some("file") => PresentMode::File { dir },
            Some("memory") => PresentMode::Memory,
            Some(other) => {
                warn!(key = PRESENT_ENV, value = other, "unknown presentation mode, using viewer");
                PresentMode::Viewer { program: None, blocking: false, dir }
            }
        };

        let mut render = RenderOptions::default();
        if let Some(v) = get(WIDTH_ENV) {
            render.width = parse_edge(WIDTH_ENV, &v, render.width);
        }
        if let Some(v) = get(HEIGHT_ENV) {
            render.height = parse_edge(HEIGHT_ENV, &v, render.height);
        }
        if let Some(v) = get(THEME_ENV) {
            match theme::find(&v) {
                Some(t) => render.theme = t,
                None => warn!(key = THEME_ENV, value = %v, "unknown theme, using light"),
            }
        }
        if let Some(v) = get(FORMAT_ENV) {
            match ImageFormat::from_name(&v) {
                Some(f) => render.format = f,
                None => warn!(key = FORMAT_ENV, value = %v, "unknown image format, using png"),
            }
        }
        if let Some(v) = get(LABELS_ENV) {
            render.draw_labels = parse_flag(LABELS_ENV, &v, true);
        }
        // The viewer only decodes raster images.
        if matches!(present, PresentMode::Viewer { .. }) {
            render.format = ImageFormat::Png;
        }

        Self { present, render }
    }
}

fn parse_flag(key: &str, value: &str, default: bool) -> bool {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!(key, value, default, "expected a boolean flag");
            default
        }
    }
}

fn parse_edge(key: &str, value: &str, default: i32) -> i32 {
    match value.parse::<i32>() {
        Ok(px) if (MIN_EDGE..=MAX_EDGE).contains(&px) => px,
        _ => {
            warn!(key, value, default, min = MIN_EDGE, max = MAX_EDGE, "canvas size out of range");
            default
        }
    }
}

fn exe(name: &str) -> String {
    format!("{name}{}", std::env::consts::EXE_SUFFIX)
}

/// Viewer programs tried after the configured one, in order.
pub fn default_viewer_candidates() -> Vec<PathBuf> {
    let bin = exe("miniplot-viewer");
    vec![
        PathBuf::from("./miniplot-viewer/target/release").join(&bin),
        PathBuf::from(".").join(&bin),
        PathBuf::from(bin),
    ]
}

/// Where a host shim looks for the miniplot shared library: `MINIPLOT_LIB_PATH`,
/// otherwise the release build output for the current platform.
pub fn default_library_path() -> PathBuf {
    if let Some(p) = std::env::var_os(LIB_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    let file = format!(
        "{}miniplot_ffi{}",
        std::env::consts::DLL_PREFIX,
        std::env::consts::DLL_SUFFIX
    );
    PathBuf::from("./miniplot-ffi/target/release").join(file)
}
