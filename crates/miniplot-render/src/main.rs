// File: crates/miniplot-render/src/main.rs
// Summary: Renders one chart from a CSV or payload file to disk.
// Usage: miniplot-render <kind> <input.csv|payload.txt> [output.png|output.svg] [bins]

mod input;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use miniplot_core::telemetry::init_default_tracing;
use miniplot_core::{Chart, ChartKind, ChartParams, ChartSpec, MiniplotConfig, SeriesDecoder};
use tracing::info;

fn main() -> Result<()> {
    let _ = init_default_tracing();
    let mut args = std::env::args().skip(1);
    let (Some(kind), Some(input)) = (args.next(), args.next()) else {
        bail!("usage: miniplot-render <kind> <input.csv|payload.txt> [output] [bins]");
    };
    let kind = ChartKind::from_name(&kind).with_context(|| format!("unknown chart kind '{kind}'"))?;
    let input = PathBuf::from(input);
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| default_output(kind));
    let params = match args.next() {
        Some(b) => ChartParams::bins(b.trim().parse().with_context(|| format!("invalid bin count '{b}'"))?),
        None => ChartParams::default(),
    };

    let decoded = if is_csv(&input) {
        input::load_csv(kind, &input).with_context(|| format!("failed to load CSV '{}'", input.display()))?
    } else {
        SeriesDecoder::for_kind(kind).decode_file(&input)?
    };
    let spec = ChartSpec::build(kind, decoded, params)?;
    info!(kind = kind.slug(), observations = spec.len(), "loaded chart input");

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let opts = MiniplotConfig::from_env().render;
    Chart::new(spec).render_to_file(&opts, &output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// target/out/miniplot_<kind>.png
fn default_output(kind: ChartKind) -> PathBuf {
    Path::new("target/out").join(format!("miniplot_{}.png", kind.slug()))
}
