// File: crates/miniplot-render/src/input.rs
// Summary: CSV loading; first column is X (or histogram data), second column is Y.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use miniplot_core::{ChartKind, DecodedSeries, Series};
use tracing::debug;

pub fn load_csv(kind: ChartKind, path: &Path) -> Result<DecodedSeries> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let title = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
    read_csv(kind, title, file)
}

/// Header row names the columns and is otherwise ignored. A row is read as one
/// observation: rows with every used cell blank are skipped, otherwise blank or
/// missing cells stay in place as empty labels and fail validation.
pub fn read_csv<R: Read>(kind: ChartKind, title: String, reader: R) -> Result<DecodedSeries> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let wanted = if kind == ChartKind::Histogram { 1 } else { 2 };
    if headers.len() < wanted {
        bail!("{} chart needs {wanted} column(s), found {}", kind.slug(), headers.len());
    }
    debug!(?headers, "csv headers");

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); wanted];
    for rec in rdr.records() {
        let rec = rec?;
        let cells: Vec<&str> = (0..wanted).map(|i| rec.get(i).unwrap_or("")).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        for (col, cell) in columns.iter_mut().zip(cells) {
            col.push(cell.to_string());
        }
    }
    let series = columns.iter().map(|c| Series::from_tokens(c)).collect();
    Ok(DecodedSeries::new(title, series))
}
