// File: crates/miniplot-core/src/payload.rs
// Summary: Writer side of the payload interchange: text encoding and call-scoped temporary files.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::kind::ChartKind;
use crate::present::artifact_file_name;
use crate::series::{format_number, Series};

/// Commas and line breaks would change the payload structure; they become spaces.
fn sanitize(token: &str) -> String {
    token.replace([',', '\n', '\r'], " ")
}

fn join<I: IntoIterator<Item = String>>(tokens: I) -> String {
    tokens.into_iter().collect::<Vec<_>>().join(",")
}

/// Title line, one line per series, then the optional integer parameter.
///
/// A series holding one empty label writes a blank line, which decodes as an
/// empty series: the format cannot tell the two apart. Two or more empty labels
/// survive (`","`).
pub fn encode_series(title: &str, series: &[Series], param: Option<i64>) -> String {
    let mut out = title.replace(['\n', '\r'], " ");
    for s in series {
        out.push('\n');
        out.push_str(&join(s.values().iter().map(|v| sanitize(&v.to_string()))));
    }
    if let Some(p) = param {
        out.push('\n');
        out.push_str(&p.to_string());
    }
    out.push('\n');
    out
}

/// Payload for bar, line, scatter and area charts.
pub fn encode_xy<S: AsRef<str>>(title: &str, x: &[S], y: &[f64]) -> String {
    encode_series(title, &[Series::from_tokens(x), Series::from_numbers(y)], None)
}

/// Histogram payload: data line and bin count line.
pub fn encode_histogram(title: &str, data: &[f64], bins: i64) -> String {
    let mut out = title.replace(['\n', '\r'], " ");
    out.push('\n');
    out.push_str(&join(data.iter().map(|&v| format_number(v))));
    out.push('\n');
    out.push_str(&bins.to_string());
    out.push('\n');
    out
}

/// A payload file that exists for one call; removed on drop, including early returns.
#[derive(Debug)]
pub struct ScopedPayloadFile {
    path: PathBuf,
}

impl ScopedPayloadFile {
    pub fn create(dir: &Path, kind: ChartKind, contents: &str) -> io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        // Own the path before writing so a failed write still cleans up.
        let guard = Self { path: dir.join(artifact_file_name(kind, "txt")) };
        let mut file = File::create(&guard.path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        debug!(path = %guard.path.display(), bytes = contents.len(), "payload file written");
        Ok(guard)
    }

    pub fn in_temp_dir(kind: ChartKind, contents: &str) -> io::Result<Self> {
        Self::create(&std::env::temp_dir(), kind, contents)
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl Drop for ScopedPayloadFile {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %err, "failed to remove payload file");
            }
        }
    }
}
