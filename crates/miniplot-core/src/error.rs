// File: crates/miniplot-core/src/error.rs
// Summary: Error taxonomy for each pipeline stage; all of it ends up as status text at the boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::kind::ChartKind;

pub type MiniplotResult<T> = Result<T, MiniplotError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    MalformedPayload(&'static str),

    #[error("failed to read payload {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("length mismatch: x has {x} values, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("empty series: {0}")]
    EmptySeries(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("non-numeric value {token:?} in {series} at position {index}")]
    NonNumeric {
        series: &'static str,
        index: usize,
        token: String,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart kind {0} is not supported by the backend")]
    UnsupportedKind(ChartKind),

    #[error("render backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("image encoding failed: {0}")]
    Encode(&'static str),
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to launch {slug} viewer: {source}. Set MINIPLOT_VIEWER_PATH environment variable.", slug = .kind.slug())]
    Launch {
        kind: ChartKind,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum MiniplotError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Present(#[from] PresentError),
}
