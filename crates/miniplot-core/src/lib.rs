// File: crates/miniplot-core/src/lib.rs
// Summary: Core library entry point; payload decoding, validation, layout, Skia rendering and presentation.

pub mod axis;
pub mod backend;
pub mod chart;
pub mod config;
pub mod decode;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod histogram;
pub mod kind;
pub mod message;
pub mod payload;
pub mod present;
pub mod scale;
pub mod series;
pub mod spec;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use backend::{BackendRegistry, BackendState, RenderBackend, SkiaBackend};
pub use chart::{Chart, ImageFormat, RenderArtifact, RenderOptions};
pub use config::MiniplotConfig;
pub use decode::{DecodedSeries, SeriesDecoder};
pub use dispatch::Dispatcher;
pub use engine::{RenderEngine, Scene};
pub use error::{DecodeError, MiniplotError, MiniplotResult, PresentError, RenderError, ValidationError};
pub use histogram::Histogram;
pub use kind::{ChartKind, KindSet};
pub use message::{Outcome, ResultMessage};
pub use present::{PresentMode, Presenter};
pub use series::{Series, Value};
pub use spec::{ChartParams, ChartSpec};
pub use theme::Theme;
pub use text::TextShaper;
