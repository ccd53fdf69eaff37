// File: crates/miniplot-core/src/dispatch.rs
// Summary: Boundary entry points: one call in, one status string out (decode → validate → render → present).

use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, info_span};

use crate::backend::{BackendRegistry, RenderBackend};
use crate::chart::{RenderArtifact, RenderOptions};
use crate::config::MiniplotConfig;
use crate::decode::{DecodedSeries, SeriesDecoder};
use crate::engine::RenderEngine;
use crate::error::{DecodeError, MiniplotResult};
use crate::kind::ChartKind;
use crate::message::ResultMessage;
use crate::present::Presenter;
use crate::series::Series;
use crate::spec::{ChartParams, ChartSpec};

pub struct Dispatcher {
    registry: BackendRegistry,
    engine: RenderEngine,
    presenter: Presenter,
}

impl Dispatcher {
    pub fn new(registry: BackendRegistry, options: RenderOptions, presenter: Presenter) -> Self {
        Self { registry, engine: RenderEngine::new(options), presenter }
    }

    /// Skia backend with the configured render options and presentation mode.
    pub fn from_config(config: MiniplotConfig) -> Self {
        Self::new(BackendRegistry::skia(), config.render, Presenter::new(config.present))
    }

    /// Process-wide dispatcher, built from the environment on first use.
    pub fn global() -> &'static Dispatcher {
        static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::from_config(MiniplotConfig::from_env()))
    }

    pub fn registry(&self) -> &BackendRegistry { &self.registry }

    pub fn presenter(&self) -> &Presenter { &self.presenter }

    pub fn options(&self) -> &RenderOptions { self.engine.options() }

    pub fn is_available(&self, kind: ChartKind) -> bool {
        self.registry.backend_for(kind).is_some()
    }

    /// Decode a text payload and run the chart call.
    pub fn dispatch(&self, kind: ChartKind, payload: &str) -> ResultMessage {
        self.run(kind, ChartParams::default(), || SeriesDecoder::for_kind(kind).decode(payload))
    }

    /// Same as [`Dispatcher::dispatch`], reading the payload from `path`.
    pub fn dispatch_file(&self, kind: ChartKind, path: &Path) -> ResultMessage {
        self.run(kind, ChartParams::default(), || SeriesDecoder::for_kind(kind).decode_file(path))
    }

    /// Run a chart call on already-typed series.
    pub fn dispatch_decoded(&self, kind: ChartKind, decoded: DecodedSeries, params: ChartParams) -> ResultMessage {
        self.run(kind, params, || Ok(decoded))
    }

    fn run<F>(&self, kind: ChartKind, params: ChartParams, decode: F) -> ResultMessage
    where
        F: FnOnce() -> Result<DecodedSeries, DecodeError>,
    {
        let _span = info_span!("chart_call", kind = kind.slug()).entered();
        let Some(backend) = self.registry.backend_for(kind) else {
            debug!("backend not loaded for kind");
            return ResultMessage::not_loaded(kind);
        };
        let message = match self.render(kind, params, decode, backend) {
            Ok(artifact) => self.presenter.present(artifact),
            Err(err) => ResultMessage::chart_failed(kind, err),
        };
        debug!(outcome = ?message.outcome, text = message.text(), "chart call finished");
        message
    }

    fn render<F>(&self, kind: ChartKind, params: ChartParams, decode: F, backend: &dyn RenderBackend) -> MiniplotResult<RenderArtifact>
    where
        F: FnOnce() -> Result<DecodedSeries, DecodeError>,
    {
        let decoded = decode()?;
        let spec = ChartSpec::build(kind, decoded, params)?;
        Ok(self.engine.render(&spec, backend)?)
    }

    pub fn bar_chart<S: AsRef<str>>(&self, x: &[S], y: &[f64], title: &str) -> String {
        self.xy(ChartKind::Bar, Series::from_tokens(x), y, title)
    }

    pub fn line_chart<S: AsRef<str>>(&self, x: &[S], y: &[f64], title: &str) -> String {
        self.xy(ChartKind::Line, Series::from_tokens(x), y, title)
    }

    pub fn scatter_chart(&self, x: &[f64], y: &[f64], title: &str) -> String {
        self.xy(ChartKind::Scatter, Series::from_numbers(x), y, title)
    }

    pub fn area_chart<S: AsRef<str>>(&self, x: &[S], y: &[f64], title: &str) -> String {
        self.xy(ChartKind::Area, Series::from_tokens(x), y, title)
    }

    pub fn histogram_chart(&self, data: &[f64], bins: i64, title: &str) -> String {
        let decoded = DecodedSeries::new(title, vec![Series::from_numbers(data)]);
        self.dispatch_decoded(ChartKind::Histogram, decoded, ChartParams::bins(bins)).into()
    }

    fn xy(&self, kind: ChartKind, x: Series, y: &[f64], title: &str) -> String {
        let decoded = DecodedSeries::new(title, vec![x, Series::from_numbers(y)]);
        self.dispatch_decoded(kind, decoded, ChartParams::default()).into()
    }
}
