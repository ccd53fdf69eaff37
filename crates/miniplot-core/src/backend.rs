// File: crates/miniplot-core/src/backend.rs
// Summary: Pluggable rasterizer trait, the Skia backend, and a registry that initializes it once.

use std::sync::{Arc, OnceLock};

use skia_safe as skia;
use tracing::{info, warn};

use crate::chart::{self, RenderOptions};
use crate::engine::Scene;
use crate::error::RenderError;
use crate::kind::{ChartKind, KindSet};

/// A rasterizer. Lacking a kind is a normal state, checked through [`RenderBackend::supports`].
pub trait RenderBackend: Send + Sync {
    fn name(&self) -> &'static str;
    /// One-time setup; the registry never calls it twice.
    fn initialize(&self) -> Result<(), RenderError>;
    fn supports(&self, kind: ChartKind) -> bool;
    fn rasterize(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, RenderError>;
}

/// CPU raster / SVG backend built on Skia.
#[derive(Clone, Copy, Debug)]
pub struct SkiaBackend {
    kinds: KindSet,
}

impl SkiaBackend {
    pub fn new() -> Self {
        Self { kinds: KindSet::all() }
    }

    /// Restrict the backend to `kinds`; other kinds report "not loaded".
    pub fn with_kinds(kinds: KindSet) -> Self {
        Self { kinds }
    }
}

impl Default for SkiaBackend {
    fn default() -> Self { Self::new() }
}

impl RenderBackend for SkiaBackend {
    fn name(&self) -> &'static str { "skia" }

    fn initialize(&self) -> Result<(), RenderError> {
        skia::surfaces::raster_n32_premul((1, 1))
            .map(|_| ())
            .ok_or_else(|| RenderError::BackendUnavailable("skia raster surface probe failed".into()))
    }

    fn supports(&self, kind: ChartKind) -> bool {
        self.kinds.contains(kind)
    }

    fn rasterize(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        chart::rasterize(scene, opts)
    }
}

/// Stand-in when no backend could be configured; every initialization fails.
struct NullBackend {
    reason: String,
}

impl RenderBackend for NullBackend {
    fn name(&self) -> &'static str { "none" }

    fn initialize(&self) -> Result<(), RenderError> {
        Err(RenderError::BackendUnavailable(self.reason.clone()))
    }

    fn supports(&self, _kind: ChartKind) -> bool { false }

    fn rasterize(&self, _scene: &Scene, _opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::BackendUnavailable(self.reason.clone()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendState<'a> {
    Ready,
    Unavailable(&'a str),
}

/// Holds one backend and runs its initialization lazily, at most once.
/// A failed initialization is remembered for the registry's lifetime.
pub struct BackendRegistry {
    backend: Arc<dyn RenderBackend>,
    init: OnceLock<Result<(), String>>,
}

impl BackendRegistry {
    pub fn new(backend: Arc<dyn RenderBackend>) -> Self {
        Self { backend, init: OnceLock::new() }
    }

    pub fn skia() -> Self {
        Self::new(Arc::new(SkiaBackend::new()))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(Arc::new(NullBackend { reason: reason.into() }))
    }

    pub fn state(&self) -> BackendState<'_> {
        let outcome = self.init.get_or_init(|| {
            let name = self.backend.name();
            match self.backend.initialize() {
                Ok(()) => {
                    info!(backend = name, "render backend initialized");
                    Ok(())
                }
                Err(err) => {
                    warn!(backend = name, error = %err, "render backend unavailable");
                    Err(err.to_string())
                }
            }
        });
        match outcome {
            Ok(()) => BackendState::Ready,
            Err(reason) => BackendState::Unavailable(reason.as_str()),
        }
    }

    /// The backend, if it is initialized and supports `kind`.
    pub fn backend_for(&self, kind: ChartKind) -> Option<&dyn RenderBackend> {
        match self.state() {
            BackendState::Ready if self.backend.supports(kind) => Some(self.backend.as_ref()),
            _ => None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.init.get().is_some()
    }
}
