// File: crates/miniplot-core/tests/dispatch.rs
// Purpose: Boundary behavior: status texts, not-loaded short circuit, one-time backend init, presenter modes.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use miniplot_core::chart::RenderOptions;
use miniplot_core::engine::Scene;
use miniplot_core::{
    BackendRegistry, ChartKind, Dispatcher, KindSet, Outcome, PresentMode, Presenter, RenderBackend, RenderError,
    SkiaBackend,
};

#[derive(Default)]
struct Calls {
    inits: AtomicUsize,
    rasters: AtomicUsize,
}

/// Skia backend that counts what the dispatcher asks of it.
struct CountingBackend {
    calls: Arc<Calls>,
    inner: SkiaBackend,
    fail_init: bool,
}

impl RenderBackend for CountingBackend {
    fn name(&self) -> &'static str { "counting" }

    fn initialize(&self) -> Result<(), RenderError> {
        self.calls.inits.fetch_add(1, Ordering::SeqCst);
        if self.fail_init {
            return Err(RenderError::BackendUnavailable("no surface".into()));
        }
        self.inner.initialize()
    }

    fn supports(&self, kind: ChartKind) -> bool { self.inner.supports(kind) }

    fn rasterize(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        self.calls.rasters.fetch_add(1, Ordering::SeqCst);
        self.inner.rasterize(scene, opts)
    }
}

fn counting(kinds: KindSet, fail_init: bool, mode: PresentMode) -> (Dispatcher, Arc<Calls>) {
    let calls = Arc::new(Calls::default());
    let backend = CountingBackend { calls: calls.clone(), inner: SkiaBackend::with_kinds(kinds), fail_init };
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let d = Dispatcher::new(BackendRegistry::new(Arc::new(backend)), opts, Presenter::new(mode));
    (d, calls)
}

fn memory() -> Dispatcher {
    counting(KindSet::all(), false, PresentMode::Memory).0
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("miniplot_dispatch_{}_{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn files_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|it| it.count()).unwrap_or(0)
}

#[test]
fn memory_mode_reports_size() {
    let d = memory();
    let msg = d.bar_chart(&["A", "B", "C"], &[30.0, 50.0, 80.0], "Sales");
    assert!(msg.starts_with("bar chart rendered ("), "{msg}");
    assert!(msg.ends_with(" bytes, 800x600 png)"), "{msg}");

    let artifact = d.presenter().take_last().expect("artifact kept");
    assert_eq!(artifact.kind, ChartKind::Bar);
    assert_eq!(artifact.title, "Sales");
    assert!(artifact.bytes.starts_with(&[137, 80, 78, 71]));
    assert_eq!(msg, format!("bar chart rendered ({})", artifact.describe()));
}

#[test]
fn every_kind_renders() {
    let d = memory();
    assert!(d.line_chart(&["1", "2", "3"], &[1.0, 4.0, 2.0], "L").starts_with("line chart rendered"));
    assert!(d.scatter_chart(&[1.0, 2.0], &[3.0, 4.0], "S").starts_with("scatter chart rendered"));
    assert!(d.area_chart(&["a", "b"], &[3.0, 4.0], "").starts_with("area chart rendered"));
    assert!(d.histogram_chart(&[1.0, 2.0, 2.0, 3.0, 4.0], 2, "H").starts_with("histogram chart rendered"));
}

#[test]
fn missing_kind_is_not_loaded_without_side_effects() {
    let dir = scratch_dir("not_loaded");
    let (d, calls) = counting(
        KindSet::all().without(ChartKind::Histogram),
        false,
        PresentMode::File { dir: dir.clone() },
    );
    let msg = d.histogram_chart(&[1.0, 2.0, 3.0], 2, "H");
    assert_eq!(msg, "Histogram chart function not loaded");
    // Not even a malformed payload gets decoded
    let msg = d.dispatch(ChartKind::Histogram, "");
    assert_eq!(msg.outcome, Outcome::NotLoaded);
    assert_eq!(calls.rasters.load(Ordering::SeqCst), 0);
    assert_eq!(files_in(&dir), 0);
    assert!(!d.is_available(ChartKind::Histogram));
    assert!(d.is_available(ChartKind::Bar));
}

#[test]
fn failed_init_disables_every_kind_and_is_not_retried() {
    let (d, calls) = counting(KindSet::all(), true, PresentMode::Memory);
    for kind in ChartKind::ALL {
        let msg = d.dispatch(kind, "t\n1,2\n3,4\n");
        assert_eq!(msg.text(), format!("{} chart function not loaded", kind.display_name()));
    }
    assert_eq!(calls.inits.load(Ordering::SeqCst), 1);

    let d = Dispatcher::new(BackendRegistry::unavailable("disabled"), RenderOptions::default(), Presenter::new(PresentMode::Memory));
    assert_eq!(d.bar_chart(&["A"], &[1.0], "t"), "Bar chart function not loaded");
}

#[test]
fn backend_initializes_once() {
    let (d, calls) = counting(KindSet::all(), false, PresentMode::Memory);
    assert!(!d.registry().is_initialized());
    for i in 0..5 {
        d.bar_chart(&["A", "B"], &[1.0, i as f64], "t");
    }
    d.dispatch(ChartKind::Line, "t\n1,2\n3,4\n");
    assert!(d.registry().is_initialized());
    assert_eq!(calls.inits.load(Ordering::SeqCst), 1);
    assert_eq!(calls.rasters.load(Ordering::SeqCst), 6);
}

#[test]
fn length_mismatch_fails_before_render() {
    let (d, calls) = counting(KindSet::all(), false, PresentMode::Memory);
    let msg = d.bar_chart(&["A", "B"], &[1.0], "t");
    assert_eq!(msg, "bar chart failed: length mismatch: x has 2 values, y has 1");
    assert_eq!(calls.rasters.load(Ordering::SeqCst), 0);
    assert!(d.presenter().take_last().is_none());
}

#[test]
fn decode_failures_become_status_text() {
    let d = memory();
    let msg = d.dispatch(ChartKind::Bar, "");
    assert_eq!(msg.text(), "bar chart failed: malformed payload: empty payload: missing title line");
    assert_eq!(msg.outcome, Outcome::Failure);

    let missing = std::env::temp_dir().join("miniplot_dispatch_no_such_payload.txt");
    let msg = d.dispatch_file(ChartKind::Histogram, &missing);
    assert!(msg.text().starts_with("histogram chart failed: failed to read payload"), "{msg}");

    let msg = d.dispatch(ChartKind::Scatter, "t\n1,x\n1,2\n");
    assert_eq!(msg.text(), "scatter chart failed: non-numeric value \"x\" in x at position 1");
}

#[test]
fn payload_text_dispatch() {
    let d = memory();
    let msg = d.dispatch(ChartKind::Histogram, "H\n1,2,2,3,4\n2\n");
    assert!(msg.is_success(), "{msg}");
    let msg = d.dispatch(ChartKind::Scatter, "\n1,2,3\n4,5,6\n");
    assert!(msg.is_success(), "{msg}");
}

#[test]
fn file_mode_writes_unique_files() {
    let dir = scratch_dir("file_mode");
    let (d, _) = counting(KindSet::all(), false, PresentMode::File { dir: dir.clone() });
    let first = d.line_chart(&["1", "2"], &[1.0, 2.0], "L");
    let second = d.line_chart(&["1", "2"], &[1.0, 2.0], "L");
    assert_ne!(first, second);
    let path = PathBuf::from(first.strip_prefix("line chart written to ").expect("file message"));
    let name = path.file_name().and_then(|n| n.to_str()).unwrap();
    assert!(name.starts_with(&format!("miniplot_line_{}_", std::process::id())), "{name}");
    assert!(name.ends_with(".png"));
    assert!(std::fs::read(&path).unwrap().starts_with(&[137, 80, 78, 71]));
    assert_eq!(files_in(&dir), 2);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn viewer_launch_failure_names_the_env_var() {
    let dir = scratch_dir("viewer_fail");
    let (d, _) = counting(
        KindSet::all(),
        false,
        PresentMode::Viewer {
            program: Some(PathBuf::from("/definitely/not/a/miniplot/viewer")),
            blocking: false,
            dir: dir.clone(),
        },
    );
    let msg = d.bar_chart(&["A"], &[1.0], "t");
    assert!(msg.starts_with("Failed to launch bar viewer: "), "{msg}");
    assert!(msg.ends_with(". Set MINIPLOT_VIEWER_PATH environment variable."), "{msg}");
    assert_eq!(files_in(&dir), 0, "image should be removed after a failed launch");
    assert_eq!(d.presenter().active_sessions(), 0);
}

#[cfg(unix)]
#[test]
fn blocking_viewer_waits_and_cleans_up() {
    let dir = scratch_dir("viewer_blocking");
    let (d, _) = counting(
        KindSet::all(),
        false,
        PresentMode::Viewer { program: Some(PathBuf::from("true")), blocking: true, dir: dir.clone() },
    );
    assert_eq!(d.scatter_chart(&[1.0], &[2.0], "t"), "scatter chart viewer closed");
    assert_eq!(files_in(&dir), 0);
}

#[cfg(unix)]
#[test]
fn viewer_sessions_are_reaped_on_close() {
    let dir = scratch_dir("viewer_sessions");
    let presenter_mode = PresentMode::Viewer { program: Some(PathBuf::from("true")), blocking: false, dir: dir.clone() };
    let (d, _) = counting(KindSet::all(), false, presenter_mode);
    assert_eq!(d.area_chart(&["a", "b"], &[1.0, 2.0], "t"), "area chart viewer launched");
    assert_eq!(d.presenter().active_sessions(), 1);
    assert_eq!(files_in(&dir), 1);

    for _ in 0..100 {
        d.presenter().close();
        if d.presenter().active_sessions() == 0 {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(20));
    }
    assert_eq!(d.presenter().active_sessions(), 0);
    assert_eq!(files_in(&dir), 0);
}

#[cfg(unix)]
#[test]
fn finished_viewers_are_reaped_by_the_next_call() {
    let dir = scratch_dir("viewer_reap_on_present");
    let mode = PresentMode::Viewer { program: Some(PathBuf::from("true")), blocking: false, dir: dir.clone() };
    let (d, _) = counting(KindSet::all(), false, mode);
    for i in 0..5 {
        assert_eq!(d.line_chart(&["a", "b"], &[1.0, i as f64], "t"), "line chart viewer launched");
        // `true` exits immediately; give it time before the next launch
        std::thread::sleep(std::time::Duration::from_millis(250));
    }
    // Only the most recent launch (and at worst one straggler) is still tracked
    assert!(d.presenter().active_sessions() <= 2, "{} sessions tracked", d.presenter().active_sessions());
    assert!(files_in(&dir) <= 2, "{} images left", files_in(&dir));
    d.presenter().close();
}
