// File: crates/miniplot-ffi/src/lib.rs
// Summary: C ABI over the global dispatcher. Payload files in, owned status strings out.
//
// Every returned string (except `miniplot_version`) is owned by the caller and must be
// released with `miniplot_free_string`. No function unwinds across the boundary.

use std::any::Any;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::sync::Once;

use miniplot_core::telemetry::init_default_tracing;
use miniplot_core::{BackendState, ChartKind, Dispatcher, ResultMessage};
use tracing::{info, warn};

static INIT: Once = Once::new();
static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Install logging (with the `telemetry` feature) and initialize the render backend.
/// Safe to call any number of times.
#[no_mangle]
pub extern "C" fn miniplot_init() {
    let outcome = catch_unwind(|| {
        INIT.call_once(|| {
            let subscriber = init_default_tracing();
            match Dispatcher::global().registry().state() {
                BackendState::Ready => info!(subscriber, version = env!("CARGO_PKG_VERSION"), "miniplot loaded"),
                BackendState::Unavailable(reason) => warn!(subscriber, reason, "miniplot loaded without a render backend"),
            }
        })
    });
    if outcome.is_err() {
        warn!("miniplot initialization panicked");
    }
}

/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn miniplot_bar_chart(path: *const c_char) -> *mut c_char {
    chart_call(ChartKind::Bar, path)
}

/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn miniplot_line_chart(path: *const c_char) -> *mut c_char {
    chart_call(ChartKind::Line, path)
}

/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn miniplot_scatter_chart(path: *const c_char) -> *mut c_char {
    chart_call(ChartKind::Scatter, path)
}

/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn miniplot_histogram_chart(path: *const c_char) -> *mut c_char {
    chart_call(ChartKind::Histogram, path)
}

/// # Safety
/// `path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn miniplot_area_chart(path: *const c_char) -> *mut c_char {
    chart_call(ChartKind::Area, path)
}

/// Release a string returned by one of the chart functions. Null is ignored.
///
/// # Safety
/// `s` must come from this library and must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn miniplot_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Reap viewer windows that have been closed and delete their image files.
/// Hosts call this before unloading; chart calls also reap on their own.
#[no_mangle]
pub extern "C" fn miniplot_close() {
    if catch_unwind(|| Dispatcher::global().presenter().close()).is_err() {
        warn!("miniplot close panicked");
    }
}

/// Library version; static storage, do not free.
#[no_mangle]
pub extern "C" fn miniplot_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

unsafe fn chart_call(kind: ChartKind, path: *const c_char) -> *mut c_char {
    let path = if path.is_null() { None } else { Some(CStr::from_ptr(path)) };
    let message = catch_unwind(AssertUnwindSafe(|| dispatch_path(kind, path)))
        .unwrap_or_else(|payload| ResultMessage::chart_failed(kind, format!("panic: {}", panic_text(&*payload))));
    into_c_string(message.into())
}

fn dispatch_path(kind: ChartKind, path: Option<&CStr>) -> ResultMessage {
    let dispatcher = Dispatcher::global();
    if !dispatcher.is_available(kind) {
        return ResultMessage::not_loaded(kind);
    }
    let Some(path) = path else {
        return ResultMessage::chart_failed(kind, "null payload path");
    };
    match path.to_str() {
        Ok(p) => dispatcher.dispatch_file(kind, Path::new(p)),
        Err(_) => ResultMessage::chart_failed(kind, "payload path is not valid UTF-8"),
    }
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown")
}

/// Interior NULs would truncate the text on the C side; they are dropped.
fn into_c_string(text: String) -> *mut c_char {
    let mut bytes = text.into_bytes();
    bytes.retain(|&b| b != 0);
    CString::new(bytes).unwrap_or_default().into_raw()
}
