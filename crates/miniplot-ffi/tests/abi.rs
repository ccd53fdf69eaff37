// File: crates/miniplot-ffi/tests/abi.rs
// Purpose: Exercise the exported C functions the way a host shim calls them.

use std::ffi::{c_char, CStr, CString};
use std::sync::Once;

use miniplot_core::payload::{encode_histogram, encode_xy, ScopedPayloadFile};
use miniplot_core::ChartKind;
use miniplot_ffi::*;

static SETUP: Once = Once::new();

/// Keep artifacts in memory so no viewer is launched.
fn setup() {
    SETUP.call_once(|| {
        std::env::set_var("MINIPLOT_PRESENT", "memory");
        std::env::set_var("MINIPLOT_LABELS", "0");
        miniplot_init();
        miniplot_init();
    });
}

fn take(ptr: *mut c_char) -> String {
    assert!(!ptr.is_null());
    let text = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    unsafe { miniplot_free_string(ptr) };
    text
}

fn c_path(file: &ScopedPayloadFile) -> CString {
    CString::new(file.path().to_str().unwrap()).unwrap()
}

#[test]
fn bar_chart_from_payload_file() {
    setup();
    let file = ScopedPayloadFile::in_temp_dir(ChartKind::Bar, &encode_xy("Sales", &["A", "B", "C"], &[30.0, 50.0, 80.0])).unwrap();
    let text = take(unsafe { miniplot_bar_chart(c_path(&file).as_ptr()) });
    assert!(text.starts_with("bar chart rendered ("), "{text}");
}

#[test]
fn histogram_chart_from_payload_file() {
    setup();
    let file = ScopedPayloadFile::in_temp_dir(ChartKind::Histogram, &encode_histogram("H", &[1.0, 2.0, 2.0, 3.0, 4.0], 2)).unwrap();
    let text = take(unsafe { miniplot_histogram_chart(c_path(&file).as_ptr()) });
    assert!(text.starts_with("histogram chart rendered ("), "{text}");
}

#[test]
fn validation_failure_text() {
    setup();
    let file = ScopedPayloadFile::in_temp_dir(ChartKind::Line, "t\n1,2,3\n4,5\n").unwrap();
    let text = take(unsafe { miniplot_line_chart(c_path(&file).as_ptr()) });
    assert_eq!(text, "line chart failed: length mismatch: x has 3 values, y has 2");
}

#[test]
fn bad_paths_are_reported() {
    setup();
    let text = take(unsafe { miniplot_scatter_chart(std::ptr::null()) });
    assert_eq!(text, "scatter chart failed: null payload path");

    let invalid = [0xffu8, 0xfe, 0x00];
    let text = take(unsafe { miniplot_area_chart(invalid.as_ptr().cast()) });
    assert_eq!(text, "area chart failed: payload path is not valid UTF-8");

    let missing = CString::new("/no/such/miniplot/payload.txt").unwrap();
    let text = take(unsafe { miniplot_area_chart(missing.as_ptr()) });
    assert!(text.starts_with("area chart failed: failed to read payload"), "{text}");
}

#[test]
fn free_and_version() {
    unsafe { miniplot_free_string(std::ptr::null_mut()) };
    let version = unsafe { CStr::from_ptr(miniplot_version()) }.to_str().unwrap();
    assert_eq!(version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn close_is_safe_between_calls() {
    setup();
    miniplot_close();
    let file = ScopedPayloadFile::in_temp_dir(ChartKind::Line, &encode_xy("L", &["1", "2"], &[3.0, 4.0])).unwrap();
    let text = take(unsafe { miniplot_line_chart(c_path(&file).as_ptr()) });
    assert!(text.starts_with("line chart rendered ("), "{text}");
    miniplot_close();
    miniplot_close();
}
