// File: crates/miniplot-core/src/types.rs
// Summary: Canvas defaults and plot insets.

/// Default canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 600;
/// Accepted canvas edge length, inclusive.
pub const MIN_EDGE: i32 = 64;
pub const MAX_EDGE: i32 = 8192;

/// Height reserved above the plot rectangle for the title.
pub const TITLE_BAND: u32 = 36;

pub const TITLE_SIZE: f32 = 18.0;
pub const LABEL_SIZE: f32 = 12.0;

/// Margins around the plot rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
