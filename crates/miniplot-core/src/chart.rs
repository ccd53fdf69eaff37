// File: crates/miniplot-core/src/chart.rs
// Summary: Render options, artifacts, and the Skia pipeline that turns a Scene into PNG, RGBA8 or SVG bytes.

use std::fmt;
use std::path::Path;

use skia_safe as skia;

use crate::engine::{RenderEngine, Scene};
use crate::error::{MiniplotResult, PresentError, RenderError};
use crate::geometry::{PointF, Primitive};
use crate::kind::ChartKind;
use crate::spec::ChartSpec;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }

    /// Format implied by a file extension, PNG when unknown.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_name)
            .unwrap_or_default()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is painted (title, tick and value labels stay in the scene).
    pub draw_labels: bool,
    pub format: ImageFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            format: ImageFormat::Png,
        }
    }
}

/// Encoded output of one render call.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderArtifact {
    pub kind: ChartKind,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl RenderArtifact {
    pub fn len(&self) -> usize { self.bytes.len() }

    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    /// "1234 bytes, 800x600 png"
    pub fn describe(&self) -> String {
        format!("{} bytes, {}x{} {}", self.bytes.len(), self.width, self.height, self.format)
    }
}

/// Convenience wrapper: lay out and encode a validated spec without a backend registry.
pub struct Chart {
    pub spec: ChartSpec,
}

impl Chart {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }

    pub fn scene(&self, opts: &RenderOptions) -> Scene {
        RenderEngine::new(opts.clone()).layout(&self.spec)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        encode_png(&self.scene(opts), opts)
    }

    /// Returns (pixels, width, height, stride) with unpremultiplied RGBA rows.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        render_rgba8(&self.scene(opts), opts)
    }

    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        encode_svg(&self.scene(opts), opts)
    }

    /// Write to `path`; the extension picks PNG or SVG.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> MiniplotResult<()> {
        let path = path.as_ref();
        let bytes = match ImageFormat::for_path(path) {
            ImageFormat::Png => self.render_to_png_bytes(opts)?,
            ImageFormat::Svg => self.render_to_svg_bytes(opts)?,
        };
        let io_err = |source| PresentError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, bytes).map_err(io_err)?;
        Ok(())
    }
}

/// Encode in the format `opts` asks for.
pub fn rasterize(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    match opts.format {
        ImageFormat::Png => encode_png(scene, opts),
        ImageFormat::Svg => encode_svg(scene, opts),
    }
}

fn raster_surface(width: i32, height: i32) -> Result<skia::Surface, RenderError> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| RenderError::BackendUnavailable(format!("failed to create {width}x{height} raster surface")))
}

pub fn encode_png(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut surface = raster_surface(scene.width, scene.height)?;
    paint_scene(surface.canvas(), scene, opts);
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode("png"))?;
    Ok(data.as_bytes().to_vec())
}

pub fn render_rgba8(scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
    let mut surface = raster_surface(scene.width, scene.height)?;
    paint_scene(surface.canvas(), scene, opts);

    let (w, h) = (scene.width, scene.height);
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::Encode("rgba8 readback"));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

pub fn encode_svg(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let bounds = skia::Rect::from_wh(scene.width as f32, scene.height as f32);
    let canvas = skia::svg::Canvas::new(bounds, None);
    paint_scene(&canvas, scene, opts);
    let data = canvas.end();
    Ok(data.as_bytes().to_vec())
}

// ---- painting ---------------------------------------------------------------

impl From<PointF> for skia::Point {
    fn from(p: PointF) -> Self { skia::Point::new(p.x, p.y) }
}

fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    canvas.clear(opts.theme.background);
    let text = opts.draw_labels.then(TextShaper::new);
    for primitive in &scene.primitives {
        draw_primitive(canvas, primitive, &opts.theme, text.as_ref());
    }
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_primitive(canvas: &skia::Canvas, primitive: &Primitive, theme: &Theme, text: Option<&TextShaper>) {
    let color = theme.color(primitive.role());
    match primitive {
        Primitive::Line { from, to, width, .. } => {
            canvas.draw_line(*from, *to, &stroke(color, *width));
        }
        Primitive::Rect { rect, .. } => {
            let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom.max(rect.top + 1.0));
            canvas.draw_rect(r, &fill(color));
        }
        Primitive::Polyline { points, width, .. } => {
            if points.len() < 2 {
                return;
            }
            let mut path = skia::Path::new();
            path.move_to(points[0]);
            for p in &points[1..] {
                path.line_to(*p);
            }
            canvas.draw_path(&path, &stroke(color, *width));
        }
        Primitive::Polygon { points, .. } => {
            if points.len() < 3 {
                return;
            }
            let mut path = skia::Path::new();
            path.move_to(points[0]);
            for p in &points[1..] {
                path.line_to(*p);
            }
            path.close();
            canvas.draw_path(&path, &fill(color));
        }
        Primitive::Marker { center, radius, .. } => {
            canvas.draw_circle(*center, *radius, &fill(color));
        }
        Primitive::Text { content, anchor, size, align, role } => {
            if let Some(shaper) = text {
                shaper.draw(canvas, content, anchor.x, anchor.y, *size, color, *align, *role);
            }
        }
    }
}
