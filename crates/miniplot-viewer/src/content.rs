// File: crates/miniplot-viewer/src/content.rs
// Summary: What the window shows: a decoded image, or a chart re-rendered at window size.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use miniplot_core::{Chart, ChartKind, ChartParams, ChartSpec, DecodedSeries, RenderOptions, Series, SeriesDecoder};

pub enum Content {
    /// RGBA8 pixels shown scaled to fit.
    Image { pixels: Vec<u8>, width: u32, height: u32 },
    /// Laid out again whenever the window size changes.
    Chart(Chart),
}

pub struct Launch {
    pub content: Content,
    pub kind: Option<ChartKind>,
    pub title: String,
}

impl Launch {
    /// "Miniplot Bar - Sales"
    pub fn window_title(&self) -> String {
        let kind = self.kind.map_or("Chart", ChartKind::display_name);
        format!("Miniplot {kind} - {}", self.title)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp"))
}

/// `[]` → sample chart; `<image> [kind] [title]`; `<payload> <kind>`.
pub fn from_args(args: &[String]) -> Result<Launch> {
    let Some(first) = args.first() else {
        return sample();
    };
    let path = Path::new(first);
    let kind = args
        .get(1)
        .map(|k| ChartKind::from_name(k).ok_or_else(|| anyhow!("unknown chart kind '{k}'")))
        .transpose()?;

    if is_image(path) {
        let img = image::open(path)
            .with_context(|| format!("failed to open image '{}'", path.display()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        let title = args.get(2).cloned().unwrap_or_else(|| {
            path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        });
        return Ok(Launch { content: Content::Image { pixels: img.into_raw(), width, height }, kind, title });
    }

    let kind = kind.ok_or_else(|| anyhow!("a chart kind is required to render payload '{}'", path.display()))?;
    let decoded = SeriesDecoder::for_kind(kind).decode_file(path)?;
    let spec = ChartSpec::build(kind, decoded, ChartParams::default())
        .with_context(|| format!("invalid {} payload '{}'", kind.slug(), path.display()))?;
    let title = spec.title().to_string();
    Ok(Launch { content: Content::Chart(Chart::new(spec)), kind: Some(kind), title })
}

fn sample() -> Result<Launch> {
    let decoded = DecodedSeries::new(
        "Sample",
        vec![Series::from_tokens(&["A", "B", "C"]), Series::from_numbers(&[30.0, 50.0, 80.0])],
    );
    let spec = ChartSpec::build(ChartKind::Bar, decoded, ChartParams::default())?;
    Ok(Launch { content: Content::Chart(Chart::new(spec)), kind: Some(ChartKind::Bar), title: "Sample".into() })
}

/// Preferred initial window size: the image size, or the configured canvas.
pub fn initial_size(content: &Content, opts: &RenderOptions) -> (u32, u32) {
    match content {
        Content::Image { width, height, .. } => (*width, *height),
        Content::Chart(_) => (opts.width.max(1) as u32, opts.height.max(1) as u32),
    }
}

/// Fill a softbuffer frame (0RGB per pixel) of `fw × fh`.
pub fn paint(content: &Content, opts: &RenderOptions, frame: &mut [u32], fw: u32, fh: u32) -> Result<()> {
    match content {
        Content::Chart(chart) => {
            let mut opts = opts.clone();
            opts.width = fw as i32;
            opts.height = fh as i32;
            let (rgba, w, h, _) = chart.render_to_rgba8(&opts)?;
            blit_scaled(frame, fw, fh, &rgba, w, h, 0);
        }
        Content::Image { pixels, width, height } => {
            let bg = opts.theme.background;
            let fill = (u32::from(bg.r()) << 16) | (u32::from(bg.g()) << 8) | u32::from(bg.b());
            blit_scaled(frame, fw, fh, pixels, *width, *height, fill);
        }
    }
    Ok(())
}

/// Nearest-neighbour fit of an RGBA image into the frame, centered, aspect kept.
fn blit_scaled(frame: &mut [u32], fw: u32, fh: u32, rgba: &[u8], iw: u32, ih: u32, fill: u32) {
    frame.fill(fill);
    if iw == 0 || ih == 0 || fw == 0 || fh == 0 {
        return;
    }
    let scale = (fw as f32 / iw as f32).min(fh as f32 / ih as f32);
    let (dw, dh) = (((iw as f32 * scale) as u32).max(1), ((ih as f32 * scale) as u32).max(1));
    let (ox, oy) = ((fw - dw.min(fw)) / 2, (fh - dh.min(fh)) / 2);
    for y in 0..dh.min(fh) {
        let sy = ((y as f32 / scale) as u32).min(ih - 1);
        for x in 0..dw.min(fw) {
            let sx = ((x as f32 / scale) as u32).min(iw - 1);
            let si = ((sy * iw + sx) * 4) as usize;
            let Some(px) = rgba.get(si..si + 4) else { continue };
            let di = ((oy + y) * fw + ox + x) as usize;
            if let Some(slot) = frame.get_mut(di) {
                *slot = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
            }
        }
    }
}
