// File: crates/miniplot-viewer/src/main.rs
// Summary: Viewer window: blits a chart (rendered through miniplot-core) into a softbuffer surface.
// Usage:
//   miniplot-viewer                          sample bar chart
//   miniplot-viewer <image.png> [kind] [title]
//   miniplot-viewer <payload.txt> <kind>     renders the payload, re-rendering on resize

mod content;

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use miniplot_core::telemetry::init_default_tracing;
use miniplot_core::MiniplotConfig;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let _ = init_default_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let launch = content::from_args(&args)?;
    let opts = MiniplotConfig::from_env().render;
    let (init_w, init_h) = content::initial_size(&launch.content, &opts);
    info!(title = %launch.window_title(), width = init_w, height = init_h, "opening viewer");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(launch.window_title())
        .with_inner_size(LogicalSize::new(init_w as f64, init_h as f64))
        .build(&event_loop)
        .context("failed to create window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput { virtual_keycode: Some(VirtualKeyCode::Escape), state: ElementState::Pressed, .. },
                    ..
                } => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(err) = surface.resize(w, h) {
                    warn!(error = %err, "surface resize failed");
                    return;
                }
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(err) => {
                        warn!(error = %err, "no frame buffer");
                        return;
                    }
                };
                if let Err(err) = content::paint(&launch.content, &opts, &mut frame, w.get(), h.get()) {
                    warn!(error = %err, "render failed");
                }
                if let Err(err) = frame.present() {
                    warn!(error = %err, "present failed");
                }
            }
            _ => {}
        }
    })
}
