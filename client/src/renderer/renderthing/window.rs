use std::sync::Arc;

use anyhow::Context;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use tracing::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
    init_error: Option<anyhow::Error>,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = Sleeper::new(config.target_fps);

        Self {
            config,
            resumed_window: None,
            sleeper,
            init_error: None,
        }
    }

    pub fn take_init_error(&mut self) -> Option<anyhow::Error> {
        self.init_error.take()
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width, self.config.height);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .context("Creating window")?
        });

        // The pixel buffer keeps the configured display size; pixels scales it to the surface.
        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(self.config.width, self.config.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        Ok(ResumedWindow { window, pixels })
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(resumed_window) => {
                info!(
                    width = self.config.width,
                    height = self.config.height,
                    "window ready"
                );
                resumed_window.window.request_redraw();
                self.resumed_window = Some(resumed_window);
            }
            Err(err) => {
                error!("{err:#}");
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let next_frame =
                    RenderFrame::new(self.config.width, self.config.height, pixels.frame_mut());

                (self.config.draw_callback)(next_frame);

                // A frame that fails to present is dropped; the board has already moved on.
                if let Err(err) = pixels.render() {
                    warn!("skipping frame: {err}");
                }

                self.sleeper.sleep();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Err(err) = pixels.resize_surface(width, height) {
                    warn!("resizing surface to {width}x{height}: {err}");
                }
                window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                info!("close requested");
                event_loop.exit();
            }
            _ => {}
        }
    }
}
