mod renderthing;

use tracing::{debug, warn};

use renderthing::{Renderer, frame::RenderFrame, window::RendererWindowConfig};

use crate::simulation::Simulation;

const PROGRESS_LOG_INTERVAL: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
}

/// Opens the window and runs the frame loop until the window is closed.
///
/// Fails only if the event loop, window or pixel surface can't be set up.
pub fn run(mut simulation: Simulation, config: DisplayConfig) -> anyhow::Result<()> {
    let renderer = Renderer::new(RendererWindowConfig {
        title: config.title,
        width: config.width,
        height: config.height,
        target_fps: config.target_fps,
        draw_callback: Box::new(move |mut frame: RenderFrame<'_>| {
            let framebuffer = simulation.advance();
            if !frame.blit(framebuffer) {
                warn!("framebuffer doesn't match the surface size");
            }

            let generation = simulation.game.generation;
            if generation % PROGRESS_LOG_INTERVAL == 0 {
                debug!(
                    generation,
                    alive = simulation.game.board().alive_count(),
                    "progress"
                );
            }
        }),
    })?;

    renderer.run()
}
