//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The line pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;

use tesseract4d_core::{LineRenderer, RenderFrame};
use tesseract4d_render::{
    pipeline::mat4_mul, perspective_matrix, LinePipeline, LineUniforms, OrbitCamera,
    RenderContext, RenderError,
};

use crate::config::{CameraConfig, RenderingConfig};

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    render_config: RenderingConfig,
    camera_config: CameraConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: CameraConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let line_pipeline = LinePipeline::new(&context.device, context.surface_format());

        log::info!(
            "Renderer ready: {}x{} {:?}",
            context.size.width,
            context.size.height,
            context.surface_format()
        );

        Ok(Self {
            context,
            line_pipeline,
            render_config,
            camera_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Render a single frame: clear, draw the wireframe, present
    pub fn render_frame(
        &mut self,
        camera: &OrbitCamera,
        frame: &RenderFrame<'_>,
    ) -> Result<(), RenderError> {
        let proj_matrix = perspective_matrix(
            self.camera_config.fov.to_radians(),
            self.context.aspect_ratio(),
            self.camera_config.near,
            self.camera_config.far,
        );
        let uniforms = LineUniforms {
            view_proj: mat4_mul(proj_matrix, camera.view_matrix()),
        };
        self.line_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        let mut gpu_frame = self
            .context
            .begin_frame(self.render_config.background_color)?;

        self.line_pipeline
            .draw_frame(frame, self.render_config.line_color)?;
        self.line_pipeline.flush(
            &self.context.device,
            &self.context.queue,
            &mut gpu_frame,
            self.context.depth_view(),
        );
        self.context.end_frame(gpu_frame);

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
