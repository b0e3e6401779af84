//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh and overlay pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use liminal_core::World;
use liminal_input::{LookAtController, TrailMarker};
use liminal_render::{
    build_overlay,
    context::{ContextError, RenderContext},
    pipeline::{MeshPipeline, OverlayPipeline},
    scene_uniforms, CursorGlow, SceneGeometry,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// What the overlay pass draws this frame
pub struct OverlayFrame<'a> {
    pub markers: &'a [TrailMarker],
    pub marker_color: [f32; 3],
    pub glow: Option<CursorGlow>,
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    mesh_pipeline: MeshPipeline,
    overlay_pipeline: OverlayPipeline,
    geometry: SceneGeometry,
    /// Environment whose geometry is on the GPU
    uploaded_environment: Option<usize>,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut mesh_pipeline = MeshPipeline::new(&context.device, context.config.format);
        let overlay_pipeline = OverlayPipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        mesh_pipeline.ensure_depth_texture(
            &context.device,
            context.size.width,
            context.size.height,
        );

        Ok(Self {
            context,
            mesh_pipeline,
            overlay_pipeline,
            geometry: SceneGeometry::default(),
            uploaded_environment: None,
            render_config,
        })
    }

    /// Handle window resize
    ///
    /// A zero-sized window (minimized) keeps the previous surface and depth
    /// texture so both attachments stay the same size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !is_drawable_size(width, height) {
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.mesh_pipeline.ensure_depth_texture(&self.context.device, width, height);
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Re-triangulate and upload the world if it changed or another environment became active
    pub fn sync_geometry(&mut self, environment: usize, world: &World, dirty: bool) {
        if !needs_upload(self.uploaded_environment, environment, dirty) {
            return;
        }
        self.geometry = SceneGeometry::from_world(world);
        self.mesh_pipeline.upload_vertices(
            &self.context.device,
            &self.context.queue,
            self.geometry.vertices(),
        );
        if self.uploaded_environment != Some(environment) {
            log::info!(
                "Uploaded environment {}: {} vertices, {} triangles",
                environment,
                self.geometry.vertex_count(),
                self.geometry.triangle_count()
            );
        }
        self.uploaded_environment = Some(environment);
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        world: &World,
        camera: &LookAtController,
        overlay: &OverlayFrame<'_>,
    ) -> Result<(), RenderError> {
        let uniforms = scene_uniforms(world, camera.view_projection(), camera.eye());
        self.mesh_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        let viewport = (self.context.size.width as f32, self.context.size.height as f32);
        let overlay_vertices = build_overlay(
            viewport,
            overlay.markers,
            overlay.marker_color,
            overlay.glow.as_ref(),
        );
        self.overlay_pipeline.upload(
            &self.context.device,
            &self.context.queue,
            &overlay_vertices,
        );

        // Get surface texture
        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.mesh_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
            self.geometry.opaque_range(),
            self.geometry.transparent_range(),
        );
        self.overlay_pipeline.render(&mut encoder, &view);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

fn is_drawable_size(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}

fn needs_upload(uploaded: Option<usize>, environment: usize, dirty: bool) -> bool {
    dirty || uploaded != Some(environment)
}
