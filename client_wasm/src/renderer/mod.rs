pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::instances::SceneInstances;
use crate::mesh::{create_circle, create_rectangle};
use game_core::Scene;
use resources::{GameBuffers, Mesh};
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub rect: Mesh,
    pub circle: Mesh,

    pub last_instances: Option<SceneInstances>,
}

impl Renderer {
    /// `width` and `height` are the board size in pixels
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        width: f32,
        height: f32,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas, width, height).await?;
        let camera = Camera::orthographic(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let rect = Mesh::upload(&ctx.device, "Rectangle", create_rectangle());
        let circle = Mesh::upload(&ctx.device, "Circle", create_circle(CIRCLE_SEGMENTS));

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            rect,
            circle,
            last_instances: None,
        })
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
        draw::draw_frame(self, scene)
    }
}
