use super::Renderer;
use crate::instances::scene_instances;
use game_core::Scene;
use wgpu::*;

const BACKGROUND: Color = Color {
    r: 0.02,
    g: 0.02,
    b: 0.05,
    a: 1.0,
};

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Board Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(BACKGROUND),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, scene: &Scene) {
    let current = scene_instances(scene);
    if renderer.last_instances == Some(current) {
        return;
    }

    let (left, right, ball) = current;
    let queue = &renderer.queue;
    queue.write_buffer(&renderer.buffers.left_panel, 0, bytemuck::cast_slice(&[left]));
    queue.write_buffer(&renderer.buffers.right_panel, 0, bytemuck::cast_slice(&[right]));
    queue.write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[ball]));
    renderer.last_instances = Some(current);
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Panels
    let rect = &renderer.rect;
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);

    pass.set_vertex_buffer(1, renderer.buffers.left_panel.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..1);

    pass.set_vertex_buffer(1, renderer.buffers.right_panel.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..1);

    // Ball
    let circle = &renderer.circle;
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..circle.index_count, 0, 0..1);
}
