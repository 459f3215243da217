use crate::camera::{Camera, CameraUniform};
use crate::instances::InstanceData;
use crate::mesh::Vertex;
use wgpu::util::DeviceExt;
use wgpu::*;

pub struct GameBuffers {
    pub camera: Buffer,
    pub left_panel: Buffer,
    pub right_panel: Buffer,
    pub ball: Buffer,
}

/// Uploaded mesh
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn upload(
        device: &Device,
        label: &str,
        (vertices, indices): (Vec<Vertex>, Vec<u16>),
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(format!("{label} Vertex Buffer").as_str()),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(format!("{label} Index Buffer").as_str()),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

fn instance_buffer(device: &Device, label: &str) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<InstanceData>() as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        left_panel: instance_buffer(device, "Left Panel Instance Buffer"),
        right_panel: instance_buffer(device, "Right Panel Instance Buffer"),
        ball: instance_buffer(device, "Ball Instance Buffer"),
    }
}
