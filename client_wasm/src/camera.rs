//! Camera for the board
//!
//! 2D orthographic camera in board pixels: origin top-left, y down

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera for a `width` x `height` board
    pub fn orthographic(width: f32, height: f32) -> Self {
        // Position camera looking down at the board center
        let eye = Vec3::new(width / 2.0, height / 2.0, 10.0);
        let target = Vec3::new(width / 2.0, height / 2.0, 0.0);
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);

        // Bottom and top swapped so board y grows downwards on screen
        let projection = Mat4::orthographic_rh(
            -width / 2.0,
            width / 2.0,
            height / 2.0,
            -height / 2.0,
            0.1,
            100.0,
        );

        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn to_clip(camera: &Camera, x: f32, y: f32) -> Vec4 {
        camera.view_proj() * Vec4::new(x, y, 0.0, 1.0)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_top_left_maps_to_clip_top_left() {
        let camera = Camera::orthographic(800.0, 400.0);
        let clip = to_clip(&camera, 0.0, 0.0);
        assert_close(clip.x, -1.0);
        assert_close(clip.y, 1.0);
    }

    #[test]
    fn test_bottom_right_maps_to_clip_bottom_right() {
        let camera = Camera::orthographic(800.0, 400.0);
        let clip = to_clip(&camera, 800.0, 400.0);
        assert_close(clip.x, 1.0);
        assert_close(clip.y, -1.0);
    }

    #[test]
    fn test_board_plane_inside_depth_range() {
        let camera = Camera::orthographic(800.0, 400.0);
        let clip = to_clip(&camera, 400.0, 200.0);
        assert!(clip.z > 0.0 && clip.z < 1.0, "z = {}", clip.z);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
