use super::uniform::UniformBinding;
use crate::camera::{Camera, CameraUniform};

/// GPU copy of the active camera's [`CameraUniform`].
pub struct CameraBuffer {
    /// CPU-side uniform, refreshed by [`CameraBuffer::update_gpu`].
    pub uniform: CameraUniform,
    /// Buffer and bind group.
    pub binding: UniformBinding,
}

impl CameraBuffer {
    /// Create the buffer with an identity view-projection.
    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        let uniform = CameraUniform::new();
        let binding = UniformBinding::new(
            device,
            "Camera",
            bytemuck::cast_slice(&[uniform]),
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        Self { uniform, binding }
    }

    /// Copy `camera`'s state into the uniform and upload it.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue, camera: &Camera) {
        self.uniform.update_view_proj(camera);
        self.binding.write(queue, bytemuck::cast_slice(&[self.uniform]));
    }
}
