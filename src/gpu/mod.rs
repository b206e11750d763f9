//! GPU upload of per-frame camera and light data.
//!
//! Each buffer owns its wgpu uniform buffer, bind group layout and bind
//! group; the renderer binds them and calls `update_gpu` once per frame.

/// Camera uniform buffer.
pub mod camera_buffer;
/// Light block uniform buffer.
pub mod light_buffer;
/// Shared uniform buffer plus bind group construction.
pub mod uniform;

pub use camera_buffer::CameraBuffer;
pub use light_buffer::LightBuffer;
pub use uniform::UniformBinding;
