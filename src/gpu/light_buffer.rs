use super::uniform::UniformBinding;
use crate::error::VoxviewError;
use crate::lighting::LightBlock;

/// GPU copy of the [`LightBlock`].
pub struct LightBuffer {
    /// Buffer and bind group.
    pub binding: UniformBinding,
}

impl LightBuffer {
    /// Create the buffer after checking the shader's declared block size.
    ///
    /// # Errors
    ///
    /// Returns [`VoxviewError::LayoutMismatch`] if `shader_block_size` is
    /// not the size of a [`LightBlock`].
    pub fn new(
        device: &wgpu::Device,
        shader_block_size: u64,
    ) -> Result<Self, VoxviewError> {
        LightBlock::validate_layout(shader_block_size)?;
        let binding = UniformBinding::new(
            device,
            "Light Block",
            LightBlock::default().as_bytes(),
            wgpu::ShaderStages::FRAGMENT,
        );
        log::debug!("light block buffer created ({} bytes)", LightBlock::SIZE);
        Ok(Self { binding })
    }

    /// Rewrite the whole block.
    pub fn update_gpu(&self, queue: &wgpu::Queue, block: &LightBlock) {
        self.binding.write(queue, block.as_bytes());
    }
}
