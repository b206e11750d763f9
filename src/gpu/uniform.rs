use wgpu::util::DeviceExt;

/// A uniform buffer bound at binding 0 of its own bind group.
pub struct UniformBinding {
    /// The uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Layout with a single uniform entry.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group exposing the whole buffer.
    pub bind_group: wgpu::BindGroup,
}

impl UniformBinding {
    /// Create the buffer initialised with `contents` and its bind group.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        contents: &[u8],
        visibility: wgpu::ShaderStages,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Buffer")),
            contents,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(&format!("{label} Bind Group Layout")),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(&format!("{label} Bind Group")),
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    /// Overwrite the buffer from offset 0.
    pub fn write(&self, queue: &wgpu::Queue, bytes: &[u8]) {
        queue.write_buffer(&self.buffer, 0, bytes);
    }
}
