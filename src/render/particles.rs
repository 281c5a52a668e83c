use super::helpers::{make_pipeline, uniform_binding, PipelineDesc, ADDITIVE};
use super::Layer;
use crate::core::{
    HostView, ParticleField, ParticleUniforms, ParticleVertex, RippleSequencer, PARTICLES_WGSL,
};
use wgpu::util::DeviceExt;

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

/// Additive point field displaced by the ambient wave and the scripted ripple.
pub struct ParticleLayer {
    sequencer: RippleSequencer,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    view_proj: [[f32; 4]; 4],
    resolution: [f32; 2],
}

impl ParticleLayer {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        field: &ParticleField,
        sequencer: RippleSequencer,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
        });
        let binding = uniform_binding(
            device,
            "particle_uniforms",
            std::mem::size_of::<ParticleUniforms>() as u64,
            wgpu::ShaderStages::VERTEX,
        );
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        };
        let pipeline = make_pipeline(
            device,
            &binding.layout,
            PipelineDesc {
                label: "particles_pipeline",
                shader: &shader,
                vs_entry: "vs_particle",
                fs_entry: "fs_particle",
                buffers: &[instance_layout],
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                color_format,
                blend: Some(ADDITIVE),
            },
        );
        let vertices = field.vertices();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_instances"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::info!("[ripple] particle layer ready ({} particles)", field.len());
        Self {
            sequencer,
            pipeline,
            uniform_buffer: binding.buffer,
            bind_group: binding.bind_group,
            instance_buffer,
            instance_count: field.len() as u32,
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            resolution: [1.0, 1.0],
        }
    }
}

impl Layer for ParticleLayer {
    fn resize(&mut self, _queue: &wgpu::Queue, view: &HostView) {
        self.view_proj = view.camera.view_projection().to_cols_array_2d();
        let (w, h) = view.surface_size;
        self.resolution = [w as f32, h as f32];
    }

    fn update(&mut self, queue: &wgpu::Queue, _view: &HostView, elapsed: f32) {
        let ripple = self.sequencer.advance(elapsed);
        let u = ParticleUniforms {
            view_proj: self.view_proj,
            resolution: self.resolution,
            time: elapsed,
            progress: ripple.progress,
            mix: ripple.mix,
            _pad: [0.0; 3],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..4, 0..self.instance_count);
    }

    fn release(&mut self) {
        self.sequencer.cancel();
        self.uniform_buffer.destroy();
        self.instance_buffer.destroy();
    }
}
