use super::helpers::{make_pipeline, uniform_binding, PipelineDesc};
use super::Layer;
use crate::core::{field_shader_source, FieldUniforms, FlowField, HostView};

/// Full-screen flowing-noise pass.
pub struct FieldLayer {
    flow: FlowField,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    resolution: [f32; 2],
}

impl FieldLayer {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat, flow: FlowField) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("field_shader"),
            source: wgpu::ShaderSource::Wgsl(field_shader_source().into()),
        });
        let binding = uniform_binding(
            device,
            "field_uniforms",
            std::mem::size_of::<FieldUniforms>() as u64,
            wgpu::ShaderStages::FRAGMENT,
        );
        let pipeline = make_pipeline(
            device,
            &binding.layout,
            PipelineDesc {
                label: "field_pipeline",
                shader: &shader,
                vs_entry: "vs_fullscreen",
                fs_entry: "fs_field",
                buffers: &[],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            },
        );
        log::info!("[flow] field layer ready (seed {:.3})", flow.seed());
        Self {
            flow,
            pipeline,
            uniform_buffer: binding.buffer,
            bind_group: binding.bind_group,
            resolution: [1.0, 1.0],
        }
    }
}

impl Layer for FieldLayer {
    fn resize(&mut self, _queue: &wgpu::Queue, view: &HostView) {
        self.resolution = view.resolution;
    }

    fn update(&mut self, queue: &wgpu::Queue, _view: &HostView, elapsed: f32) {
        let u = self.flow.uniforms(self.resolution, elapsed);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn release(&mut self) {
        self.uniform_buffer.destroy();
    }
}
