use crate::core::HostView;

mod field;
mod helpers;
mod particles;

pub use field::FieldLayer;
pub use particles::ParticleLayer;

/// One background program drawn by the shared renderer host.
///
/// The host owns the surface, camera and frame clock; a layer owns its
/// pipeline, buffers and per-frame uniform state.
pub trait Layer {
    /// Called after the host applied a new size to the camera and surface.
    fn resize(&mut self, queue: &wgpu::Queue, view: &HostView);

    /// Write this frame's uniforms. `elapsed` is seconds since mount.
    fn update(&mut self, queue: &wgpu::Queue, view: &HostView, elapsed: f32);

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>);

    /// Cancel scheduled work and free GPU buffers. Called at most once.
    fn release(&mut self);
}
