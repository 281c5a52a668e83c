pub mod camera;
pub mod constants;
pub mod error;
pub mod field;
pub mod lifecycle;
pub mod math;
pub mod noise;
pub mod palette;
pub mod particles;
pub mod quality;
pub mod timeline;

pub use camera::*;
pub use error::BackdropError;
pub use field::*;
pub use lifecycle::*;
pub use particles::*;
pub use quality::*;
pub use timeline::*;

// Shaders bundled as string constants. WGSL has no includes, so the noise
// library is prepended to the programs that sample it.
pub static NOISE_WGSL: &str = include_str!("../../shaders/noise.wgsl");
pub static FIELD_WGSL: &str = include_str!("../../shaders/field.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");

pub fn field_shader_source() -> String {
    format!("{NOISE_WGSL}\n{FIELD_WGSL}")
}
