use super::constants::*;
use super::math::smoothstep;
use super::noise::simplex3;
use super::palette::{palette_a, palette_b, Palette};
use glam::{Vec2, Vec3};

/// Number of palette colors uploaded to the GPU (palette A then palette B).
pub const FIELD_COLOR_COUNT: usize = 9;

/// Uniform block consumed by `shaders/field.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub seed: f32,
    pub colors: [[f32; 4]; FIELD_COLOR_COUNT],
}

/// Every intermediate value of one field evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    /// Centered uv after breathing and drift.
    pub base: Vec2,
    pub n_a: f32,
    pub n_b: f32,
    pub col_a: Vec3,
    pub col_b: Vec3,
    pub mask: f32,
    pub mix: f32,
    pub vignette: f32,
    pub grain: f32,
    pub color: Vec3,
}

/// CPU reference of the flowing-noise background for one mount.
///
/// The GPU evaluates the same formulas per fragment; this type exists so the
/// behavior can be inspected and tested without a device.
#[derive(Clone, Debug)]
pub struct FlowField {
    seed: f32,
    palette_a: Palette<5>,
    palette_b: Palette<4>,
}

impl FlowField {
    pub fn new(seed: f32) -> Self {
        Self {
            seed,
            palette_a: palette_a(),
            palette_b: palette_b(),
        }
    }

    /// Draw a fresh seed so that no two mounts look the same.
    pub fn random_seed<R: rand::Rng + ?Sized>(rng: &mut R) -> f32 {
        rng.gen_range(0.0..FIELD_SEED_RANGE)
    }

    pub fn seed(&self) -> f32 {
        self.seed
    }

    pub fn palette_a(&self) -> &Palette<5> {
        &self.palette_a
    }

    pub fn palette_b(&self) -> &Palette<4> {
        &self.palette_b
    }

    /// Evaluate the field at `uv` in `[0, 1]²` and time `t` seconds.
    pub fn sample(&self, uv: Vec2, t: f32) -> FieldSample {
        let s = self.seed;
        let base = base_coord(uv, t);

        let t_a = t * A_TIME_RATE;
        let coarse_a = noise2(base * A_COARSE_FREQ + Vec2::splat(s), t_a);
        let n_a = noise2(base * A_FINE_FREQ + Vec2::splat(coarse_a * A_WARP), t_a);
        let col_a = self.palette_a.blend(n_a);

        let t_b = t * B_TIME_RATE;
        let coarse_b = noise2(base * B_COARSE_FREQ + Vec2::splat(s + B_SEED_OFFSET), t_b);
        let n_b = noise2(base * B_FINE_FREQ + Vec2::splat(coarse_b * B_WARP), t_b);
        let col_b = self.palette_b.blend(n_b);

        let mask = noise2(
            base * MASK_FREQ + Vec2::splat(s + MASK_SEED_OFFSET),
            t * MASK_TIME_RATE,
        );
        let mix = mask_mix(mask);

        let vignette = vignette(uv);
        let grain = grain(uv, t);
        let color = col_a.lerp(col_b, mix) * (vignette * VIGNETTE_GAIN) + Vec3::splat(grain);

        FieldSample {
            base,
            n_a,
            n_b,
            col_a,
            col_b,
            mask,
            mix,
            vignette,
            grain,
            color,
        }
    }

    #[inline]
    pub fn shade(&self, uv: Vec2, t: f32) -> Vec3 {
        self.sample(uv, t).color
    }

    pub fn uniforms(&self, resolution: [f32; 2], t: f32) -> FieldUniforms {
        let mut colors = [[0.0_f32; 4]; FIELD_COLOR_COUNT];
        let all = self
            .palette_a
            .colors
            .iter()
            .chain(self.palette_b.colors.iter());
        for (slot, c) in colors.iter_mut().zip(all) {
            *slot = c.extend(1.0).to_array();
        }
        FieldUniforms {
            resolution,
            time: t,
            seed: self.seed,
            colors,
        }
    }
}

#[inline]
fn noise2(xy: Vec2, t: f32) -> f32 {
    simplex3(xy.extend(t))
}

/// Centered uv with a slow breathing scale and a constant drift.
pub fn base_coord(uv: Vec2, t: f32) -> Vec2 {
    let centered = uv - Vec2::splat(0.5);
    let breath = 1.0 - (t * BREATH_RATE).sin() * BREATH_DEPTH;
    centered * breath + Vec2::from(DRIFT) * t
}

/// Map the mask noise onto a palette mix factor in `[0, 1]`.
#[inline]
pub fn mask_mix(mask: f32) -> f32 {
    smoothstep(MASK_THRESHOLD, MASK_THRESHOLD + MASK_SHARPNESS, mask)
}

/// Radial darkening, 1 at the center and clamped at 0 beyond the corners.
#[inline]
pub fn vignette(uv: Vec2) -> f32 {
    let d = (uv - Vec2::splat(0.5)).length() * VIGNETTE_SCALE;
    (1.0 - d * d).clamp(0.0, 1.0)
}

/// Fine film grain added on top of the shaded color.
#[inline]
pub fn grain(uv: Vec2, t: f32) -> f32 {
    (noise2(uv * GRAIN_FREQ, t * GRAIN_TIME_RATE) * 0.5 + 0.5) * GRAIN_AMOUNT
}
