use super::constants::*;
use super::timeline::RippleState;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Selects which of the two blend colors a particle is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Primary,
    Secondary,
}

impl ParticleKind {
    /// Value of the per-instance type attribute (0 primary, 1 secondary).
    #[inline]
    pub fn attribute(self) -> f32 {
        match self {
            ParticleKind::Primary => 0.0,
            ParticleKind::Secondary => 1.0,
        }
    }

    #[inline]
    pub fn color(self) -> Vec3 {
        Vec3::from(PRIMARY_COLOR).lerp(Vec3::from(SECONDARY_COLOR), self.attribute())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub kind: ParticleKind,
}

/// Per-instance vertex layout uploaded once at creation.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub kind: f32,
}

/// Uniform block consumed by `shaders/particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub progress: f32,
    pub mix: f32,
    pub _pad: [f32; 3],
}

/// Result of the vertex stage for a single particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacedParticle {
    pub position: Vec3,
    pub point_size: f32,
    pub alpha: f32,
    pub color: Vec3,
}

/// Number of particles to allocate for a base count and quality factor.
#[inline]
pub fn particle_count(base: usize, scale: f64) -> usize {
    (base as f64 * scale).floor() as usize
}

/// Immutable set of particles sampled once per mount.
///
/// Base positions never change after generation; only the displacement
/// computed per frame varies.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Sample `count` particles over a disc in xy and a band in z.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| {
                let r = rng.gen::<f32>() * PARTICLE_DISC_RADIUS;
                let a = rng.gen::<f32>() * TAU;
                let z = (rng.gen::<f32>() - 0.5) * PARTICLE_Z_BAND;
                let kind = if rng.gen_bool(SECONDARY_PROBABILITY) {
                    ParticleKind::Secondary
                } else {
                    ParticleKind::Primary
                };
                Particle {
                    position: Vec3::new(r * a.cos(), r * a.sin(), z),
                    kind,
                }
            })
            .collect();
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.particles
            .iter()
            .map(|p| ParticleVertex {
                position: p.position.to_array(),
                kind: p.kind.attribute(),
            })
            .collect()
    }

    /// CPU reference of the vertex stage for particle `index`.
    pub fn displaced(&self, index: usize, t: f32, ripple: RippleState) -> Option<DisplacedParticle> {
        self.particles.get(index).map(|p| displace(p, t, ripple))
    }
}

/// Idle wave: a sine of distance and time, damped away from the center.
#[inline]
pub fn ambient_offset(dist: f32, t: f32) -> f32 {
    (dist * AMBIENT_SPATIAL_FREQ - t * AMBIENT_TIME_RATE).sin()
        * AMBIENT_AMPLITUDE
        * (-dist * AMBIENT_DAMPING).exp()
}

/// Traveling pulse whose crest sits at `progress * RIPPLE_TRAVEL`.
#[inline]
pub fn ripple_offset(dist: f32, progress: f32) -> f32 {
    let travel = progress * RIPPLE_TRAVEL;
    let profile = ((dist - travel) / RIPPLE_WIDTH * PI).sin().max(0.0);
    profile * profile * RIPPLE_AMPLITUDE
}

/// Z offset blended between the ambient wave (`mix = 0`) and the ripple
/// (`mix = 1`).
#[inline]
pub fn z_offset(dist: f32, t: f32, ripple: RippleState) -> f32 {
    let ambient = ambient_offset(dist, t);
    let scripted = ripple_offset(dist, ripple.progress);
    ambient + (scripted - ambient) * ripple.mix
}

/// 1 at the focal plane, fading to 0 at `DEPTH_FADE_DISTANCE`.
#[inline]
pub fn depth_factor(z: f32) -> f32 {
    1.0 - (z / DEPTH_FADE_DISTANCE).abs().clamp(0.0, 1.0)
}

#[inline]
pub fn point_size(depth: f32) -> f32 {
    depth * depth * POINT_SIZE_SPAN + POINT_SIZE_MIN
}

#[inline]
pub fn point_alpha(depth: f32) -> f32 {
    depth * ALPHA_GAIN
}

pub fn displace(p: &Particle, t: f32, ripple: RippleState) -> DisplacedParticle {
    let dist = p.position.truncate().length();
    let mut position = p.position;
    position.z += z_offset(dist, t, ripple);
    let depth = depth_factor(position.z);
    DisplacedParticle {
        position,
        point_size: point_size(depth),
        alpha: point_alpha(depth),
        color: p.kind.color(),
    }
}

/// Fragment coverage for a point-sprite coordinate in `[0, 1]²`.
///
/// Returns `None` outside the circular mask, else the radial strength.
#[inline]
pub fn point_mask(coord: Vec2) -> Option<f32> {
    let d = coord.distance(Vec2::splat(0.5));
    if d > 0.5 {
        None
    } else {
        Some(1.0 - d * 2.0)
    }
}

/// Final premultiplication-free fragment color for additive compositing.
#[inline]
pub fn fragment_color(color: Vec3, strength: f32, alpha: f32) -> [f32; 4] {
    let c = color.clamp(Vec3::ZERO, Vec3::splat(COLOR_CLAMP_MAX));
    [c.x, c.y, c.z, strength * alpha]
}
