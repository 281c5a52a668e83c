// Host-side tests for particle generation and displacement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}
mod quality {
    include!("../src/core/quality.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use camera::*;
use constants::*;
use glam::{Vec2, Vec3};
use particles::*;
use quality::*;
use rand::{rngs::StdRng, SeedableRng};
use timeline::RippleState;

fn field(count: usize) -> ParticleField {
    ParticleField::generate(count, &mut StdRng::seed_from_u64(7))
}

#[test]
fn reduced_quality_keeps_thirty_percent() {
    for base in (0..2000).chain([PARTICLE_BASE_COUNT]) {
        assert_eq!(particle_count(base, QualityScale::Reduced.factor()), base * 3 / 10);
        assert_eq!(particle_count(base, QualityScale::Full.factor()), base);
    }
    assert_eq!(particle_count(PARTICLE_BASE_COUNT, 0.3), 24_000);
}

#[test]
fn reduced_count_does_not_round_up_for_large_bases() {
    let reduced = QualityScale::Reduced.factor();
    assert_eq!(particle_count(8_400_003, reduced), 2_520_000);
    assert_eq!(particle_count(10_000_003, reduced), 3_000_000);
    assert_eq!(particle_count(100_000_000, reduced), 30_000_000);
}

#[test]
fn generated_particles_fill_the_disc_and_band() {
    let f = field(10_000);
    assert_eq!(f.len(), 10_000);
    let half_band = PARTICLE_Z_BAND / 2.0;
    for p in f.particles() {
        assert!(p.position.truncate().length() <= PARTICLE_DISC_RADIUS + 1e-4);
        assert!(p.position.z >= -half_band && p.position.z < half_band);
    }
    let secondary = f
        .particles()
        .iter()
        .filter(|p| p.kind == ParticleKind::Secondary)
        .count() as f64
        / f.len() as f64;
    assert!((0.18..0.22).contains(&secondary), "secondary fraction {secondary}");
}

#[test]
fn empty_field_is_allowed() {
    let f = field(0);
    assert!(f.is_empty());
    assert!(f.vertices().is_empty());
    assert!(f.displaced(0, 0.0, RippleState::default()).is_none());
}

#[test]
fn vertices_mirror_particles() {
    let f = field(64);
    for (p, v) in f.particles().iter().zip(f.vertices()) {
        assert_eq!(v.position, p.position.to_array());
        assert_eq!(v.kind, p.kind.attribute());
    }
    assert_eq!(std::mem::size_of::<ParticleVertex>(), 16);
    assert_eq!(std::mem::size_of::<ParticleUniforms>(), 96);
}

#[test]
fn kind_selects_blend_color() {
    let primary = ParticleKind::Primary.color();
    let secondary = ParticleKind::Secondary.color();
    assert!((primary - Vec3::from(PRIMARY_COLOR)).abs().max_element() < 1e-6);
    assert!((secondary - Vec3::from(SECONDARY_COLOR)).abs().max_element() < 1e-6);
}

#[test]
fn mix_zero_is_pure_ambient_wave() {
    let state = RippleState {
        progress: 0.4,
        mix: 0.0,
    };
    for dist in [0.0, 1.5, 7.0, 22.0] {
        for t in [0.0, 3.0, 40.0] {
            assert_eq!(z_offset(dist, t, state), ambient_offset(dist, t));
        }
    }
}

#[test]
fn mix_one_is_pure_ripple() {
    let state = RippleState {
        progress: 0.4,
        mix: 1.0,
    };
    for dist in [0.0, 20.0, 33.5, 40.0] {
        let z = z_offset(dist, 12.0, state);
        assert!((z - ripple_offset(dist, 0.4)).abs() < 1e-5);
    }
}

#[test]
fn ripple_crest_travels_with_progress() {
    for progress in [0.1, 0.25, 0.5] {
        let travel = progress * RIPPLE_TRAVEL;
        let crest = ripple_offset(travel + RIPPLE_WIDTH / 2.0, progress);
        assert!((crest - RIPPLE_AMPLITUDE).abs() < 1e-3, "crest {crest}");
        // Half a wavelength behind the front the profile is clipped to zero
        assert_eq!(ripple_offset(travel - RIPPLE_WIDTH / 2.0, progress), 0.0);
    }
    assert!(ripple_offset(0.0, 0.0).abs() < 1e-6);
}

#[test]
fn ambient_wave_decays_with_distance() {
    assert!(ambient_offset(0.0, 0.0).abs() < 1e-6);
    for t in [0.0, 5.0, 11.0] {
        assert!(ambient_offset(2.0, t).abs() <= AMBIENT_AMPLITUDE);
        assert!(ambient_offset(40.0, t).abs() <= AMBIENT_AMPLITUDE * (-4.0_f32).exp() + 1e-6);
    }
}

#[test]
fn depth_controls_size_and_alpha() {
    assert_eq!(depth_factor(0.0), 1.0);
    assert_eq!(depth_factor(DEPTH_FADE_DISTANCE), 0.0);
    assert_eq!(depth_factor(-30.0), 0.0);
    assert!((depth_factor(-10.0) - 0.5).abs() < 1e-6);

    assert_eq!(point_size(1.0), POINT_SIZE_MIN + POINT_SIZE_SPAN);
    assert_eq!(point_size(0.0), POINT_SIZE_MIN);
    assert!((point_alpha(1.0) - ALPHA_GAIN).abs() < 1e-6);
    assert_eq!(point_alpha(0.0), 0.0);
}

#[test]
fn displacement_only_moves_z() {
    let f = field(500);
    let before: Vec<_> = f.particles().to_vec();
    let state = RippleState {
        progress: 0.3,
        mix: 0.6,
    };
    for i in 0..f.len() {
        let d = f.displaced(i, 4.0, state).unwrap();
        let base = f.particles()[i].position;
        assert_eq!(d.position.x, base.x);
        assert_eq!(d.position.y, base.y);
        assert!(d.point_size >= POINT_SIZE_MIN && d.point_size <= POINT_SIZE_MIN + POINT_SIZE_SPAN);
        assert!(d.alpha >= 0.0 && d.alpha <= ALPHA_GAIN + 1e-6);
    }
    assert_eq!(f.particles(), &before[..]);
}

#[test]
fn point_mask_is_a_soft_disc() {
    assert_eq!(point_mask(Vec2::splat(0.5)), Some(1.0));
    assert_eq!(point_mask(Vec2::ZERO), None);
    assert_eq!(point_mask(Vec2::ONE), None);
    let rim = point_mask(Vec2::new(0.5, 0.0)).unwrap();
    assert!(rim.abs() < 1e-6);
    let mid = point_mask(Vec2::new(0.5, 0.25)).unwrap();
    assert!((mid - 0.5).abs() < 1e-6);
}

#[test]
fn fragment_color_is_clamped() {
    let c = fragment_color(Vec3::new(2.0, -1.0, 0.5), 0.5, 1.2);
    assert_eq!(c[0], COLOR_CLAMP_MAX);
    assert_eq!(c[1], 0.0);
    assert_eq!(c[2], 0.5);
    assert!((c[3] - 0.6).abs() < 1e-6);
}

#[test]
fn resize_changes_projection_but_not_particles() {
    let f = field(200);
    let before: Vec<_> = f.particles().to_vec();
    let mut view = HostView::new(RIPPLE_CAMERA_FOV_DEG, RIPPLE_CAMERA_Z, RIPPLE_MAX_PIXEL_RATIO);
    view.resize(Viewport::new(800.0, 600.0, 1.0));
    let resized = view.resize(Viewport::new(1600.0, 300.0, 1.0));
    assert_eq!(
        resized,
        Resize::Applied {
            width: 1600,
            height: 300
        }
    );
    assert!((view.camera.aspect - 1600.0 / 300.0).abs() < 1e-5);
    assert_eq!(view.resolution, [1600.0, 300.0]);
    assert_eq!(f.particles(), &before[..]);
}
