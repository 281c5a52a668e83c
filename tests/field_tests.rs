// Host-side tests for the CPU reference of the flowing-noise field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod math {
    include!("../src/core/math.rs");
}
mod noise {
    include!("../src/core/noise.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}
mod field {
    include!("../src/core/field.rs");
}

use constants::*;
use field::*;
use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, SeedableRng};

fn uv_grid() -> impl Iterator<Item = Vec2> {
    (0..=8).flat_map(|i| (0..=8).map(move |j| Vec2::new(i as f32 / 8.0, j as f32 / 8.0)))
}

#[test]
fn random_seeds_fall_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let s = FlowField::random_seed(&mut rng);
        assert!((0.0..FIELD_SEED_RANGE).contains(&s), "seed {s} out of range");
    }
}

#[test]
fn same_seed_renders_the_same_frame() {
    let a = FlowField::new(417.25);
    let b = FlowField::new(417.25);
    for uv in uv_grid() {
        assert_eq!(a.shade(uv, 3.5), b.shade(uv, 3.5));
    }
}

#[test]
fn different_seeds_render_different_frames() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..8 {
        let a = FlowField::new(FlowField::random_seed(&mut rng));
        let b = FlowField::new(FlowField::random_seed(&mut rng));
        let differs = uv_grid().any(|uv| (a.shade(uv, 0.0) - b.shade(uv, 0.0)).abs().max_element() > 1e-4);
        assert!(differs, "seeds {} and {} look identical", a.seed(), b.seed());
    }
}

#[test]
fn frame_changes_over_time() {
    let f = FlowField::new(12.0);
    let differs = uv_grid().any(|uv| (f.shade(uv, 0.0) - f.shade(uv, 30.0)).abs().max_element() > 1e-4);
    assert!(differs);
}

#[test]
fn center_sample_composes_as_documented() {
    let f = FlowField::new(0.0);
    let s = f.sample(Vec2::splat(0.5), 0.0);
    assert_eq!(s.base, Vec2::ZERO);
    assert_eq!(s.vignette, 1.0);
    assert_eq!(s.mix, mask_mix(s.mask));
    assert_eq!(s.col_a, f.palette_a().blend(s.n_a));
    assert_eq!(s.col_b, f.palette_b().blend(s.n_b));

    let expected = s.col_a.lerp(s.col_b, s.mix) * VIGNETTE_GAIN + Vec3::splat(s.grain);
    assert!((s.color - expected).abs().max_element() < 1e-6);
}

#[test]
fn shaded_colors_stay_displayable() {
    let f = FlowField::new(321.0);
    for t in [0.0, 5.0, 60.0] {
        for uv in uv_grid() {
            let c = f.shade(uv, t);
            assert!(c.is_finite());
            assert!(c.min_element() >= -0.001 && c.max_element() <= 1.0, "{c:?} at {uv:?}");
        }
    }
}

#[test]
fn vignette_darkens_toward_the_corners() {
    assert_eq!(vignette(Vec2::splat(0.5)), 1.0);
    let edge = vignette(Vec2::new(1.0, 0.5));
    let corner = vignette(Vec2::ZERO);
    assert!(edge < 1.0 && corner < edge);
    for uv in uv_grid() {
        let v = vignette(uv);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn mask_mix_is_a_clamped_ramp() {
    assert_eq!(mask_mix(-1.0), 0.0);
    assert_eq!(mask_mix(MASK_THRESHOLD), 0.0);
    assert_eq!(mask_mix(MASK_THRESHOLD + MASK_SHARPNESS), 1.0);
    assert_eq!(mask_mix(1.0), 1.0);
    let mid = mask_mix(MASK_THRESHOLD + MASK_SHARPNESS * 0.5);
    assert!((mid - 0.5).abs() < 1e-5);
}

#[test]
fn grain_is_a_faint_offset() {
    for t in [0.0, 0.7, 9.0] {
        for uv in uv_grid() {
            let g = grain(uv, t);
            assert!(g >= -0.001 && g <= 0.0085, "grain {g}");
        }
    }
}

#[test]
fn base_coordinate_drifts_and_breathes() {
    assert_eq!(base_coord(Vec2::splat(0.5), 0.0), Vec2::ZERO);
    let drifted = base_coord(Vec2::splat(0.5), 100.0);
    assert!((drifted - Vec2::from(DRIFT) * 100.0).length() < 1e-5);

    // Breathing scales the centered coordinate by at most BREATH_DEPTH
    let corner = base_coord(Vec2::ONE, 50.0) - Vec2::from(DRIFT) * 50.0;
    let scale = corner.x / 0.5;
    assert!((scale - 1.0).abs() <= BREATH_DEPTH + 1e-5);
}

#[test]
fn uniforms_carry_both_palettes_in_order() {
    let f = FlowField::new(77.0);
    let u = f.uniforms([1280.0, 720.0], 2.5);
    assert_eq!(u.resolution, [1280.0, 720.0]);
    assert_eq!(u.time, 2.5);
    assert_eq!(u.seed, 77.0);
    for (i, c) in f.palette_a().colors.iter().enumerate() {
        assert_eq!(u.colors[i], c.extend(1.0).to_array());
    }
    for (i, c) in f.palette_b().colors.iter().enumerate() {
        assert_eq!(u.colors[5 + i], c.extend(1.0).to_array());
    }
    assert_eq!(std::mem::size_of::<FieldUniforms>(), 160);
}
