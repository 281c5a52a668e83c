use super::constants::*;
use super::math::smoothstep;
use glam::Vec3;

/// Added to the weight total before dividing.
pub const WEIGHT_EPSILON: f32 = 1e-6;
/// Below this raw total every band is closed and the weights collapse onto
/// the first color.
pub const DEGENERATE_TOTAL: f32 = 1e-3;

/// One bell-shaped weight: rises over `[rise_start, peak]` and falls over
/// `[peak, fall_end]`, both as smoothstep ramps in palette space `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub rise_start: f32,
    pub peak: f32,
    pub fall_end: f32,
}

impl Band {
    pub const fn new(rise_start: f32, peak: f32, fall_end: f32) -> Self {
        Self {
            rise_start,
            peak,
            fall_end,
        }
    }

    #[inline]
    pub fn weight(&self, t: f32) -> f32 {
        smoothstep(self.rise_start, self.peak, t) * smoothstep(self.fall_end, self.peak, t)
    }
}

/// Extra weight given to the first color near the top of the range so the
/// palette loops back on itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wrap {
    pub start: f32,
    pub gain: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette<const N: usize> {
    pub colors: [Vec3; N],
    pub bands: [Band; N],
    pub wrap: Wrap,
}

impl<const N: usize> Palette<N> {
    /// Normalised blend weights for a noise value in `[-1, 1]`.
    ///
    /// Every weight is non-negative and the weights sum to one.
    pub fn weights(&self, n: f32) -> [f32; N] {
        let t = n * 0.5 + 0.5;
        let mut w = [0.0_f32; N];
        for (wi, band) in w.iter_mut().zip(self.bands.iter()) {
            *wi = band.weight(t);
        }
        if let Some(first) = w.first_mut() {
            *first += smoothstep(self.wrap.start, 1.0, t) * self.wrap.gain;
        }

        let total: f32 = w.iter().sum();
        if total < DEGENERATE_TOTAL {
            let mut one_hot = [0.0_f32; N];
            if let Some(first) = one_hot.first_mut() {
                *first = 1.0;
            }
            return one_hot;
        }
        let inv = 1.0 / (total + WEIGHT_EPSILON);
        for wi in &mut w {
            *wi *= inv;
        }
        w
    }

    /// Weighted sum of the palette colors at noise value `n`.
    pub fn blend(&self, n: f32) -> Vec3 {
        self.weights(n)
            .iter()
            .zip(self.colors.iter())
            .fold(Vec3::ZERO, |acc, (w, c)| acc + *c * *w)
    }
}

/// Split a `0xRRGGBB` literal into `[0, 1]` channels.
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(r, g, b)
}

/// Cool palette: black, navy, rose gold, lavender, platinum.
pub fn palette_a() -> Palette<5> {
    Palette {
        colors: [
            rgb_from_hex(VANTA_BLACK),
            rgb_from_hex(ROYAL_DARK_BLUE),
            rgb_from_hex(ROSE_GOLD),
            rgb_from_hex(LAVENDER_PURPLE),
            rgb_from_hex(PLATINUM),
        ],
        bands: [
            Band::new(0.0, 0.3, 0.6),
            Band::new(0.1, 0.4, 0.7),
            Band::new(0.25, 0.55, 0.8),
            Band::new(0.4, 0.7, 0.9),
            Band::new(0.55, 0.85, 1.0),
        ],
        wrap: Wrap {
            start: 0.85,
            gain: 0.6,
        },
    }
}

/// Warm palette: greens around a deep red and a single saffron band.
pub fn palette_b() -> Palette<4> {
    Palette {
        colors: [
            rgb_from_hex(DARK_GREEN),
            rgb_from_hex(DEEP_DARK_RED),
            rgb_from_hex(SAFFRON),
            rgb_from_hex(FOREST_GREEN),
        ],
        bands: [
            Band::new(0.0, 0.35, 0.65),
            Band::new(0.15, 0.5, 0.8),
            Band::new(0.35, 0.7, 0.95),
            Band::new(0.55, 0.9, 1.0),
        ],
        wrap: Wrap {
            start: 0.9,
            gain: 0.6,
        },
    }
}
