// Algorithm constants shared by the CPU reference code and the GPU uniforms.
// Everything here is fixed at build time.

// ---------------- Flow field ----------------

/// Seeds are drawn uniformly from `[0, FIELD_SEED_RANGE)` once per mount.
pub const FIELD_SEED_RANGE: f32 = 1000.0;

// Breathing scale and drift of the centered uv
pub const BREATH_RATE: f32 = 0.015;
pub const BREATH_DEPTH: f32 = 0.04;
pub const DRIFT: [f32; 2] = [0.008, 0.004];

// Palette A channel: coarse/fine frequencies, warp amount, time rate
pub const A_COARSE_FREQ: f32 = 1.2;
pub const A_FINE_FREQ: f32 = 2.5;
pub const A_WARP: f32 = 0.2;
pub const A_TIME_RATE: f32 = 0.08;

// Palette B channel
pub const B_COARSE_FREQ: f32 = 1.0;
pub const B_FINE_FREQ: f32 = 3.5;
pub const B_WARP: f32 = 0.3;
pub const B_TIME_RATE: f32 = 0.06;
pub const B_SEED_OFFSET: f32 = 10.0;

// Mask channel selecting between palettes
pub const MASK_FREQ: f32 = 0.6;
pub const MASK_TIME_RATE: f32 = 0.05;
pub const MASK_SEED_OFFSET: f32 = -20.0;
pub const MASK_THRESHOLD: f32 = 0.1;
pub const MASK_SHARPNESS: f32 = 0.25; // width of the blend band above the threshold

// Vignette and grain
pub const VIGNETTE_SCALE: f32 = 1.2;
pub const VIGNETTE_GAIN: f32 = 0.9;
pub const GRAIN_FREQ: f32 = 800.0;
pub const GRAIN_TIME_RATE: f32 = 1.5;
pub const GRAIN_AMOUNT: f32 = 0.008;

// Palette colors (sRGB hex as authored)
pub const VANTA_BLACK: u32 = 0x000000;
pub const ROYAL_DARK_BLUE: u32 = 0x002366;
pub const SAFFRON: u32 = 0xFFB800;
pub const DARK_GREEN: u32 = 0x001A0F;
pub const DEEP_DARK_RED: u32 = 0x8B0000;
pub const PLATINUM: u32 = 0xE5E5E5;
pub const ROSE_GOLD: u32 = 0xB76E79;
pub const LAVENDER_PURPLE: u32 = 0x856798;
pub const FOREST_GREEN: u32 = 0x006400;

// ---------------- Particle field ----------------

pub const PARTICLE_BASE_COUNT: usize = 80_000;
pub const PARTICLE_DISC_RADIUS: f32 = 30.0;
pub const PARTICLE_Z_BAND: f32 = 12.0; // z spans [-band/2, band/2)
pub const SECONDARY_PROBABILITY: f64 = 0.2;

// Ambient wave
pub const AMBIENT_SPATIAL_FREQ: f32 = 1.2;
pub const AMBIENT_TIME_RATE: f32 = 0.15;
pub const AMBIENT_AMPLITUDE: f32 = 1.5;
pub const AMBIENT_DAMPING: f32 = 0.1;

// Scripted ripple pulse
pub const RIPPLE_TRAVEL: f32 = 80.0; // distance covered at progress = 1
pub const RIPPLE_WIDTH: f32 = 7.0;
pub const RIPPLE_AMPLITUDE: f32 = 10.0;

// Depth fade
pub const DEPTH_FADE_DISTANCE: f32 = 20.0;
pub const POINT_SIZE_SPAN: f32 = 3.0;
pub const POINT_SIZE_MIN: f32 = 1.0;
pub const ALPHA_GAIN: f32 = 1.2;
pub const COLOR_CLAMP_MAX: f32 = 1.5;

pub const PRIMARY_COLOR: [f32; 3] = [1.0, 0.27, 0.0];
pub const SECONDARY_COLOR: [f32; 3] = [0.0, 1.0, 0.75];

// ---------------- Ripple sequence (seconds) ----------------

pub const RIPPLE_INITIAL_DELAY_SEC: f32 = 6.0;
pub const RIPPLE_RAMP_SEC: f32 = 20.0;
pub const RIPPLE_MIX_IN_SEC: f32 = 7.0;
pub const RIPPLE_MIX_OUT_SEC: f32 = 7.0;
pub const RIPPLE_COOLDOWN_SEC: f32 = 8.0;

// ---------------- Quality policy ----------------

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const MIN_FULL_QUALITY_CORES: u32 = 4;
pub const REDUCED_QUALITY_FACTOR: f64 = 0.3;

// ---------------- Cameras ----------------

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const FLOW_CAMERA_FOV_DEG: f32 = 60.0;
pub const FLOW_CAMERA_Z: f32 = 5.0;
pub const RIPPLE_CAMERA_FOV_DEG: f32 = 75.0;
pub const RIPPLE_CAMERA_Z: f32 = 2.0;

// Device pixel ratio caps per background
pub const FLOW_MAX_PIXEL_RATIO: f64 = 1.5;
pub const RIPPLE_MAX_PIXEL_RATIO: f64 = 2.0;
