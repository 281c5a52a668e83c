use super::constants::{CAMERA_FAR, CAMERA_NEAR};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking down -Z at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `(0, 0, eye_z)` with a vertical field of view in degrees.
    pub fn looking_at_origin(fovy_degrees: f32, eye_z: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, eye_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Where a background reads its size from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportSource {
    Container,
    Window,
}

impl ViewportSource {
    /// Whether the host element itself must be watched for size changes,
    /// on top of window resizes.
    #[inline]
    pub fn tracks_element(self) -> bool {
        matches!(self, ViewportSource::Container)
    }
}

/// Container size in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Effective pixel ratio, capped and never below 1.
    #[inline]
    pub fn pixel_ratio(&self, cap: f64) -> f64 {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        dpr.min(cap).max(1.0)
    }

    /// Backing-store size of the drawing surface, at least 1x1.
    pub fn backing_size(&self, cap: f64) -> (u32, u32) {
        let ratio = self.pixel_ratio(cap);
        let w = (self.width.max(0.0) * ratio).floor() as u32;
        let h = (self.height.max(0.0) * ratio).floor() as u32;
        (w.max(1), h.max(1))
    }
}

/// Outcome of a resize request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resize {
    /// Zero-sized container; projection left untouched.
    Skipped,
    Unchanged,
    Applied { width: u32, height: u32 },
}

/// Projection state owned by a renderer host.
#[derive(Clone, Debug)]
pub struct HostView {
    pub camera: Camera,
    /// Container size in CSS pixels, as fed to the resolution uniform.
    pub resolution: [f32; 2],
    /// Backing-store size of the surface.
    pub surface_size: (u32, u32),
    pixel_ratio_cap: f64,
}

impl HostView {
    pub fn new(fovy_degrees: f32, eye_z: f32, pixel_ratio_cap: f64) -> Self {
        Self {
            camera: Camera::looking_at_origin(fovy_degrees, eye_z, 1.0),
            resolution: [1.0, 1.0],
            surface_size: (1, 1),
            pixel_ratio_cap,
        }
    }

    #[inline]
    pub fn pixel_ratio_cap(&self) -> f64 {
        self.pixel_ratio_cap
    }

    /// Size a surface configured at `configured` must be moved to, if the
    /// view was resized since.
    pub fn stale_surface(&self, configured: (u32, u32)) -> Option<(u32, u32)> {
        (configured != self.surface_size).then_some(self.surface_size)
    }

    /// Recompute aspect, resolution and surface size for a new viewport.
    pub fn resize(&mut self, viewport: Viewport) -> Resize {
        if viewport.is_empty() {
            return Resize::Skipped;
        }
        let resolution = [viewport.width as f32, viewport.height as f32];
        let surface_size = viewport.backing_size(self.pixel_ratio_cap);
        if resolution == self.resolution && surface_size == self.surface_size {
            return Resize::Unchanged;
        }
        self.camera.aspect = (viewport.width / viewport.height) as f32;
        self.resolution = resolution;
        self.surface_size = surface_size;
        Resize::Applied {
            width: surface_size.0,
            height: surface_size.1,
        }
    }
}
