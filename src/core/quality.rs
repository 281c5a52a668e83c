use super::constants::{MIN_FULL_QUALITY_CORES, MOBILE_BREAKPOINT_PX, REDUCED_QUALITY_FACTOR};

/// Device signals sampled once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceSignals {
    /// Viewport width in CSS pixels.
    pub viewport_width: f64,
    /// Reported logical core count, if the runtime exposes one.
    pub logical_cores: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityScale {
    Full,
    Reduced,
}

impl QualityScale {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            QualityScale::Full => 1.0,
            QualityScale::Reduced => REDUCED_QUALITY_FACTOR,
        }
    }
}

/// Small screens and low core counts get the reduced workload.
///
/// A core count of zero is treated the same as an absent report.
pub fn compute_quality_scale(signals: &DeviceSignals) -> QualityScale {
    let narrow = signals.viewport_width < MOBILE_BREAKPOINT_PX;
    let low_end = matches!(signals.logical_cores, Some(n) if n > 0 && n < MIN_FULL_QUALITY_CORES);
    if narrow || low_end {
        QualityScale::Reduced
    } else {
        QualityScale::Full
    }
}
