use thiserror::Error;

/// Local failures of a background mount. None of these reach the host page;
/// they are logged and the background degrades to a no-op.
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("canvas creation failed: {0}")]
    Canvas(String),
    #[error("surface creation failed: {0}")]
    Surface(String),
    #[error("no WebGPU adapter")]
    NoAdapter,
    #[error("request_device error: {0}")]
    Device(String),
    #[error("surface has no supported formats")]
    NoSurfaceFormat,
}
