// DOM presentation of the background canvases.

/// Flow background fills its container and sits behind its siblings.
pub const FLOW_CANVAS_STYLE: &str = "position:absolute;inset:0;width:100%;height:100%;\
display:block;z-index:0;pointer-events:none;";

/// Ripple background covers the viewport at reduced opacity.
pub const RIPPLE_CANVAS_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
display:block;z-index:0;opacity:0.8;pointer-events:none;";

pub const FLOW_TAG: &str = "flow";
pub const RIPPLE_TAG: &str = "ripple";

/// Transparent clear so page content shows through uncovered pixels.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
