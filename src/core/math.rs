// Shader-style scalar helpers mirrored by the WGSL builtins.

/// Hermite interpolation between two edges.
///
/// Unlike the WGSL builtin this is well defined for `edge0 > edge1`, where it
/// produces the falling ramp the palette bands rely on.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span == 0.0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / span).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `x >= edge ? 1 : 0`, matching `step(edge, x)`.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
