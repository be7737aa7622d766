//! WGSL sources for the gradient pipelines
//!
//! One shared prelude plus one fragment stage per gradient kind, composed at
//! pipeline-creation time. Binding order matches the host side in
//! `pipeline.rs`: 0 = per-kind gradient uniforms, 1 = stop colors,
//! 2 = stop locations, 3 = view uniforms.

use crate::utils::gradient::GradientKind;

/// Shared prelude: vertex stage, stop buffers, view uniforms, and the two
/// ramp helpers every fragment stage calls.
pub const SHADER_COMMON: &str = r#"
struct VSOut {
    @builtin(position) pos: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

struct ViewUniforms {
    resolution: vec2<f32>,
    _pad0: vec2<f32>,
}

@group(0) @binding(1) var<storage, read> stop_colors: array<vec4<f32>>;
@group(0) @binding(2) var<storage, read> stop_locations: array<f32>;
@group(0) @binding(3) var<uniform> view: ViewUniforms;

// Full-screen triangle, no vertex buffers
@vertex
fn vs_main(@builtin(vertex_index) vi: u32) -> VSOut {
    var out: VSOut;
    let x = f32((vi & 1u) << 2u);
    let y = f32((vi & 2u) << 1u);
    out.pos = vec4<f32>(x - 1.0, 1.0 - y, 0.0, 1.0);
    out.uv = vec2<f32>(x * 0.5, y * 0.5);
    return out;
}

// Interpolate along the first `count` stops of the ramp buffers.
// Zero stops is transparent black; one stop or an out-of-range query
// clamps; coincident stops resolve to the later stop's color.
fn interpolate_color(count: u32, location: f32) -> vec4<f32> {
    if (count == 0u) {
        return vec4<f32>(0.0, 0.0, 0.0, 0.0);
    }
    if (count == 1u || location <= stop_locations[0]) {
        return stop_colors[0];
    }
    let last = count - 1u;
    if (location >= stop_locations[last]) {
        return stop_colors[last];
    }
    var hi: u32 = 1u;
    loop {
        if (hi >= last || stop_locations[hi] >= location) {
            break;
        }
        hi = hi + 1u;
    }
    let lo = hi - 1u;
    let span = stop_locations[hi] - stop_locations[lo];
    if (span <= 0.0) {
        return stop_colors[hi];
    }
    let t = (location - stop_locations[lo]) / span;
    return mix(stop_colors[lo], stop_colors[hi], t);
}

// Scale x by the aspect ratio (width / height) so distances and angles
// describe true circles on a non-square viewport.
fn fix_aspect_ratio(point: vec2<f32>, aspect_ratio: f32) -> vec2<f32> {
    return vec2<f32>(point.x * aspect_ratio, point.y);
}
"#;

pub const AXIAL_FRAGMENT: &str = r#"
struct AxialUniforms {
    start: vec2<f32>,
    end: vec2<f32>,
    stops: u32,
}

@group(0) @binding(0) var<uniform> gradient: AxialUniforms;

@fragment
fn fs_main(in: VSOut) -> @location(0) vec4<f32> {
    let aspect_ratio = view.resolution.x / view.resolution.y;
    let point = fix_aspect_ratio(in.uv, aspect_ratio);
    let start = fix_aspect_ratio(gradient.start, aspect_ratio);
    let end = fix_aspect_ratio(gradient.end, aspect_ratio);
    let axis = end - start;
    let len_sq = dot(axis, axis);
    var location = 0.0;
    if (len_sq > 0.0) {
        location = dot(point - start, axis) / len_sq;
    }
    return interpolate_color(gradient.stops, location);
}
"#;

pub const RADIAL_FRAGMENT: &str = r#"
struct RadialUniforms {
    center: vec2<f32>,
    radius: f32,
    stops: u32,
}

@group(0) @binding(0) var<uniform> gradient: RadialUniforms;

@fragment
fn fs_main(in: VSOut) -> @location(0) vec4<f32> {
    let aspect_ratio = view.resolution.x / view.resolution.y;
    let point = fix_aspect_ratio(in.uv, aspect_ratio);
    let center = fix_aspect_ratio(gradient.center, aspect_ratio);
    var location = 0.0;
    if (gradient.radius > 0.0) {
        location = distance(point, center) / gradient.radius;
    }
    return interpolate_color(gradient.stops, location);
}
"#;

pub const SWEEP_FRAGMENT: &str = r#"
struct SweepUniforms {
    center: vec2<f32>,
    angle: f32,
    stops: u32,
}

@group(0) @binding(0) var<uniform> gradient: SweepUniforms;

@fragment
fn fs_main(in: VSOut) -> @location(0) vec4<f32> {
    let aspect_ratio = view.resolution.x / view.resolution.y;
    let point = fix_aspect_ratio(in.uv, aspect_ratio);
    let center = fix_aspect_ratio(gradient.center, aspect_ratio);
    let delta = point - center;
    let theta = atan2(delta.y, delta.x) - gradient.angle;
    let location = fract(theta / 6.2831853);
    return interpolate_color(gradient.stops, location);
}
"#;

pub const SPIRAL_FRAGMENT: &str = r#"
struct SpiralUniforms {
    center: vec2<f32>,
    angle: f32,
    scale: f32,
    stops: u32,
}

@group(0) @binding(0) var<uniform> gradient: SpiralUniforms;

@fragment
fn fs_main(in: VSOut) -> @location(0) vec4<f32> {
    let aspect_ratio = view.resolution.x / view.resolution.y;
    let point = fix_aspect_ratio(in.uv, aspect_ratio);
    let center = fix_aspect_ratio(gradient.center, aspect_ratio);
    let delta = point - center;
    var location = 0.0;
    if (gradient.scale > 0.0) {
        let theta = atan2(delta.y, delta.x) - gradient.angle;
        location = fract(theta / 6.2831853 + distance(point, center) / gradient.scale);
    }
    return interpolate_color(gradient.stops, location);
}
"#;

pub fn fragment_source(kind: GradientKind) -> &'static str {
    match kind {
        GradientKind::Axial => AXIAL_FRAGMENT,
        GradientKind::Radial => RADIAL_FRAGMENT,
        GradientKind::Sweep => SWEEP_FRAGMENT,
        GradientKind::Spiral => SPIRAL_FRAGMENT,
    }
}

/// Full shader module source for one gradient kind
pub fn composed_source(kind: GradientKind) -> String {
    format!("{}\n{}", SHADER_COMMON, fragment_source(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_composes_with_common_prelude() {
        for kind in GradientKind::ALL {
            let source = composed_source(kind);
            assert!(source.contains("fn vs_main"));
            assert!(source.contains("fn fs_main"));
            assert!(source.contains("fn interpolate_color"));
            assert!(source.contains("fn fix_aspect_ratio"));
        }
    }

    #[test]
    fn test_fragment_sources_bind_gradient_uniforms_at_zero() {
        for kind in GradientKind::ALL {
            let fragment = fragment_source(kind);
            assert!(fragment.contains("@group(0) @binding(0) var<uniform> gradient:"));
        }
    }
}
