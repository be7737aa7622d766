//! CPU reference implementations of the shader ramp math
//!
//! `interpolate_color` and `fix_aspect_ratio` mirror the WGSL helpers in
//! `shader_constants.rs` line for line, and `gradient_location` mirrors the
//! per-kind fs_main bodies. The CPU export path and the unit tests both run
//! against these, so any divergence from the shaders shows up off-device.

use crate::utils::gradient::Configuration;

const TAU: f32 = std::f32::consts::TAU;

/// Interpolate a color along the ramp at `location`.
///
/// The stop count is the shorter of the two slices. Degenerate cases:
/// zero stops yields transparent black, one stop yields that color
/// everywhere, queries outside the first/last stop clamp, and a zero-width
/// span between coincident stops resolves to the later stop's color.
pub fn interpolate_color(colors: &[[f32; 4]], locations: &[f32], location: f32) -> [f32; 4] {
    let count = colors.len().min(locations.len());
    if count == 0 {
        return [0.0, 0.0, 0.0, 0.0];
    }
    if count == 1 || location <= locations[0] {
        return colors[0];
    }
    let last = count - 1;
    if location >= locations[last] {
        return colors[last];
    }
    let mut hi = 1;
    while hi < last && locations[hi] < location {
        hi += 1;
    }
    let lo = hi - 1;
    let span = locations[hi] - locations[lo];
    if span <= 0.0 {
        return colors[hi];
    }
    let t = (location - locations[lo]) / span;
    mix(colors[lo], colors[hi], t)
}

fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Correct a normalized point for a non-square viewport.
///
/// Scales x by the aspect ratio (width / height) and leaves y alone, so
/// distances and angles computed in the corrected space describe true
/// circles. Identity at ratio 1.0; applying ratio r then 1/r restores the
/// input.
pub fn fix_aspect_ratio(point: [f32; 2], aspect_ratio: f32) -> [f32; 2] {
    [point[0] * aspect_ratio, point[1]]
}

/// Ramp location for a normalized point under the given configuration.
///
/// Degenerate geometry (zero-length axis, zero radius, zero scale) resolves
/// to 0.0 rather than NaN.
pub fn gradient_location(configuration: &Configuration, point: [f32; 2], aspect_ratio: f32) -> f32 {
    let point = fix_aspect_ratio(point, aspect_ratio);
    match *configuration {
        Configuration::Axial { start, end } => {
            let start = fix_aspect_ratio(start, aspect_ratio);
            let end = fix_aspect_ratio(end, aspect_ratio);
            let axis = [end[0] - start[0], end[1] - start[1]];
            let len_sq = axis[0] * axis[0] + axis[1] * axis[1];
            if len_sq <= 0.0 {
                return 0.0;
            }
            let delta = [point[0] - start[0], point[1] - start[1]];
            (delta[0] * axis[0] + delta[1] * axis[1]) / len_sq
        }
        Configuration::Radial { center, radius } => {
            if radius <= 0.0 {
                return 0.0;
            }
            let center = fix_aspect_ratio(center, aspect_ratio);
            distance(point, center) / radius
        }
        Configuration::Sweep { center, angle } => {
            let center = fix_aspect_ratio(center, aspect_ratio);
            let delta = [point[0] - center[0], point[1] - center[1]];
            let theta = delta[1].atan2(delta[0]) - angle;
            fract(theta / TAU)
        }
        Configuration::Spiral { center, angle, scale } => {
            if scale <= 0.0 {
                return 0.0;
            }
            let center = fix_aspect_ratio(center, aspect_ratio);
            let delta = [point[0] - center[0], point[1] - center[1]];
            let theta = delta[1].atan2(delta[0]) - angle;
            fract(theta / TAU + distance(point, center) / scale)
        }
    }
}

fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

// Matches WGSL fract(): always in [0, 1), including for negative inputs.
fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    fn assert_close(a: [f32; 4], b: [f32; 4]) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-6, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_exact_stop_returns_stop_color() {
        let colors = [RED, BLUE, [0.0, 1.0, 0.0, 1.0]];
        let locations = [0.0, 0.4, 1.0];
        assert_close(interpolate_color(&colors, &locations, 0.4), BLUE);
        assert_close(interpolate_color(&colors, &locations, 0.0), RED);
    }

    #[test]
    fn test_clamps_outside_stop_range() {
        let colors = [RED, BLUE];
        let locations = [0.25, 0.75];
        assert_close(interpolate_color(&colors, &locations, -1.0), RED);
        assert_close(interpolate_color(&colors, &locations, 0.1), RED);
        assert_close(interpolate_color(&colors, &locations, 0.9), BLUE);
        assert_close(interpolate_color(&colors, &locations, 2.0), BLUE);
    }

    #[test]
    fn test_single_stop_ignores_location() {
        assert_close(interpolate_color(&[RED], &[0.5], -3.0), RED);
        assert_close(interpolate_color(&[RED], &[0.5], 0.99), RED);
    }

    #[test]
    fn test_zero_stops_is_transparent_black() {
        assert_close(interpolate_color(&[], &[], 0.5), [0.0; 4]);
    }

    #[test]
    fn test_midpoint_blend() {
        let blended = interpolate_color(&[RED, BLUE], &[0.0, 1.0], 0.5);
        assert_close(blended, [0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_zero_width_span_takes_later_stop() {
        let colors = [RED, BLUE, [0.0, 1.0, 0.0, 1.0]];
        let locations = [0.0, 0.5, 0.5];
        // query sits past the last location, clamps high
        assert_close(interpolate_color(&colors, &locations, 0.5), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_aspect_ratio_identity() {
        assert_eq!(fix_aspect_ratio([0.3, 0.7], 1.0), [0.3, 0.7]);
    }

    #[test]
    fn test_aspect_ratio_inverts() {
        let point = [0.3, 0.7];
        let ratio = 16.0 / 9.0;
        let there = fix_aspect_ratio(point, ratio);
        let back = fix_aspect_ratio(there, 1.0 / ratio);
        assert!((back[0] - point[0]).abs() < 1e-6);
        assert_eq!(back[1], point[1]);
    }

    #[test]
    fn test_axial_location_along_axis() {
        let config = Configuration::Axial {
            start: [0.0, 0.0],
            end: [1.0, 0.0],
        };
        assert!((gradient_location(&config, [0.5, 0.3], 1.0) - 0.5).abs() < 1e-6);
        assert!((gradient_location(&config, [0.0, 0.9], 1.0)).abs() < 1e-6);
        assert!((gradient_location(&config, [1.0, 0.1], 1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_axial_degenerate_axis() {
        let config = Configuration::Axial {
            start: [0.5, 0.5],
            end: [0.5, 0.5],
        };
        assert_eq!(gradient_location(&config, [0.1, 0.9], 1.0), 0.0);
    }

    #[test]
    fn test_radial_location_is_distance_over_radius() {
        let config = Configuration::Radial {
            center: [0.5, 0.5],
            radius: 0.5,
        };
        assert!((gradient_location(&config, [0.5, 0.5], 1.0)).abs() < 1e-6);
        assert!((gradient_location(&config, [1.0, 0.5], 1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_radial_circle_is_round_under_aspect() {
        // Same screen-space distance from center along x and y must land at
        // the same ramp location once corrected for a 2:1 viewport.
        let config = Configuration::Radial {
            center: [0.5, 0.5],
            radius: 0.5,
        };
        let aspect = 2.0;
        let along_y = gradient_location(&config, [0.5, 0.75], aspect);
        let along_x = gradient_location(&config, [0.5 + 0.25 / aspect, 0.5], aspect);
        assert!((along_x - along_y).abs() < 1e-5);
    }

    #[test]
    fn test_sweep_wraps_into_unit_interval() {
        let config = Configuration::Sweep {
            center: [0.5, 0.5],
            angle: 0.0,
        };
        for point in [[1.0, 0.5], [0.5, 1.0], [0.0, 0.5], [0.5, 0.0]] {
            let location = gradient_location(&config, point, 1.0);
            assert!((0.0..1.0).contains(&location), "{}", location);
        }
        // +x from center is angle zero
        assert!(gradient_location(&config, [1.0, 0.5], 1.0).abs() < 1e-6);
        // +y from center is a quarter turn
        assert!((gradient_location(&config, [0.5, 1.0], 1.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_spiral_advances_with_distance() {
        let config = Configuration::Spiral {
            center: [0.5, 0.5],
            angle: 0.0,
            scale: 0.5,
        };
        // Same direction, different distances: locations differ by d/scale mod 1.
        let near = gradient_location(&config, [0.6, 0.5], 1.0);
        let far = gradient_location(&config, [0.7, 0.5], 1.0);
        let expected = (near + 0.1 / 0.5).rem_euclid(1.0);
        assert!((far - expected).abs() < 1e-5);
    }
}
