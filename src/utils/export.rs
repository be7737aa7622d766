//! CPU rasterization of gradients for PNG export
//!
//! Runs the same ramp math as the fragment shaders (`ramp.rs`), so exports
//! match the GPU preview without touching a device.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::utils::gradient::{Configuration, Gradient};
use crate::utils::ramp::{gradient_location, interpolate_color};
use crate::utils::ShaderError;

/// Render a gradient to an RGBA image.
///
/// Channels are linear floats clamped to [0,1] and scaled straight to 8-bit
/// (no gamma), matching how the preview surface treats the shader output.
pub fn render_to_image(
    gradient: &Gradient,
    configuration: &Configuration,
    width: u32,
    height: u32,
) -> RgbaImage {
    let aspect_ratio = width as f32 / height.max(1) as f32;
    let mut img = RgbaImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // pixel centers in the unit coordinate space
        let point = [
            (x as f32 + 0.5) / width as f32,
            (y as f32 + 0.5) / height as f32,
        ];
        let location = gradient_location(configuration, point, aspect_ratio);
        let color = interpolate_color(gradient.colors(), gradient.locations(), location);
        *pixel = Rgba(color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8));
    }

    img
}

/// Render and write a PNG
pub fn export_png(
    gradient: &Gradient,
    configuration: &Configuration,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<(), ShaderError> {
    log::info!(
        "Exporting {}x{} {} gradient to {}",
        width,
        height,
        configuration.kind().label(),
        path.display()
    );
    let img = render_to_image(gradient, configuration, width, height);
    img.save(path).map_err(|e| {
        ShaderError::PresetError(format!("could not write {}: {}", path.display(), e))
    })
}

/// Timestamped default filename for the save dialog
pub fn default_export_name() -> String {
    format!(
        "gradient_{}.png",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::gradient::GradientKind;

    #[test]
    fn test_axial_endpoints_take_end_colors() {
        let gradient = Gradient::new(
            vec![[1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]],
            None,
        )
        .unwrap();
        let configuration = Configuration::Axial {
            start: [0.0, 0.5],
            end: [1.0, 0.5],
        };

        let img = render_to_image(&gradient, &configuration, 64, 64);
        let left = img.get_pixel(0, 32);
        let right = img.get_pixel(63, 32);
        assert!(left.0[0] > 240 && left.0[2] < 15, "{:?}", left);
        assert!(right.0[2] > 240 && right.0[0] < 15, "{:?}", right);
    }

    #[test]
    fn test_radial_center_takes_first_color() {
        let gradient = Gradient::new(
            vec![[0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 0.0, 1.0]],
            None,
        )
        .unwrap();
        let configuration = Configuration::Radial {
            center: [0.5, 0.5],
            radius: 0.5,
        };

        let img = render_to_image(&gradient, &configuration, 33, 33);
        let center = img.get_pixel(16, 16);
        assert!(center.0[1] > 240, "{:?}", center);
    }

    #[test]
    fn test_single_stop_fills_uniformly() {
        let gradient = Gradient::new(vec![[0.25, 0.5, 0.75, 1.0]], None).unwrap();
        let configuration = Configuration::default_for(GradientKind::Sweep);

        let img = render_to_image(&gradient, &configuration, 16, 8);
        let expected = *img.get_pixel(0, 0);
        assert!(img.pixels().all(|p| *p == expected));
    }

    #[test]
    fn test_export_name_has_png_suffix() {
        let name = default_export_name();
        assert!(name.starts_with("gradient_"));
        assert!(name.ends_with(".png"));
    }
}
