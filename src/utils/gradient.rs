use serde::{Deserialize, Serialize};

use crate::utils::uniforms::MAX_STOPS;
use crate::utils::ShaderError;

/// The four gradient families, one render pipeline each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    Axial,
    Radial,
    Sweep,
    Spiral,
}

impl GradientKind {
    pub const ALL: [GradientKind; 4] = [
        GradientKind::Axial,
        GradientKind::Radial,
        GradientKind::Sweep,
        GradientKind::Spiral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GradientKind::Axial => "Axial",
            GradientKind::Radial => "Radial",
            GradientKind::Sweep => "Sweep",
            GradientKind::Spiral => "Spiral",
        }
    }
}

/// Drawing configuration for a gradient, in the unit coordinate space.
///
/// Points map to the viewport rectangle when drawn; angles are radians
/// (one turn == 2π).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Configuration {
    /// Linear gradient along the start→end axis
    Axial { start: [f32; 2], end: [f32; 2] },
    /// Circular gradient around a center, extent given by radius
    Radial { center: [f32; 2], radius: f32 },
    /// Angular gradient sweeping a full turn around a center
    Sweep { center: [f32; 2], angle: f32 },
    /// Sweep combined with distance, winding outward by scale
    Spiral { center: [f32; 2], angle: f32, scale: f32 },
}

impl Configuration {
    pub fn kind(&self) -> GradientKind {
        match self {
            Configuration::Axial { .. } => GradientKind::Axial,
            Configuration::Radial { .. } => GradientKind::Radial,
            Configuration::Sweep { .. } => GradientKind::Sweep,
            Configuration::Spiral { .. } => GradientKind::Spiral,
        }
    }

    pub fn has_same_kind(&self, other: &Configuration) -> bool {
        self.kind() == other.kind()
    }

    /// Default parameters for each kind, used when switching kinds in the UI
    pub fn default_for(kind: GradientKind) -> Self {
        match kind {
            GradientKind::Axial => Configuration::Axial {
                start: [0.0, 0.0],
                end: [1.0, 1.0],
            },
            GradientKind::Radial => Configuration::Radial {
                center: [0.5, 0.5],
                radius: 0.5,
            },
            GradientKind::Sweep => Configuration::Sweep {
                center: [0.5, 0.5],
                angle: 0.0,
            },
            GradientKind::Spiral => Configuration::Spiral {
                center: [0.5, 0.5],
                angle: 0.0,
                scale: 0.5,
            },
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::default_for(GradientKind::Axial)
    }
}

/// A gradient ramp: parallel colors (linear RGBA) and stop locations in [0,1]
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Vec<[f32; 4]>,
    locations: Vec<f32>,
}

impl Gradient {
    /// Build a gradient from colors and optional locations.
    ///
    /// When locations are omitted the stops are spread evenly over [0,1]
    /// (a single color lands at 0.0).
    pub fn new(colors: Vec<[f32; 4]>, locations: Option<Vec<f32>>) -> Result<Self, ShaderError> {
        if colors.is_empty() {
            return Err(ShaderError::InvalidGradient(
                "gradient needs at least one color stop".to_string(),
            ));
        }
        if colors.len() > MAX_STOPS {
            return Err(ShaderError::InvalidGradient(format!(
                "{} stops exceeds the maximum of {}",
                colors.len(),
                MAX_STOPS
            )));
        }
        let locations = match locations {
            Some(locations) => {
                if locations.len() != colors.len() {
                    return Err(ShaderError::InvalidGradient(format!(
                        "{} colors but {} locations",
                        colors.len(),
                        locations.len()
                    )));
                }
                locations
            }
            None => Self::even_locations(colors.len()),
        };
        Ok(Self { colors, locations })
    }

    fn even_locations(count: usize) -> Vec<f32> {
        if count == 1 {
            return vec![0.0];
        }
        let denominator = (count - 1) as f32;
        (0..count).map(|i| i as f32 / denominator).collect()
    }

    /// Six-color rainbow ramp with evenly spaced stops
    pub fn rainbow() -> Self {
        let colors = vec![
            [1.0, 0.2157, 0.1412, 1.0], // red
            [1.0, 0.5882, 0.0, 1.0],    // orange
            [1.0, 0.8039, 0.0039, 1.0], // yellow
            [0.2667, 0.8588, 0.3686, 1.0], // green
            [0.3804, 0.6863, 0.9373, 1.0], // blue
            [0.7302, 0.3783, 0.9414, 1.0], // purple
        ];
        let locations = Self::even_locations(colors.len());
        Self { colors, locations }
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    pub fn locations(&self) -> &[f32] {
        &self.locations
    }

    pub fn stop_count(&self) -> u32 {
        self.colors.len() as u32
    }

    pub fn set_color(&mut self, index: usize, color: [f32; 4]) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }

    /// Move one stop; the location is clamped to [0,1]
    pub fn set_location(&mut self, index: usize, location: f32) {
        if let Some(slot) = self.locations.get_mut(index) {
            *slot = location.clamp(0.0, 1.0);
        }
    }

    /// Append a stop at location 1.0, reusing the last color
    pub fn push_stop(&mut self) -> Result<(), ShaderError> {
        if self.colors.len() >= MAX_STOPS {
            return Err(ShaderError::InvalidGradient(format!(
                "already at the maximum of {} stops",
                MAX_STOPS
            )));
        }
        let color = *self.colors.last().unwrap_or(&[1.0, 1.0, 1.0, 1.0]);
        self.colors.push(color);
        self.locations.push(1.0);
        Ok(())
    }

    /// Remove one stop, refusing to drop below a single stop
    pub fn remove_stop(&mut self, index: usize) -> Result<(), ShaderError> {
        if self.colors.len() <= 1 {
            return Err(ShaderError::InvalidGradient(
                "gradient needs at least one color stop".to_string(),
            ));
        }
        if index >= self.colors.len() {
            return Err(ShaderError::InvalidGradient(format!(
                "stop index {} out of range",
                index
            )));
        }
        self.colors.remove(index);
        self.locations.remove(index);
        Ok(())
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::rainbow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_locations_span_unit_interval() {
        let gradient = Gradient::new(vec![[0.0; 4], [0.5; 4], [1.0; 4]], None).unwrap();
        assert_eq!(gradient.locations(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_single_color_lands_at_zero() {
        let gradient = Gradient::new(vec![[1.0, 0.0, 0.0, 1.0]], None).unwrap();
        assert_eq!(gradient.locations(), &[0.0]);
    }

    #[test]
    fn test_rejects_empty_and_mismatched() {
        assert!(Gradient::new(vec![], None).is_err());
        assert!(Gradient::new(vec![[0.0; 4], [1.0; 4]], Some(vec![0.0])).is_err());
        assert!(Gradient::new(vec![[0.0; 4]; MAX_STOPS + 1], None).is_err());
    }

    #[test]
    fn test_stop_editing_keeps_parallel_arrays() {
        let mut gradient = Gradient::rainbow();
        let before = gradient.stop_count();
        gradient.push_stop().unwrap();
        assert_eq!(gradient.stop_count(), before + 1);
        assert_eq!(gradient.colors().len(), gradient.locations().len());
        gradient.remove_stop(0).unwrap();
        assert_eq!(gradient.colors().len(), gradient.locations().len());
        gradient.set_location(0, 2.0);
        assert_eq!(gradient.locations()[0], 1.0);
    }

    #[test]
    fn test_configuration_kind_matching() {
        let axial = Configuration::default();
        let radial = Configuration::default_for(GradientKind::Radial);
        assert_eq!(axial.kind(), GradientKind::Axial);
        assert!(!axial.has_same_kind(&radial));
        assert!(radial.has_same_kind(&Configuration::Radial {
            center: [0.0, 0.0],
            radius: 1.0
        }));
    }

    #[test]
    fn test_configuration_serde_tagging() {
        let config = Configuration::Sweep {
            center: [0.5, 0.5],
            angle: 1.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"sweep\""));
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
