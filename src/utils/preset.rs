use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::gradient::{Configuration, Gradient};
use crate::utils::ShaderError;

/// JSON preset format for saved gradients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientPreset {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,

    pub name: String,

    pub configuration: Configuration,

    /// Stop colors as linear RGBA
    pub colors: Vec<[f32; 4]>,

    /// Stop locations; omitted means evenly spaced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<f32>>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl GradientPreset {
    pub fn from_parts(name: &str, gradient: &Gradient, configuration: &Configuration) -> Self {
        Self {
            version: default_version(),
            exported_at: Some(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
            name: name.to_string(),
            configuration: configuration.clone(),
            colors: gradient.colors().to_vec(),
            locations: Some(gradient.locations().to_vec()),
        }
    }

    /// Rebuild the gradient and configuration, re-running stop validation
    pub fn to_parts(&self) -> Result<(Gradient, Configuration), ShaderError> {
        let gradient = Gradient::new(self.colors.clone(), self.locations.clone())?;
        Ok((gradient, self.configuration.clone()))
    }

    pub fn from_json(json_str: &str) -> Result<Self, ShaderError> {
        serde_json::from_str(json_str)
            .map_err(|e| ShaderError::PresetError(format!("could not parse preset: {}", e)))
    }

    pub fn to_json_pretty(&self) -> Result<String, ShaderError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ShaderError::PresetError(format!("could not serialize preset: {}", e)))
    }

    pub fn load_from(path: &Path) -> Result<Self, ShaderError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ShaderError::PresetError(format!("could not read {}: {}", path.display(), e))
        })?;
        let preset = Self::from_json(&json)?;
        log::info!("Loaded preset '{}' from {}", preset.name, path.display());
        Ok(preset)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ShaderError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| {
            ShaderError::PresetError(format!("could not write {}: {}", path.display(), e))
        })?;
        log::info!("Saved preset '{}' to {}", self.name, path.display());
        Ok(())
    }
}

/// Default preset directory under the platform config dir, created on demand
pub fn preset_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("gradient_studio").join("presets");
    if !dir.exists() {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            log::warn!("Could not create preset directory {}: {}", dir.display(), e);
            return None;
        }
    }
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::gradient::GradientKind;

    #[test]
    fn test_parse_minimal_preset() {
        let json = r#"{
            "name": "two reds",
            "configuration": { "kind": "radial", "center": [0.5, 0.5], "radius": 0.5 },
            "colors": [[1.0, 0.0, 0.0, 1.0], [0.5, 0.0, 0.0, 1.0]]
        }"#;

        let preset = GradientPreset::from_json(json).unwrap();
        assert_eq!(preset.version, "1.0");
        assert_eq!(preset.configuration.kind(), GradientKind::Radial);

        // omitted locations get spread evenly
        let (gradient, _) = preset.to_parts().unwrap();
        assert_eq!(gradient.locations(), &[0.0, 1.0]);
    }

    #[test]
    fn test_invalid_stops_rejected_on_load() {
        let json = r#"{
            "name": "broken",
            "configuration": { "kind": "axial", "start": [0.0, 0.0], "end": [1.0, 1.0] },
            "colors": [[1.0, 0.0, 0.0, 1.0]],
            "locations": [0.0, 1.0]
        }"#;

        let preset = GradientPreset::from_json(json).unwrap();
        assert!(preset.to_parts().is_err());
    }

    #[test]
    fn test_from_parts_carries_everything() {
        let gradient = Gradient::rainbow();
        let configuration = Configuration::default_for(GradientKind::Spiral);
        let preset = GradientPreset::from_parts("rainbow spiral", &gradient, &configuration);

        assert_eq!(preset.colors.len(), 6);
        assert!(preset.exported_at.is_some());

        let json = preset.to_json_pretty().unwrap();
        let back = GradientPreset::from_json(&json).unwrap();
        let (rebuilt, config) = back.to_parts().unwrap();
        assert_eq!(rebuilt, gradient);
        assert_eq!(config.kind(), GradientKind::Spiral);
    }

    #[test]
    fn test_malformed_json_is_a_preset_error() {
        match GradientPreset::from_json("{ not json") {
            Err(ShaderError::PresetError(_)) => {}
            other => panic!("expected preset error, got {:?}", other),
        }
    }
}
