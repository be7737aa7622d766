use std::fmt;

/// Errors surfaced while building gradients, shaders, or presets
#[derive(Debug, Clone)]
pub enum ShaderError {
    /// WGSL source failed a structural check or naga validation
    ValidationError(String),
    /// Pipeline or buffer creation failed
    PipelineError(String),
    /// Gradient stops are inconsistent (count mismatch, empty, over the cap)
    InvalidGradient(String),
    /// Preset file could not be read, written, or parsed
    PresetError(String),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::ValidationError(msg) => write!(f, "Shader validation failed: {}", msg),
            ShaderError::PipelineError(msg) => write!(f, "Pipeline creation failed: {}", msg),
            ShaderError::InvalidGradient(msg) => write!(f, "Invalid gradient: {}", msg),
            ShaderError::PresetError(msg) => write!(f, "Preset error: {}", msg),
        }
    }
}

impl std::error::Error for ShaderError {}

/// Format an error for display in the UI error window
pub fn format_shader_error(error: &ShaderError) -> String {
    match error {
        ShaderError::ValidationError(msg) => format!("WGSL Validation\n\n{}", msg),
        ShaderError::PipelineError(msg) => format!("Pipeline\n\n{}", msg),
        ShaderError::InvalidGradient(msg) => format!("Gradient\n\n{}", msg),
        ShaderError::PresetError(msg) => format!("Preset\n\n{}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = ShaderError::ValidationError("missing fs_main".to_string());
        assert!(err.to_string().contains("missing fs_main"));
    }

    #[test]
    fn test_format_for_ui() {
        let err = ShaderError::InvalidGradient("0 colors".to_string());
        let formatted = format_shader_error(&err);
        assert!(formatted.starts_with("Gradient"));
        assert!(formatted.contains("0 colors"));
    }
}
