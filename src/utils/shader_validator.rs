//! WGSL shader validation
//!
//! Validates the composed gradient shaders before pipeline creation, so a
//! drifted uniform layout or broken source fails with a readable message
//! instead of a device error.

use crate::utils::gradient::GradientKind;
use crate::utils::ShaderError;

/// Validates a composed gradient shader for one kind
///
/// Checks, in order:
/// 1. Source is not empty
/// 2. The kind's uniforms struct matches the host-side layout field by field
/// 3. Required entry points and ramp helpers exist
/// 4. Full naga parse + validation
pub fn validate_gradient_shader(kind: GradientKind, wgsl_src: &str) -> Result<(), ShaderError> {
    if wgsl_src.trim().is_empty() {
        return Err(ShaderError::ValidationError(
            "Shader source is empty".to_string(),
        ));
    }

    validate_uniforms_struct(kind, wgsl_src)?;
    validate_entry_points(wgsl_src)?;
    validate_wgsl_syntax(wgsl_src)?;

    Ok(())
}

/// Expected WGSL struct name and fields for one gradient kind.
///
/// This is the device-side half of the layout contract; the host-side half
/// is pinned by the layout tests in `uniforms.rs`.
fn expected_uniforms(kind: GradientKind) -> (&'static str, &'static [&'static str]) {
    match kind {
        GradientKind::Axial => (
            "AxialUniforms",
            &["start: vec2<f32>", "end: vec2<f32>", "stops: u32"],
        ),
        GradientKind::Radial => (
            "RadialUniforms",
            &["center: vec2<f32>", "radius: f32", "stops: u32"],
        ),
        GradientKind::Sweep => (
            "SweepUniforms",
            &["center: vec2<f32>", "angle: f32", "stops: u32"],
        ),
        GradientKind::Spiral => (
            "SpiralUniforms",
            &["center: vec2<f32>", "angle: f32", "scale: f32", "stops: u32"],
        ),
    }
}

/// Validate that the kind's uniforms struct matches the host layout
fn validate_uniforms_struct(kind: GradientKind, wgsl_src: &str) -> Result<(), ShaderError> {
    let (struct_name, expected_fields) = expected_uniforms(kind);
    let decl = format!("struct {}", struct_name);

    let start = match wgsl_src.find(&decl) {
        Some(start) => start,
        None => {
            return Err(ShaderError::ValidationError(format!(
                "Shader must define 'struct {}' matching the host-side uniform layout",
                struct_name
            )));
        }
    };

    // Extract the struct body between the braces
    if let Some(open) = wgsl_src[start..].find('{') {
        let start_brace = start + open;
        if let Some(close) = wgsl_src[start_brace..].find('}') {
            let struct_body = &wgsl_src[start_brace + 1..start_brace + close];
            for field in expected_fields {
                if !struct_body.contains(field) {
                    let field_name = field.split(':').next().unwrap_or(field).trim();
                    return Err(ShaderError::ValidationError(format!(
                        "{} struct mismatch: missing or wrong type for field '{}'.\n\nExpected fields in order:\n    {}",
                        struct_name,
                        field_name,
                        expected_fields.join(",\n    ")
                    )));
                }
            }
        }
    }

    if !wgsl_src.contains("@group(0) @binding(0) var<uniform> gradient:") {
        return Err(ShaderError::ValidationError(format!(
            "Missing uniform binding declaration.\n\nRequired:\n@group(0) @binding(0) var<uniform> gradient: {};",
            struct_name
        )));
    }

    Ok(())
}

/// Validate required entry points and ramp helpers
fn validate_entry_points(wgsl_src: &str) -> Result<(), ShaderError> {
    if !wgsl_src.contains("@vertex") || !wgsl_src.contains("fn vs_main") {
        return Err(ShaderError::ValidationError(
            "Shader missing vertex entry point 'fn vs_main'".to_string(),
        ));
    }

    if !wgsl_src.contains("@fragment") || !wgsl_src.contains("fn fs_main") {
        return Err(ShaderError::ValidationError(
            "Shader missing fragment entry point 'fn fs_main'".to_string(),
        ));
    }

    for helper in ["fn interpolate_color", "fn fix_aspect_ratio"] {
        if !wgsl_src.contains(helper) {
            return Err(ShaderError::ValidationError(format!(
                "Shader missing ramp helper '{}'",
                helper
            )));
        }
    }

    Ok(())
}

/// Validate WGSL syntax and semantics with the naga parser
fn validate_wgsl_syntax(wgsl_src: &str) -> Result<(), ShaderError> {
    log::debug!("Validating WGSL with naga parser");

    let module = match naga::front::wgsl::parse_str(wgsl_src) {
        Ok(module) => module,
        Err(parse_error) => {
            let error_msg = format!("WGSL Parse Error:\n{}", parse_error.emit_to_string(wgsl_src));
            log::error!("Shader parse failed: {}", error_msg);
            return Err(ShaderError::ValidationError(error_msg));
        }
    };

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );

    if let Err(validation_error) = validator.validate(&module) {
        let error_msg = format!(
            "WGSL Validation Error:\n{}",
            validation_error.emit_to_string(wgsl_src)
        );
        log::error!("Shader validation failed: {}", error_msg);
        return Err(ShaderError::ValidationError(error_msg));
    }

    log::debug!("Naga validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::shader_constants::composed_source;

    #[test]
    fn test_validate_empty_shader() {
        let result = validate_gradient_shader(GradientKind::Axial, "");
        assert!(result.is_err());
    }

    #[test]
    fn test_composed_sources_all_validate() {
        for kind in GradientKind::ALL {
            let source = composed_source(kind);
            validate_gradient_shader(kind, &source)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", kind, e));
        }
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        // A radial shader does not carry the axial uniforms struct
        let source = composed_source(GradientKind::Radial);
        let result = validate_gradient_shader(GradientKind::Axial, &source);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_helper_is_rejected() {
        let source = composed_source(GradientKind::Sweep).replace("fn fix_aspect_ratio", "fn fix_aspect");
        let result = validate_gradient_shader(GradientKind::Sweep, &source);
        assert!(result.is_err());
    }

    #[test]
    fn test_broken_syntax_reaches_naga() {
        let source = format!("{}\nfn broken( {{", composed_source(GradientKind::Axial));
        let result = validate_gradient_shader(GradientKind::Axial, &source);
        match result {
            Err(ShaderError::ValidationError(msg)) => assert!(msg.contains("Parse Error")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
