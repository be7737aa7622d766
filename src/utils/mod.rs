pub mod errors;
pub mod export;
pub mod gradient;
pub mod notification;
pub mod pipeline;
pub mod preset;
pub mod ramp;
pub mod shader_constants;
pub mod shader_validator;
pub mod uniforms;

pub use errors::{format_shader_error, ShaderError};
pub use gradient::{Configuration, Gradient, GradientKind};
pub use notification::NotificationManager;
pub use pipeline::{GradientCallback, GradientPipeline};
pub use preset::GradientPreset;
pub use shader_validator::validate_gradient_shader;
pub use uniforms::MAX_STOPS;
