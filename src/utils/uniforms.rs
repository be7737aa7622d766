//! Host-side mirrors of the WGSL gradient uniform structs
//!
//! These structs are uploaded with `bytemuck` and reinterpreted byte-for-byte
//! by the shaders, so field order, sizes, and padding must match the WGSL
//! declarations in `shader_constants.rs` exactly. The layout tests below pin
//! every offset; `shader_validator.rs` checks the WGSL side field by field.

/// Maximum number of gradient stops a single draw supports
pub const MAX_STOPS: usize = 32;

/// Size of the largest per-kind uniform struct (axial/spiral, 32 bytes)
pub const GRADIENT_UNIFORMS_SIZE: u64 = 32;

// WGSL uniform layout: vec2<f32> aligns to 8, and a struct in the uniform
// address space is sized to a multiple of 16, hence the trailing pads.

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AxialUniforms {
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub stops: u32,
    pub _pad0: [u32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RadialUniforms {
    pub center: [f32; 2],
    pub radius: f32,
    pub stops: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpiralUniforms {
    pub center: [f32; 2],
    pub angle: f32,
    pub scale: f32,
    pub stops: u32,
    pub _pad0: [u32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SweepUniforms {
    pub center: [f32; 2],
    pub angle: f32,
    pub stops: u32,
}

/// Viewport size for aspect-ratio correction; fragment shaders have no
/// implicit render-target size, so it rides in its own small uniform.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniforms {
    pub resolution: [f32; 2],
    pub _pad0: [f32; 2],
}
