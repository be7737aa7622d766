use std::sync::Arc;

use eframe::epaint;
use eframe::wgpu::{BindGroup, Buffer, Device, RenderPipeline};

use crate::utils::gradient::{Configuration, Gradient, GradientKind};
use crate::utils::shader_constants::composed_source;
use crate::utils::shader_validator::validate_gradient_shader;
use crate::utils::uniforms::{
    AxialUniforms, RadialUniforms, SpiralUniforms, SweepUniforms, ViewUniforms,
    GRADIENT_UNIFORMS_SIZE, MAX_STOPS,
};
use crate::utils::ShaderError;

/// Render pipeline and buffers for one gradient kind.
///
/// Buffer bindings mirror the shader prelude: 0 = per-kind gradient
/// uniforms, 1 = stop colors, 2 = stop locations, 3 = view uniforms. The
/// uniform buffer is sized for the largest kind so every kind shares the
/// same creation path.
pub struct GradientPipeline {
    pub kind: GradientKind,
    pub pipeline: RenderPipeline,
    pub uniform_buffer: Buffer,
    pub colors_buffer: Buffer,
    pub locations_buffer: Buffer,
    pub view_buffer: Buffer,
    pub bind_group: BindGroup,
}

impl GradientPipeline {
    pub fn new(
        device: &Device,
        format: egui_wgpu::wgpu::TextureFormat,
        kind: GradientKind,
    ) -> Result<Self, ShaderError> {
        let wgsl_src = composed_source(kind);
        log::debug!(
            "Creating {} gradient pipeline ({} bytes of WGSL)",
            kind.label(),
            wgsl_src.len()
        );

        validate_gradient_shader(kind, &wgsl_src)?;

        let shader = device.create_shader_module(egui_wgpu::wgpu::ShaderModuleDescriptor {
            label: Some("gradient_shader"),
            source: egui_wgpu::wgpu::ShaderSource::Wgsl(wgsl_src.into()),
        });

        let uniform_buffer = device.create_buffer(&egui_wgpu::wgpu::BufferDescriptor {
            label: Some("gradient_uniforms"),
            size: GRADIENT_UNIFORMS_SIZE,
            usage: egui_wgpu::wgpu::BufferUsages::COPY_DST | egui_wgpu::wgpu::BufferUsages::UNIFORM,
            mapped_at_creation: false,
        });

        let colors_buffer = device.create_buffer(&egui_wgpu::wgpu::BufferDescriptor {
            label: Some("gradient_stop_colors"),
            size: (std::mem::size_of::<[f32; 4]>() * MAX_STOPS) as u64,
            usage: egui_wgpu::wgpu::BufferUsages::COPY_DST | egui_wgpu::wgpu::BufferUsages::STORAGE,
            mapped_at_creation: false,
        });

        let locations_buffer = device.create_buffer(&egui_wgpu::wgpu::BufferDescriptor {
            label: Some("gradient_stop_locations"),
            size: (std::mem::size_of::<f32>() * MAX_STOPS) as u64,
            usage: egui_wgpu::wgpu::BufferUsages::COPY_DST | egui_wgpu::wgpu::BufferUsages::STORAGE,
            mapped_at_creation: false,
        });

        let view_buffer = device.create_buffer(&egui_wgpu::wgpu::BufferDescriptor {
            label: Some("gradient_view_uniforms"),
            size: std::mem::size_of::<ViewUniforms>() as u64,
            usage: egui_wgpu::wgpu::BufferUsages::COPY_DST | egui_wgpu::wgpu::BufferUsages::UNIFORM,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&egui_wgpu::wgpu::BindGroupLayoutDescriptor {
                label: Some("gradient_bgl"),
                entries: &[
                    egui_wgpu::wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: egui_wgpu::wgpu::ShaderStages::FRAGMENT,
                        ty: egui_wgpu::wgpu::BindingType::Buffer {
                            ty: egui_wgpu::wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    egui_wgpu::wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: egui_wgpu::wgpu::ShaderStages::FRAGMENT,
                        ty: egui_wgpu::wgpu::BindingType::Buffer {
                            ty: egui_wgpu::wgpu::BufferBindingType::Storage { read_only: true },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    egui_wgpu::wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: egui_wgpu::wgpu::ShaderStages::FRAGMENT,
                        ty: egui_wgpu::wgpu::BindingType::Buffer {
                            ty: egui_wgpu::wgpu::BufferBindingType::Storage { read_only: true },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    egui_wgpu::wgpu::BindGroupLayoutEntry {
                        binding: 3,
                        visibility: egui_wgpu::wgpu::ShaderStages::FRAGMENT,
                        ty: egui_wgpu::wgpu::BindingType::Buffer {
                            ty: egui_wgpu::wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            });

        let bind_group = device.create_bind_group(&egui_wgpu::wgpu::BindGroupDescriptor {
            label: Some("gradient_bg"),
            layout: &bind_group_layout,
            entries: &[
                egui_wgpu::wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                egui_wgpu::wgpu::BindGroupEntry {
                    binding: 1,
                    resource: colors_buffer.as_entire_binding(),
                },
                egui_wgpu::wgpu::BindGroupEntry {
                    binding: 2,
                    resource: locations_buffer.as_entire_binding(),
                },
                egui_wgpu::wgpu::BindGroupEntry {
                    binding: 3,
                    resource: view_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout =
            device.create_pipeline_layout(&egui_wgpu::wgpu::PipelineLayoutDescriptor {
                label: Some("gradient_pipeline_layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline = device.create_render_pipeline(&egui_wgpu::wgpu::RenderPipelineDescriptor {
            label: Some("gradient_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: egui_wgpu::wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: egui_wgpu::wgpu::PipelineCompilationOptions::default(),
                buffers: &[],
            },
            fragment: Some(egui_wgpu::wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: egui_wgpu::wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(egui_wgpu::wgpu::ColorTargetState {
                    format,
                    blend: Some(egui_wgpu::wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: egui_wgpu::wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: egui_wgpu::wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: egui_wgpu::wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::info!(
            "{} gradient pipeline created (format: {:?})",
            kind.label(),
            format
        );

        Ok(Self {
            kind,
            pipeline,
            uniform_buffer,
            colors_buffer,
            locations_buffer,
            view_buffer,
            bind_group,
        })
    }
}

/// Pack a configuration and stop count into the 32-byte uniform slot.
///
/// The smaller kinds (radial, sweep) occupy the prefix; the tail stays
/// zeroed, matching the device buffer size.
pub(crate) fn encode_gradient_uniforms(
    configuration: &Configuration,
    stops: u32,
) -> [u8; GRADIENT_UNIFORMS_SIZE as usize] {
    let mut bytes = [0u8; GRADIENT_UNIFORMS_SIZE as usize];
    match *configuration {
        Configuration::Axial { start, end } => {
            let uniforms = AxialUniforms {
                start,
                end,
                stops,
                _pad0: [0; 3],
            };
            bytes.copy_from_slice(bytemuck::bytes_of(&uniforms));
        }
        Configuration::Radial { center, radius } => {
            let uniforms = RadialUniforms {
                center,
                radius,
                stops,
            };
            bytes[..16].copy_from_slice(bytemuck::bytes_of(&uniforms));
        }
        Configuration::Sweep { center, angle } => {
            let uniforms = SweepUniforms {
                center,
                angle,
                stops,
            };
            bytes[..16].copy_from_slice(bytemuck::bytes_of(&uniforms));
        }
        Configuration::Spiral {
            center,
            angle,
            scale,
        } => {
            let uniforms = SpiralUniforms {
                center,
                angle,
                scale,
                stops,
                _pad0: [0; 3],
            };
            bytes.copy_from_slice(bytemuck::bytes_of(&uniforms));
        }
    }
    bytes
}

/// Per-frame paint callback rendering the gradient into its allotted rect
pub struct GradientCallback {
    pub pipeline: Arc<GradientPipeline>,
    pub gradient: Gradient,
    pub configuration: Configuration,
    /// Size of the preview rect in physical pixels
    pub resolution: [f32; 2],
}

impl egui_wgpu::CallbackTrait for GradientCallback {
    fn prepare(
        &self,
        _device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _encoder: &mut eframe::wgpu::CommandEncoder,
        _resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        debug_assert_eq!(self.configuration.kind(), self.pipeline.kind);

        let uniforms = encode_gradient_uniforms(&self.configuration, self.gradient.stop_count());
        queue.write_buffer(&self.pipeline.uniform_buffer, 0, &uniforms);

        queue.write_buffer(
            &self.pipeline.colors_buffer,
            0,
            bytemuck::cast_slice(self.gradient.colors()),
        );
        queue.write_buffer(
            &self.pipeline.locations_buffer,
            0,
            bytemuck::cast_slice(self.gradient.locations()),
        );

        let view = ViewUniforms {
            resolution: self.resolution,
            _pad0: [0.0, 0.0],
        };
        queue.write_buffer(&self.pipeline.view_buffer, 0, bytemuck::bytes_of(&view));

        Vec::new()
    }

    fn paint(
        &self,
        _info: epaint::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _resources: &egui_wgpu::CallbackResources,
    ) {
        render_pass.set_pipeline(&self.pipeline.pipeline);
        render_pass.set_bind_group(0, &self.pipeline.bind_group, &[]);
        render_pass.draw(0..3, 0..1); // full-screen triangle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::gradient::GradientKind;

    #[test]
    fn test_axial_uniforms_fill_the_slot() {
        let config = Configuration::Axial {
            start: [0.0, 0.0],
            end: [1.0, 1.0],
        };
        let bytes = encode_gradient_uniforms(&config, 6);
        assert_eq!(&bytes[16..20], &6u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &1.0f32.to_le_bytes()); // end.x
    }

    #[test]
    fn test_radial_uniforms_occupy_prefix() {
        let config = Configuration::Radial {
            center: [0.5, 0.5],
            radius: 0.25,
        };
        let bytes = encode_gradient_uniforms(&config, 3);
        assert_eq!(&bytes[8..12], &0.25f32.to_le_bytes());
        assert_eq!(&bytes[12..16], &3u32.to_le_bytes());
        assert!(bytes[16..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_spiral_uniforms_field_order() {
        let config = Configuration::Spiral {
            center: [0.5, 0.5],
            angle: 1.0,
            scale: 2.0,
        };
        let bytes = encode_gradient_uniforms(&config, 4);
        assert_eq!(&bytes[8..12], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[12..16], &2.0f32.to_le_bytes());
        assert_eq!(&bytes[16..20], &4u32.to_le_bytes());
    }

    #[test]
    fn test_sweep_uniforms_stop_count_position() {
        let config = Configuration::default_for(GradientKind::Sweep);
        let bytes = encode_gradient_uniforms(&config, 9);
        assert_eq!(&bytes[12..16], &9u32.to_le_bytes());
    }
}
