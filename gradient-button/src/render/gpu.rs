//! GPU renderer implementation using wgpu

use std::sync::Arc;
use wgpu::*;
use winit::window::Window;
use crate::core::Color;
use crate::error::{AppError, Result};
use crate::render::{RenderList, Tessellator, Vertex};

const INITIAL_VERTEX_CAPACITY: u64 = 1024;
const INITIAL_INDEX_CAPACITY: u64 = 1536;

/// What the frame loop should do after a frame was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// The frame was dropped; try again next interval
    Skipped,
    /// The device cannot continue
    Fatal,
}

/// GPU state and resources
pub struct GpuRenderer {
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    config: SurfaceConfiguration,
    pipeline: RenderPipeline,
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    tessellator: Tessellator,
    size: (u32, u32),
    scale_factor: f64,
}

impl GpuRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let instance = Instance::new(InstanceDescriptor {
            backends: Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(AppError::NoAdapter)?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("Gradient Button Device"),
                    required_features: Features::empty(),
                    required_limits: Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = pick_surface_format(&surface_caps.formats)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(CompositeAlphaMode::Auto);

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::AutoNoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Gradient Button Shader"),
            source: ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Gradient Button Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Gradient Button Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: config.format,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = create_buffer(&device, "Vertex Buffer", vertex_bytes(INITIAL_VERTEX_CAPACITY), BufferUsages::VERTEX);
        let index_buffer = create_buffer(&device, "Index Buffer", index_bytes(INITIAL_INDEX_CAPACITY), BufferUsages::INDEX);

        let size = (config.width, config.height);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            index_buffer,
            tessellator: Tessellator::new(logical_viewport(size, scale_factor)),
            size,
            scale_factor,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn resize(&mut self, new_size: (u32, u32)) {
        if new_size.0 > 0 && new_size.1 > 0 {
            self.size = new_size;
            self.config.width = new_size.0;
            self.config.height = new_size.1;
            self.surface.configure(&self.device, &self.config);
            self.tessellator.set_viewport(logical_viewport(self.size, self.scale_factor));
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
        self.tessellator.set_viewport(logical_viewport(self.size, self.scale_factor));
    }

    /// Clear, draw and present one frame
    pub fn render(&mut self, render_list: &RenderList) -> FrameOutcome {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                self.resize(self.size);
                return FrameOutcome::Skipped;
            }
            Err(SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory");
                return FrameOutcome::Fatal;
            }
            Err(e) => {
                log::warn!("dropping frame: {e}");
                return FrameOutcome::Skipped;
            }
        };
        let view = output.texture.create_view(&TextureViewDescriptor::default());

        self.tessellator.build(render_list);
        self.upload();

        let mut encoder = self.device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(clear_color(render_list.clear_color)),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let index_count = self.tessellator.indices.len() as u32;
            if index_count > 0 {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.set_index_buffer(self.index_buffer.slice(..), IndexFormat::Uint32);
                render_pass.draw_indexed(0..index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        FrameOutcome::Presented
    }

    /// Copy tessellated geometry to the GPU, growing buffers as needed
    fn upload(&mut self) {
        let vertices = &self.tessellator.vertices;
        let indices = &self.tessellator.indices;
        if vertices.is_empty() {
            return;
        }

        let needed = vertex_bytes(vertices.len() as u64);
        if needed > self.vertex_buffer.size() {
            self.vertex_buffer = create_buffer(&self.device, "Vertex Buffer", needed.next_power_of_two(), BufferUsages::VERTEX);
        }
        let needed = index_bytes(indices.len() as u64);
        if needed > self.index_buffer.size() {
            self.index_buffer = create_buffer(&self.device, "Index Buffer", needed.next_power_of_two(), BufferUsages::INDEX);
        }

        self.queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        self.queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(indices));
    }
}

impl Drop for GpuRenderer {
    fn drop(&mut self) {
        log::debug!("renderer destroyed");
    }
}

/// Colours are written as-is; prefer a target that won't re-encode them
fn pick_surface_format(formats: &[TextureFormat]) -> Result<TextureFormat> {
    formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first())
        .copied()
        .ok_or(AppError::UnsupportedSurface)
}

fn create_buffer(device: &Device, label: &str, size: u64, usage: BufferUsages) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size,
        usage: usage | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn vertex_bytes(count: u64) -> u64 {
    count * std::mem::size_of::<Vertex>() as u64
}

fn index_bytes(count: u64) -> u64 {
    count * std::mem::size_of::<u32>() as u64
}

/// Physical surface size expressed in logical pixels
pub fn logical_viewport(size: (u32, u32), scale_factor: f64) -> (f32, f32) {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    ((size.0 as f64 / scale) as f32, (size.1 as f64 / scale) as f32)
}

fn clear_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_array();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_viewport_divides_by_scale() {
        assert_eq!(logical_viewport((1600, 1200), 2.0), (800.0, 600.0));
        assert_eq!(logical_viewport((800, 600), 1.0), (800.0, 600.0));
        assert_eq!(logical_viewport((800, 600), 0.0), (800.0, 600.0));
    }

    #[test]
    fn test_clear_color_white() {
        let c = clear_color(Color::WHITE);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_surface_format_prefers_non_srgb() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(pick_surface_format(&formats).unwrap(), TextureFormat::Bgra8Unorm);

        let srgb_only = [TextureFormat::Rgba8UnormSrgb];
        assert_eq!(pick_surface_format(&srgb_only).unwrap(), TextureFormat::Rgba8UnormSrgb);
    }

    #[test]
    fn test_no_surface_format_is_unsupported_surface() {
        assert!(matches!(pick_surface_format(&[]), Err(AppError::UnsupportedSurface)));
        assert!(AppError::UnsupportedSurface.to_string().contains("surface"));
    }

    #[test]
    fn test_buffer_sizes_are_copy_aligned() {
        assert_eq!(vertex_bytes(1) % COPY_BUFFER_ALIGNMENT, 0);
        assert_eq!(index_bytes(3) % COPY_BUFFER_ALIGNMENT, 0);
    }
}
