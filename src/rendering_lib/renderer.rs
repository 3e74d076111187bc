// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use room_raycaster::draw::DrawCommand;

use super::{FrameBatch, Vertex};

// 27 obstacles + light + 360 rays fit with plenty of headroom.
const RENDERER_MAX_VERTICES: usize = 16 * 1024;
const RENDERER_MAX_INDICES: usize = 48 * 1024;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ScreenDimensionsUniform {
    width: f32,
    height: f32,
    _padding1: f32,
    _padding2: f32,
}

impl ScreenDimensionsUniform {
    fn new(width: f32, height: f32) -> Self {
        Self { width, height, _padding1: 0.0, _padding2: 0.0 }
    }
}

/// Draws a frame's [`DrawCommand`]s as one indexed, alpha-blended triangle list.
pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,

    batch: FrameBatch,

    screen_uniform_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        initial_screen_width: f32,
        initial_screen_height: f32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Raycast Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let screen_uniform_data = ScreenDimensionsUniform::new(initial_screen_width, initial_screen_height);
        let screen_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Dimensions Uniform Buffer"),
            contents: bytemuck::bytes_of(&screen_uniform_data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("screen_dimensions_bind_group_layout"),
        });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_uniform_buffer.as_entire_binding(),
            }],
            label: Some("screen_dimensions_bind_group"),
        });

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Raycast Pipeline Layout"),
            bind_group_layouts: &[&screen_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Raycast Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Vertex Buffer"),
            size: (RENDERER_MAX_VERTICES * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // One spare slot for the even-length padding below.
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Index Buffer"),
            size: ((RENDERER_MAX_INDICES + 1) * std::mem::size_of::<u16>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            batch: FrameBatch::new(RENDERER_MAX_VERTICES, RENDERER_MAX_INDICES, surface_format.is_srgb()),
            screen_uniform_buffer,
            screen_bind_group,
        }
    }

    pub fn render_frame(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        commands: &[DrawCommand],
        screen_width: f32,
        screen_height: f32,
        clear_color: wgpu::Color,
    ) {
        let screen_uniform_data = ScreenDimensionsUniform::new(screen_width, screen_height);
        queue.write_buffer(&self.screen_uniform_buffer, 0, bytemuck::bytes_of(&screen_uniform_data));

        self.batch.clear();
        for command in commands {
            self.batch.push_command(command);
        }
        if self.batch.dropped_polygons() > 0 {
            log::warn!(
                "Frame exceeds renderer capacity, dropped {} polygons",
                self.batch.dropped_polygons()
            );
        }

        // write_buffer needs 4-byte multiples; u16 indices are padded to an even count.
        let mut padded_index_count = self.batch.indices().len();
        if !self.batch.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(self.batch.vertices()));
            let mut padded_indices = self.batch.indices().to_vec();
            if padded_indices.len() % 2 == 1 {
                padded_indices.push(0);
            }
            padded_index_count = padded_indices.len();
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&padded_indices));
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Raycast Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Clear(clear_color), store: wgpu::StoreOp::Store },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if self.batch.is_empty() {
            return;
        }

        let vertex_bytes = (self.batch.vertices().len() * std::mem::size_of::<Vertex>()) as u64;
        let index_bytes = (padded_index_count * std::mem::size_of::<u16>()) as u64;

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..vertex_bytes));
        render_pass.set_index_buffer(self.index_buffer.slice(..index_bytes), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.batch.indices().len() as u32, 0, 0..1);
    }
}
