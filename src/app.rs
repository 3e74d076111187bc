// src/app.rs

use std::sync::Arc;
use winit::{event::WindowEvent, window::Window};
use room_raycaster::demo_scene::create_demo_scene;
use room_raycaster::draw::build_draw_list;
use room_raycaster::{OcclusionEngine, RaycastConfig, Rgba, Scene};
use crate::engine_lib::LightController;
use crate::error::AppError;
use crate::rendering_lib::batch::srgb_to_linear;
use crate::rendering_lib::{Renderer, WGSL_SHADER_SOURCE};
use crate::ui::build_ui;

pub struct RaycastApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: Renderer,
    raycast_config: RaycastConfig,
    clear_color: wgpu::Color,
    scene: Scene,
    occlusion: OcclusionEngine,
    light_controller: LightController,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl RaycastApp {
    pub async fn new(window: Arc<Window>, raycast_config: RaycastConfig) -> Result<Self, AppError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(AppError::NoAdapter)?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(AppError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // Fifo paces frames to the display.
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = Renderer::new(
            &device, config.format, WGSL_SHADER_SOURCE,
            config.width as f32, config.height as f32,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1);

        let scene = create_demo_scene(&raycast_config, config.width, config.height);
        let occlusion = OcclusionEngine::new(raycast_config.num_rays);
        let clear_color = to_clear_color(raycast_config.background_color, surface_format.is_srgb());

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            renderer,
            raycast_config,
            clear_color,
            scene,
            occlusion,
            light_controller: LightController::new(),
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> { self.size }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.scene.resize(new_size.width, new_size.height);
            let (width, height) = self.scene.size();
            log::debug!(
                "Resized to {}x{}, max ray distance {}",
                width,
                height,
                self.scene.max_distance()
            );
        }
    }

    /// Applies input to the light, then recomputes every ray for this frame.
    pub fn update(&mut self) {
        self.light_controller.apply_to_scene(&mut self.scene);
        self.occlusion.compute(&self.scene);
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        let commands =
            build_draw_list(&self.scene, self.occlusion.rays(), self.raycast_config.ray_color);
        self.renderer.render_frame(
            &self.queue, &mut encoder, &view,
            &commands,
            self.config.width as f32, self.config.height as f32,
            self.clear_color,
        );

        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| { build_ui(ctx); });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    /// Returns true when the event was consumed by the overlay or the light controller.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        let egui_consumed = self.egui_state.on_window_event(window, event).consumed;
        let controller_consumed = self.light_controller.handle_window_event(event, window);
        if self.light_controller.take_fullscreen_toggled() {
            self.resize(window.inner_size());
        }
        egui_consumed || controller_consumed
    }
}

fn to_clear_color(color: Rgba, srgb_surface: bool) -> wgpu::Color {
    let [r, g, b, a] = color.to_f32_array();
    let channel = |c: f32| if srgb_surface { srgb_to_linear(c) as f64 } else { c as f64 };
    wgpu::Color { r: channel(r), g: channel(g), b: channel(b), a: a as f64 }
}
