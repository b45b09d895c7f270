use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD, CLEAR_RGB, GRAIN_STRENGTH};
use crate::core::RenderInstance;
use glam::Mat4;
use web_sys as web;

mod helpers;
mod post;
mod scene;
mod targets;

use helpers::HDR_FORMAT;
use post::{PostBindGroups, PostResources, PostUniforms};
use scene::{SceneResources, SceneUniforms};
use targets::RenderTargets;

/// Everything the renderer needs from the session for one frame.
pub struct FrameView<'f> {
    pub view_proj: Mat4,
    pub instances: &'f [RenderInstance],
    pub aperture: f32,
    pub vignette: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    groups: PostBindGroups,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene = scene::create_scene_resources(&device);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/post.wgsl").into()),
        });
        let linear_sampler = helpers::linear_clamp_sampler(&device);
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let groups = post::build_bind_groups(&device, &post, &linear_sampler, &targets);

        log::info!("[gpu] surface {}x{} format {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            linear_sampler,
            post,
            groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Offscreen targets follow the surface; bind groups reference their views
            self.targets.recreate(&self.device, width, height);
            self.groups =
                post::build_bind_groups(&self.device, &self.post, &self.linear_sampler, &self.targets);
        }
    }

    pub fn render(&mut self, dt_sec: f32, frame_view: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);

        let count = self
            .scene
            .upload(&self.device, &self.queue, frame_view.instances);
        let su = SceneUniforms {
            view_proj: frame_view.view_proj.to_cols_array_2d(),
            time: self.time_accum,
            _pad: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&su));
        post::write_uniforms(
            &self.queue,
            &self.post,
            PostUniforms {
                resolution: [self.width as f32, self.height as f32],
                time: self.time_accum,
                aperture: frame_view.aperture.clamp(0.0, 1.0),
                blur_dir: [0.0, 0.0],
                bloom_strength: BLOOM_STRENGTH,
                threshold: BLOOM_THRESHOLD,
                vignette: frame_view.vignette,
                grain: GRAIN_STRENGTH,
                _pad: [0.0; 2],
            },
        );

        let frame = self.surface.get_current_texture()?;
        let swapchain_view = frame.texture.create_view(&Default::default());
        let mut encoder = self.device.create_command_encoder(&Default::default());
        {
            let hdr = &self.targets.hdr_view;
            let mut rpass = helpers::color_pass(&mut encoder, "scene_pass", hdr, self.clear_color);
            self.scene.draw(&mut rpass, count);
        }
        post::encode_chain(
            &mut encoder,
            &self.post,
            &self.groups,
            &self.targets,
            &swapchain_view,
            self.clear_color,
        );
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
