use super::helpers::{
    color_pass, make_post_pipeline, sampler_entry, texture_entry, uniform_buffer, uniform_entry,
};
use super::targets::RenderTargets;

/// Uniforms shared by the bright, blur and composite passes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) aperture: f32,
    pub(crate) blur_dir: [f32; 2],
    pub(crate) bloom_strength: f32,
    pub(crate) threshold: f32,
    pub(crate) vignette: f32,
    pub(crate) grain: f32,
    pub(crate) _pad: [f32; 2],
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    // One buffer per pass so each sees its own values within a single submit.
    pub(crate) uniforms_main: wgpu::Buffer,
    pub(crate) uniforms_blur_h: wgpu::Buffer,
    pub(crate) uniforms_blur_v: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline =
        make_post_pipeline(device, &pl_bright_blur, post_shader, "fs_bright", bloom_format, None);
    let blur_pipeline =
        make_post_pipeline(device, &pl_bright_blur, post_shader, "fs_blur", bloom_format, None);
    let composite_pipeline = make_post_pipeline(
        device,
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniforms_main: uniform_buffer::<PostUniforms>(device, "post_uniforms_main"),
        uniforms_blur_h: uniform_buffer::<PostUniforms>(device, "post_uniforms_blur_h"),
        uniforms_blur_v: uniform_buffer::<PostUniforms>(device, "post_uniforms_blur_v"),
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

fn source_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: Option<&wgpu::Buffer>,
) -> wgpu::BindGroup {
    let mut entries = vec![
        wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(view),
        },
        wgpu::BindGroupEntry {
            binding: 1,
            resource: wgpu::BindingResource::Sampler(sampler),
        },
    ];
    if let Some(buf) = uniforms {
        entries.push(wgpu::BindGroupEntry {
            binding: 2,
            resource: buf.as_entire_binding(),
        });
    }
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

/// Bind groups referencing the current offscreen targets; rebuilt on resize.
pub(crate) fn build_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> PostBindGroups {
    PostBindGroups {
        hdr: source_group(
            device,
            "bg_hdr",
            &post.bgl0,
            &targets.hdr_view,
            sampler,
            Some(&post.uniforms_main),
        ),
        from_bloom_a: source_group(
            device,
            "bg_from_bloom_a",
            &post.bgl0,
            &targets.bloom_a_view,
            sampler,
            Some(&post.uniforms_blur_h),
        ),
        from_bloom_b: source_group(
            device,
            "bg_from_bloom_b",
            &post.bgl0,
            &targets.bloom_b_view,
            sampler,
            Some(&post.uniforms_blur_v),
        ),
        bloom_a_only: source_group(
            device,
            "bg_bloom_a_only",
            &post.bgl1,
            &targets.bloom_a_view,
            sampler,
            None,
        ),
    }
}

pub(crate) fn write_uniforms(queue: &wgpu::Queue, post: &PostResources, main: PostUniforms) {
    let half = [main.resolution[0] * 0.5, main.resolution[1] * 0.5];
    let blur = |dir: [f32; 2]| PostUniforms {
        resolution: half,
        blur_dir: dir,
        ..main
    };
    queue.write_buffer(&post.uniforms_main, 0, bytemuck::bytes_of(&main));
    queue.write_buffer(&post.uniforms_blur_h, 0, bytemuck::bytes_of(&blur([1.0, 0.0])));
    queue.write_buffer(&post.uniforms_blur_v, 0, bytemuck::bytes_of(&blur([0.0, 1.0])));
}

/// One fullscreen triangle from `sources` into `target`.
struct PostPass<'p> {
    label: &'static str,
    target: &'p wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &'p wgpu::RenderPipeline,
    sources: &'p wgpu::BindGroup,
    bloom: Option<&'p wgpu::BindGroup>,
}

/// Bright pass, separable blur, then the composite onto `output`.
pub(crate) fn encode_chain(
    encoder: &mut wgpu::CommandEncoder,
    post: &PostResources,
    groups: &PostBindGroups,
    targets: &RenderTargets,
    output: &wgpu::TextureView,
    output_clear: wgpu::Color,
) {
    let passes = [
        PostPass {
            label: "bright_pass",
            target: &targets.bloom_a_view,
            clear: wgpu::Color::BLACK,
            pipeline: &post.bright_pipeline,
            sources: &groups.hdr,
            bloom: None,
        },
        PostPass {
            label: "blur_h",
            target: &targets.bloom_b_view,
            clear: wgpu::Color::BLACK,
            pipeline: &post.blur_pipeline,
            sources: &groups.from_bloom_a,
            bloom: None,
        },
        PostPass {
            label: "blur_v",
            target: &targets.bloom_a_view,
            clear: wgpu::Color::BLACK,
            pipeline: &post.blur_pipeline,
            sources: &groups.from_bloom_b,
            bloom: None,
        },
        PostPass {
            label: "composite",
            target: output,
            clear: output_clear,
            pipeline: &post.composite_pipeline,
            sources: &groups.hdr,
            bloom: Some(&groups.bloom_a_only),
        },
    ];
    for pass in &passes {
        let mut rpass = color_pass(encoder, pass.label, pass.target, pass.clear);
        rpass.set_pipeline(pass.pipeline);
        rpass.set_bind_group(0, pass.sources, &[]);
        if let Some(bloom) = pass.bloom {
            rpass.set_bind_group(1, bloom, &[]);
        }
        rpass.draw(0..3, 0..1);
    }
}
