use super::helpers::{uniform_buffer, uniform_entry, HDR_FORMAT};
use crate::core::RenderInstance;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) time: f32,
    pub(crate) _pad: [f32; 3],
}

/// Per-instance vertex data: model matrix columns, rgb + opacity, emissive.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) params: [f32; 4],
}

impl From<&RenderInstance> for InstanceRaw {
    fn from(inst: &RenderInstance) -> Self {
        let size = Vec3::new(
            inst.half_size[0] * inst.scale,
            inst.half_size[1] * inst.scale,
            1.0,
        );
        let rot = Quat::from_euler(EulerRot::XYZ, inst.rotation.x, inst.rotation.y, inst.rotation.z);
        let model = Mat4::from_scale_rotation_translation(size, rot, inst.position);
        Self {
            model: model.to_cols_array_2d(),
            color: [inst.color[0], inst.color[1], inst.color[2], inst.opacity.clamp(0.0, 1.0)],
            params: [inst.emissive, 0.0, 0.0, 0.0],
        }
    }
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    0 => Float32x4,
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
];

const INITIAL_CAPACITY: usize = 64;

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
    packed: Vec<InstanceRaw>,
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_instances"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_scene_resources(device: &wgpu::Device) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/scene.wgsl").into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[uniform_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let uniform_buffer = uniform_buffer::<SceneUniforms>(device, "scene_uniforms");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    SceneResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer: create_instance_buffer(device, INITIAL_CAPACITY),
        capacity: INITIAL_CAPACITY,
        packed: Vec::with_capacity(INITIAL_CAPACITY),
    }
}

impl SceneResources {
    /// Pack instances far-to-near (no depth buffer; blending needs the order)
    /// and upload them. Returns the instance count to draw.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[RenderInstance],
    ) -> u32 {
        self.packed.clear();
        self.packed.extend(
            instances
                .iter()
                .filter(|i| i.opacity > 0.0)
                .map(InstanceRaw::from),
        );
        self.packed
            .sort_by(|a, b| a.model[3][2].total_cmp(&b.model[3][2]));
        if self.packed.len() > self.capacity {
            self.capacity = self.packed.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.capacity);
        }
        if !self.packed.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.packed));
        }
        self.packed.len() as u32
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, count: u32) {
        if count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..count);
    }
}
