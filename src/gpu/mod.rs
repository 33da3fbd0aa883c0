//! wgpu renderer for the galaxy scene.
//!
//! One render pass draws, in order: the core sphere (the only depth writer),
//! its additive glow shell, the nebula sprites, and finally the stars as
//! instanced camera-facing quads. Star positions are re-uploaded whenever
//! the animator marks the point cloud dirty; the static per-star color and
//! size live in a second instance buffer that is only rebuilt when the scene
//! generation changes.

mod camera;
mod mesh;
#[cfg(feature = "egui")]
pub mod overlay;

pub use camera::Camera;
pub use mesh::{SphereMesh, SphereVertex};

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::animator::FrameOutput;
use crate::color::Color;
use crate::error::GpuError;
use crate::scene::{NebulaGroup, PointCloud, Scene};
use crate::textures::{self, FilterMode, TextureConfig};

/// WGSL source of every pipeline.
pub const SHADER_SOURCE: &str = include_str!("galaxy.wgsl");

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const BACKGROUND: Color = Color::from_hex(0x000005);
const SPHERE_SEGMENTS: u32 = 32;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub viewport: [f32; 2],
    pub time: f32,
    pub flare: f32,
    pub nebula_rotation: [f32; 2],
    pub core_scale: f32,
    pub light: f32,
    pub core_color: [f32; 4],
}

impl Uniforms {
    pub fn new(
        camera: &Camera,
        viewport: (u32, u32),
        frame: &FrameOutput,
        nebula: Option<&NebulaGroup>,
        core_color: Color,
    ) -> Self {
        let (width, height) = (viewport.0.max(1) as f32, viewport.1.max(1) as f32);
        let core = core_color.to_linear();
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection(width / height).to_cols_array_2d(),
            viewport: [width, height],
            time: frame.time,
            flare: frame.flare,
            nebula_rotation: nebula.map_or([0.0; 2], |n| n.rotation.to_array()),
            core_scale: frame.core_scale,
            light: frame.light_intensity,
            core_color: [core.x, core.y, core.z, 1.0],
        }
    }
}

/// Static per-star attributes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StarAttributes {
    pub color: [f32; 3],
    pub size: f32,
}

/// One nebula sprite as the shader sees it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct NebulaInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Linear color and rendered size of every star.
pub fn star_attributes(points: &PointCloud) -> Vec<StarAttributes> {
    points
        .particles()
        .iter()
        .map(|p| StarAttributes {
            color: p.color.to_linear().to_array(),
            size: p.base_size * points.size_scale(),
        })
        .collect()
}

pub fn nebula_instances(group: &NebulaGroup) -> Vec<NebulaInstance> {
    group
        .sprites
        .iter()
        .map(|s| NebulaInstance {
            position: s.position.to_array(),
            scale: s.scale,
            color: s.color.to_linear().to_array(),
            opacity: s.opacity,
        })
        .collect()
}

/// GPU buffers of one scene generation.
struct GalaxyBuffers {
    positions: wgpu::Buffer,
    attributes: wgpu::Buffer,
    star_count: u32,
    nebula: wgpu::Buffer,
    nebula_count: u32,
}

impl GalaxyBuffers {
    fn new(device: &wgpu::Device, scene: &Scene) -> Self {
        let (positions, attributes, star_count) = match scene.points() {
            Some(points) => (
                instance_buffer(device, "Star Positions", bytemuck::cast_slice(points.rendered())),
                instance_buffer(
                    device,
                    "Star Attributes",
                    bytemuck::cast_slice(&star_attributes(points)),
                ),
                points.len() as u32,
            ),
            None => (
                instance_buffer(device, "Star Positions", &[]),
                instance_buffer(device, "Star Attributes", &[]),
                0,
            ),
        };
        let sprites = scene.nebula().map(nebula_instances).unwrap_or_default();
        let nebula = instance_buffer(device, "Nebula Instances", bytemuck::cast_slice(&sprites));

        Self {
            positions,
            attributes,
            star_count,
            nebula,
            nebula_count: sprites.len() as u32,
        }
    }

    fn destroy(&self) {
        self.positions.destroy();
        self.attributes.destroy();
        self.nebula.destroy();
    }
}

/// Owns the surface, device, pipelines and every GPU buffer.
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    depth_texture: wgpu::TextureView,
    pub camera: Camera,
    core_color: Color,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    star_pipeline: wgpu::RenderPipeline,
    nebula_pipeline: wgpu::RenderPipeline,
    core_pipeline: wgpu::RenderPipeline,
    glow_pipeline: wgpu::RenderPipeline,
    sphere_vertices: wgpu::Buffer,
    sphere_indices: wgpu::Buffer,
    sphere_index_count: u32,
    galaxy: Option<GalaxyBuffers>,
    generation: u64,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, core_color: Color) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;
        log::info!("using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = create_depth_texture(&device, &config);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let star_sprite = textures::star_sprite();
        let star_texture = upload_texture(&device, &queue, "Star Sprite", &star_sprite);
        let nebula_texture = upload_texture(&device, &queue, "Nebula Haze", &textures::nebula_haze());
        let sampler = create_sampler(&device, star_sprite.filter);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Galaxy Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                texture_entry(1),
                texture_entry(2),
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Galaxy Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&star_texture),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&nebula_texture),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Galaxy Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Galaxy Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let builder = PipelineBuilder {
            device: &device,
            layout: &layout,
            shader: &shader,
            format: config.format,
        };

        let star_position_attrs = wgpu::vertex_attr_array![0 => Float32x3];
        let star_attrs = wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32];
        let star_pipeline = builder.build(
            "Star Pipeline",
            ("vs_star", "fs_star"),
            &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vec3>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &star_position_attrs,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<StarAttributes>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &star_attrs,
                },
            ],
            Some(additive_blending()),
            false,
            None,
        );

        let nebula_attrs =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3, 3 => Float32];
        let nebula_pipeline = builder.build(
            "Nebula Pipeline",
            ("vs_nebula", "fs_nebula"),
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<NebulaInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &nebula_attrs,
            }],
            Some(additive_blending()),
            false,
            None,
        );

        let sphere_attrs = wgpu::vertex_attr_array![0 => Float32x3];
        let sphere_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &sphere_attrs,
        };
        let core_pipeline = builder.build(
            "Core Pipeline",
            ("vs_core", "fs_core"),
            std::slice::from_ref(&sphere_layout),
            Some(wgpu::BlendState::REPLACE),
            true,
            Some(wgpu::Face::Back),
        );
        let glow_pipeline = builder.build(
            "Glow Pipeline",
            ("vs_glow", "fs_glow"),
            std::slice::from_ref(&sphere_layout),
            Some(additive_blending()),
            false,
            Some(wgpu::Face::Back),
        );

        let sphere = SphereMesh::new(SPHERE_SEGMENTS, SPHERE_SEGMENTS);
        let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Vertices"),
            contents: bytemuck::cast_slice(&sphere.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Indices"),
            contents: bytemuck::cast_slice(&sphere.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            camera: Camera::new(),
            core_color,
            uniform_buffer,
            bind_group,
            star_pipeline,
            nebula_pipeline,
            core_pipeline,
            glow_pipeline,
            sphere_vertices,
            sphere_indices,
            sphere_index_count: sphere.indices.len() as u32,
            galaxy: None,
            generation: 0,
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = create_depth_texture(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size after it was lost.
    pub fn reconfigure(&mut self) {
        let size = winit::dpi::PhysicalSize::new(self.config.width, self.config.height);
        self.resize(size);
    }

    /// Bring the GPU buffers in line with `scene`.
    ///
    /// A new scene generation replaces every buffer; otherwise only the
    /// dirty star positions and the nebula instances are rewritten.
    pub fn sync_scene(&mut self, scene: &mut Scene) {
        if self.galaxy.is_none() || scene.generation() != self.generation {
            if let Some(old) = self.galaxy.take() {
                old.destroy();
            }
            self.galaxy = Some(GalaxyBuffers::new(&self.device, scene));
            self.generation = scene.generation();
            if let Some(points) = scene.points_mut() {
                points.take_dirty();
            }
            log::debug!("rebuilt galaxy buffers for generation {}", self.generation);
            return;
        }

        let Some(galaxy) = &self.galaxy else {
            return;
        };
        if let Some(points) = scene.points_mut() {
            if points.take_dirty() {
                self.queue
                    .write_buffer(&galaxy.positions, 0, bytemuck::cast_slice(points.rendered()));
            }
        }
        if let Some(group) = scene.nebula() {
            if galaxy.nebula_count > 0 {
                let sprites = nebula_instances(group);
                self.queue
                    .write_buffer(&galaxy.nebula, 0, bytemuck::cast_slice(&sprites));
            }
        }
    }

    pub fn render(&mut self, scene: &Scene, frame: &FrameOutput) -> Result<(), wgpu::SurfaceError> {
        self.render_with(scene, frame, |_, _, _, _| {})
    }

    /// Render the scene, then hand the encoder and target view to `overlay`
    /// so it can draw on top before submission.
    pub fn render_with<F>(
        &mut self,
        scene: &Scene,
        frame: &FrameOutput,
        overlay: F,
    ) -> Result<(), wgpu::SurfaceError>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let uniforms = Uniforms::new(
            &self.camera,
            (self.config.width, self.config.height),
            frame,
            scene.nebula(),
            self.core_color,
        );
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let background = BACKGROUND.to_linear();
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Galaxy Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: background.x as f64,
                            g: background.y as f64,
                            b: background.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.bind_group, &[]);

            if frame.core_visible && frame.core_scale > 0.0 {
                render_pass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
                render_pass.set_index_buffer(self.sphere_indices.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.set_pipeline(&self.core_pipeline);
                render_pass.draw_indexed(0..self.sphere_index_count, 0, 0..1);
                render_pass.set_pipeline(&self.glow_pipeline);
                render_pass.draw_indexed(0..self.sphere_index_count, 0, 0..1);
            }

            if let Some(galaxy) = &self.galaxy {
                if galaxy.nebula_count > 0 {
                    render_pass.set_pipeline(&self.nebula_pipeline);
                    render_pass.set_vertex_buffer(0, galaxy.nebula.slice(..));
                    render_pass.draw(0..6, 0..galaxy.nebula_count);
                }
                if galaxy.star_count > 0 {
                    render_pass.set_pipeline(&self.star_pipeline);
                    render_pass.set_vertex_buffer(0, galaxy.positions.slice(..));
                    render_pass.set_vertex_buffer(1, galaxy.attributes.slice(..));
                    render_pass.draw(0..6, 0..galaxy.star_count);
                }
            }
        }

        overlay(&self.device, &self.queue, &mut encoder, &view);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        if let Some(galaxy) = self.galaxy.take() {
            galaxy.destroy();
        }
    }
}

struct PipelineBuilder<'a> {
    device: &'a wgpu::Device,
    layout: &'a wgpu::PipelineLayout,
    shader: &'a wgpu::ShaderModule,
    format: wgpu::TextureFormat,
}

impl PipelineBuilder<'_> {
    #[allow(clippy::too_many_arguments)]
    fn build(
        &self,
        label: &str,
        (vertex, fragment): (&str, &str),
        buffers: &[wgpu::VertexBufferLayout<'_>],
        blend: Option<wgpu::BlendState>,
        depth_write: bool,
        cull_mode: Option<wgpu::Face>,
    ) -> wgpu::RenderPipeline {
        self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(self.layout),
            vertex: wgpu::VertexState {
                module: self.shader,
                entry_point: Some(vertex),
                buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: self.shader,
                entry_point: Some(fragment),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.format,
                    blend,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

/// `src * src_alpha + dst`.
fn additive_blending() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::Zero,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

/// Vertex buffer that can be rewritten in place. Never zero-sized.
fn instance_buffer(device: &wgpu::Device, label: &str, contents: &[u8]) -> wgpu::Buffer {
    const MIN_SIZE: usize = 16;
    let usage = wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST;
    if contents.len() >= MIN_SIZE {
        return device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage,
        });
    }
    let mut padded = contents.to_vec();
    padded.resize(MIN_SIZE, 0);
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: &padded,
        usage,
    })
}

fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    texture: &TextureConfig,
) -> wgpu::TextureView {
    let gpu_texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: texture.width,
                height: texture.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        &texture.data,
    );
    gpu_texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_sampler(device: &wgpu::Device, filter: FilterMode) -> wgpu::Sampler {
    let mode = match filter {
        FilterMode::Linear => wgpu::FilterMode::Linear,
        FilterMode::Nearest => wgpu::FilterMode::Nearest,
    };
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Sprite Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: mode,
        min_filter: mode,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

fn create_depth_texture(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
