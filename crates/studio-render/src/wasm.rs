use std::cell::RefCell;
use std::rc::Rc;

use studio_core::BACKDROP_CAMERA;
use studio_geom::LineBatch;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use wgpu::util::DeviceExt;

use crate::camera::view_projection;

pub type Canvas = HtmlCanvasElement;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("adapter request failed: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface unsupported by adapter")]
    SurfaceUnsupported,
}

const INITIAL_LINE_CAPACITY: usize = 512;

pub struct Renderer {
    state: Rc<RefCell<RendererState>>,
    _closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Renderer {
    pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let (width, height) = canvas_size(&canvas);

        let instance = wgpu::Instance::default();
        let surface: wgpu::Surface<'static> =
            instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let limits = wgpu::Limits::downlevel_webgl2_defaults()
            .using_resolution(adapter.limits())
            .using_alignment(adapter.limits());
        let device_desc = wgpu::DeviceDescriptor {
            label: Some("backdrop-device"),
            required_features: wgpu::Features::empty(),
            required_limits: limits,
            ..Default::default()
        };
        let (device, queue) = adapter.request_device(&device_desc).await?;

        let caps = surface.get_capabilities(&adapter);
        let mut config = surface
            .get_default_config(&adapter, width.max(1), height.max(1))
            .ok_or(RenderError::SurfaceUnsupported)?;
        config.present_mode = wgpu::PresentMode::Fifo;
        config.alpha_mode = preferred_alpha_mode(&caps.alpha_modes);
        surface.configure(&device, &config);

        let camera_uniform = CameraUniform::for_aspect(aspect(config.width, config.height));
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera-buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("camera-bind-group-layout"),
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
            });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let line_pipeline = create_line_pipeline(&device, &camera_bind_group_layout, config.format);
        let line_vertex_buffer = create_line_buffer(&device, INITIAL_LINE_CAPACITY);

        let state = RendererState {
            surface,
            device,
            queue,
            config,
            camera_buffer,
            camera_bind_group,
            line_pipeline,
            line_vertex_buffer,
            line_capacity: INITIAL_LINE_CAPACITY,
            line_vertex_count: 0,
        };

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            _closures: Vec::new(),
        })
    }

    /// Keeps the drawing buffer matched to the canvas' device-pixel size.
    pub fn attach_resize_handler(&mut self, canvas: &HtmlCanvasElement) {
        let state = self.state.clone();
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let (width, height) = canvas_size(&canvas);
            let mut state = state.borrow_mut();
            state.resize(width, height);
            state.update_camera();
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        self._closures.push(closure);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let mut state = self.state.borrow_mut();
        state.resize(width, height);
        state.update_camera();
    }

    pub fn set_lines(&mut self, lines: &LineBatch) {
        let mut state = self.state.borrow_mut();
        state.set_lines(lines);
    }

    pub fn render(&mut self) {
        let mut state = self.state.borrow_mut();
        state.render();
    }
}

fn preferred_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::PreMultiplied) {
        wgpu::CompositeAlphaMode::PreMultiplied
    } else {
        modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

struct RendererState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    line_pipeline: wgpu::RenderPipeline,
    line_vertex_buffer: wgpu::Buffer,
    line_capacity: usize,
    line_vertex_count: u32,
}

impl RendererState {
    fn set_lines(&mut self, lines: &LineBatch) {
        let vertices: Vec<LineVertex> = lines
            .positions
            .iter()
            .zip(lines.colors.iter())
            .map(|(position, color)| LineVertex {
                position: *position,
                color: *color,
            })
            .collect();

        if vertices.len() > self.line_capacity {
            let capacity = vertices.len().next_power_of_two();
            self.line_vertex_buffer = create_line_buffer(&self.device, capacity);
            self.line_capacity = capacity;
        }
        if !vertices.is_empty() {
            self.queue
                .write_buffer(&self.line_vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
        self.line_vertex_count = vertices.len() as u32;
    }

    fn update_camera(&mut self) {
        let uniform = CameraUniform::for_aspect(aspect(self.config.width, self.config.height));
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(wgpu::SurfaceError::Timeout)
            | Err(wgpu::SurfaceError::OutOfMemory)
            | Err(wgpu::SurfaceError::Other) => {
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("backdrop-encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if self.line_vertex_count > 0 {
                pass.set_bind_group(0, &self.camera_bind_group, &[]);
                pass.set_pipeline(&self.line_pipeline);
                pass.set_vertex_buffer(0, self.line_vertex_buffer.slice(..));
                pass.draw(0..self.line_vertex_count, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

fn aspect(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let dpr = web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(1.0) as f32;
    let width = (canvas.client_width() as f32 * dpr).max(1.0) as u32;
    let height = (canvas.client_height() as f32 * dpr).max(1.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    fn for_aspect(aspect: f32) -> Self {
        Self {
            view_proj: view_projection(&BACKDROP_CAMERA, aspect).to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct LineVertex {
    position: [f32; 3],
    color: [f32; 4],
}

impl LineVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

fn create_line_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("line-vertex-buffer"),
        size: (capacity * std::mem::size_of::<LineVertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_line_pipeline(
    device: &wgpu::Device,
    camera_layout: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("line-shader"),
        source: wgpu::ShaderSource::Wgsl(LINE_SHADER.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pipeline-layout"),
        bind_group_layouts: &[camera_layout],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("line-pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &line_shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[LineVertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &line_shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

// Colors leave the fragment stage premultiplied so the canvas composites
// correctly over the page.
const LINE_SHADER: &str = r#"
struct Camera {
  view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct VertexInput {
  @location(0) position: vec3<f32>,
  @location(1) color: vec4<f32>,
};

struct VertexOutput {
  @builtin(position) position: vec4<f32>,
  @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
  var out: VertexOutput;
  out.position = camera.view_proj * vec4<f32>(input.position, 1.0);
  out.color = input.color;
  return out;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
  return vec4<f32>(input.color.rgb * input.color.a, input.color.a);
}
"#;
