use crate::core::{GalaxyConfig, GalaxyUniforms, InteractionState, SurfaceSize, SURFACE_GEOMETRY};
use web_sys as web;

mod galaxy;
use galaxy::{create_galaxy_resources, GalaxyResources};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    galaxy: GalaxyResources,
    uniforms: GalaxyUniforms,
    size: SurfaceSize,
    max_dimension: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, galaxy: &GalaxyConfig) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("galaxy_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let max_dimension = device.limits().max_texture_dimension_2d;
        let size = SurfaceSize {
            width: canvas.width(),
            height: canvas.height(),
        }
        .clamped(max_dimension);
        let caps = surface.get_capabilities(&adapter);
        // Shader output goes to the canvas as-is, without sRGB encoding
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = choose_alpha_mode(&caps.alpha_modes, galaxy.transparent);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniforms = GalaxyUniforms::from_config(galaxy, size.resolution());
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let resources = create_galaxy_resources(&device, format, galaxy.transparent, &uniforms);
        if let Some(err) = device.pop_error_scope().await {
            device.destroy();
            anyhow::bail!("galaxy shader program failed: {err}");
        }
        log::info!(
            "[gpu] ready {}x{} format={:?} alpha={:?}",
            size.width,
            size.height,
            format,
            alpha_mode
        );

        let clear_color = if galaxy.transparent {
            wgpu::Color::TRANSPARENT
        } else {
            wgpu::Color::BLACK
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            galaxy: resources,
            uniforms,
            size,
            max_dimension,
            clear_color,
        })
    }

    /// Largest backing-store side the device can present.
    #[inline]
    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Match the surface to a new backing-store size, clamped to the device
    /// limit. Nothing is reconfigured when the size is unchanged.
    pub fn resize(&mut self, size: SurfaceSize) {
        if let Some(next) = self.size.resize_to(size, self.max_dimension) {
            self.size = next;
            self.config.width = next.width;
            self.config.height = next.height;
            self.surface.configure(&self.device, &self.config);
        }
        self.uniforms.set_resolution(self.size.resolution());
        self.queue.write_buffer(
            &self.galaxy.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );
    }

    pub fn update_frame(&mut self, galaxy: &GalaxyConfig, elapsed: f32, input: &InteractionState) {
        self.uniforms.update_frame(galaxy, elapsed, input);
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue.write_buffer(
            &self.galaxy.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("galaxy_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_viewport(
                0.0,
                0.0,
                self.size.width as f32,
                self.size.height as f32,
                0.0,
                1.0,
            );
            rpass.set_pipeline(&self.galaxy.pipeline);
            rpass.set_bind_group(0, &self.galaxy.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.galaxy.vertex_buffer.slice(..));
            rpass.draw(0..SURFACE_GEOMETRY.len() as u32, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release the device; the surface goes with `self`.
    pub fn release(self) {
        self.device.destroy();
    }
}

/// Composite mode for the canvas. Transparent output wants straight alpha,
/// like a canvas with `premultipliedAlpha: false`; fall back to
/// premultiplied, then to whatever the surface offers first.
fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    transparent: bool,
) -> wgpu::CompositeAlphaMode {
    let preferred: &[wgpu::CompositeAlphaMode] = if transparent {
        &[
            wgpu::CompositeAlphaMode::PostMultiplied,
            wgpu::CompositeAlphaMode::PreMultiplied,
        ]
    } else {
        &[wgpu::CompositeAlphaMode::Opaque]
    };
    preferred
        .iter()
        .copied()
        .find(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
