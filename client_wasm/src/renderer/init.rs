use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// Size the canvas to the board and bring up a WebGPU surface on it
pub async fn init_wgpu(
    canvas: HtmlCanvasElement,
    board_width: f32,
    board_height: f32,
) -> Result<WgpuContext, String> {
    let size = (board_width.round() as u32, board_height.round() as u32);
    canvas.set_width(size.0);
    canvas.set_height(size.1);

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "No WebGPU adapter".to_string())?;
    let (device, queue) = request_device(&adapter).await?;

    let config = surface_config(&surface, &adapter, size)?;
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}

async fn request_device(adapter: &Adapter) -> Result<(Device, Queue), String> {
    let descriptor = DeviceDescriptor {
        label: Some("Board Device"),
        required_features: Features::empty(),
        required_limits: Limits::downlevel_webgl2_defaults(),
        memory_hints: MemoryHints::default(),
    };
    adapter
        .request_device(&descriptor, None)
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))
}

// Prefer an sRGB format so the tints come out as written
fn surface_config(
    surface: &Surface<'static>,
    adapter: &Adapter,
    (width, height): (u32, u32),
) -> Result<SurfaceConfiguration, String> {
    let caps = surface.get_capabilities(adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or_else(|| "Surface reports no formats".to_string())?;

    Ok(SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}
