//! Core application state and lifecycle.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use huewheel_core::{ColorWheel, Hsb, HueWheelConfig, PointerEvent};
use huewheel_render::{
    RenderContext, RenderResult, Renderer, RendererError, VelloRenderer, WheelStyle,
};
use kurbo::Size;
use peniko::Color;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::event_handler::{routes_to_wheel, PointerRouter};
use crate::ui::{render_ui, wheel_bounds, UiAction, UiState};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    /// Picker settings (presets, handle, wedges, margin).
    pub wheel: HueWheelConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "HueWheel".to_string(),
            width: 400,
            height: 520,
            background_color: Color::BLACK,
            wheel: HueWheelConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default window settings around the given picker settings.
    pub fn with_wheel_config(wheel: HueWheelConfig) -> Self {
        Self {
            wheel,
            ..Self::default()
        }
    }
}

/// Load the picker settings from an optional JSON file.
///
/// A missing or unreadable file is logged and replaced by the defaults.
pub fn load_config(path: Option<String>) -> AppConfig {
    let Some(path) = path else {
        return AppConfig::default();
    };

    match HueWheelConfig::from_path(&path) {
        Ok(wheel) => {
            log::info!("Loaded config from {}", path);
            AppConfig::with_wheel_config(wheel)
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path, e);
            AppConfig::default()
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    wheel_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,
    style: WheelStyle,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // Picker
    wheel: ColorWheel,
    router: PointerRouter,
    /// Set by the color-changed observer, consumed after each pointer event.
    picked: Rc<Cell<Option<Hsb>>>,
    config: AppConfig,
}

impl AppState {
    /// Window size in logical units.
    fn logical_size(&self) -> Size {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        Size::new(size.width, size.height)
    }

    /// Fit the wheel to the area below the preset bar.
    fn relayout(&mut self) {
        let bounds = wheel_bounds(self.logical_size(), self.config.wheel.margin);
        self.wheel.on_bounds_changed(bounds);
    }

    /// Forward a pointer event to the wheel.
    fn dispatch_pointer(&mut self, event: PointerEvent, egui_wants_pointer: bool) {
        let dragging = self.wheel.interaction().is_dragging();
        if !routes_to_wheel(event, dragging, egui_wants_pointer, self.wheel.bounds()) {
            return;
        }

        self.wheel.handle_pointer_event(event);

        // A pointer pick replaces whatever preset was chosen.
        if self.picked.take().is_some() {
            self.ui_state.presets.clear_selection();
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SelectPreset(index) => {
                self.ui_state.presets.select(index, &mut self.wheel);
            }
        }
    }

    /// Run egui, draw the wheel and present the frame.
    ///
    /// Returns whether egui asked for another frame right away.
    fn render_frame(&mut self, render_cx: &vello::util::RenderContext) -> RenderResult<bool> {
        // Run egui and get any actions
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let mut action = None;
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            action = render_ui(ctx, &self.ui_state);
        });
        if let Some(action) = action {
            self.apply_action(action);
        }

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);
        let repaint = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());

        // Build the wheel scene
        let ctx = RenderContext::new(&self.wheel)
            .with_scale_factor(self.window.scale_factor())
            .with_background(self.config.background_color)
            .with_style(self.style);
        self.wheel_renderer.build_scene(&ctx);
        let base_color = self.wheel_renderer.background_color(&ctx);
        let scene = self.wheel_renderer.take_scene();
        self.wheel.take_redraw_request();

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(format!("{:?}", e)))?;

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a Rgba8Unorm storage texture; the
        // surface may be Bgra8Unorm, so render here and blit afterwards.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(format!("{:?}", e)))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter.copy(
                device,
                &mut blit_encoder,
                &render_texture_view,
                &surface_view,
            );
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        // Update egui textures
        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        // Render egui on top
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });

            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load, // Keep Vello content
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        // Free egui textures
        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        Ok(repaint)
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application with default configuration.
    pub async fn run() {
        Self::run_with_config(AppConfig::default()).await;
    }

    /// Run the application.
    pub async fn run_with_config(config: AppConfig) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app).expect("Event loop error");
    }

    /// Finish initialization after surface is created.
    fn finish_init(
        &mut self,
        window: Arc<Window>,
        surface: RenderSurface<'static>,
    ) -> RenderResult<()> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| RendererError::InitFailed("RenderContext not initialized".into()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{:?}", e)))?;
        let texture_blitter =
            vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let picked = Rc::new(Cell::new(None));
        let mut wheel = ColorWheel::default();
        let observer = Rc::clone(&picked);
        wheel.register_color_changed(move |color: Hsb| {
            let [r, g, b, _] = color.to_rgba8();
            log::debug!(
                "Color changed: #{:02x}{:02x}{:02x} (h={:.3} s={:.3} b={:.3})",
                r,
                g,
                b,
                color.hue,
                color.saturation,
                color.brightness
            );
            observer.set(Some(color));
        });

        log::info!(
            "HueWheel initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        let mut state = AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            wheel_renderer: VelloRenderer::new(),
            texture_blitter,
            style: WheelStyle::from(&self.config.wheel),
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::new(self.config.wheel.preset_selector()),
            wheel,
            router: PointerRouter::new(),
            picked,
            config: self.config.clone(),
        };
        state.relayout();
        self.state = Some(state);

        // Request initial redraw
        window.request_redraw();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        log::info!("Window created, initializing renderer...");

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);

        let surface: RenderSurface<'static> = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .expect("Failed to create surface");

        if let Err(e) = self.finish_init(window, surface) {
            log::error!("{}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        // Check both: if egui consumed the event OR if the pointer is over an egui area
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();

        let scale_factor = state.window.scale_factor();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.relayout();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                state.relayout();
            }

            WindowEvent::Focused(false) => {
                let cancel = state.router.cancel();
                state.dispatch_pointer(cancel, false);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = state.router.cursor_moved(position, scale_factor);
                state.dispatch_pointer(event, egui_wants_pointer);
            }

            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                if let Some(event) = state.router.mouse_input(button_state, button) {
                    state.dispatch_pointer(event, egui_wants_pointer);
                }
            }

            WindowEvent::Touch(touch) => {
                if let Some(event) =
                    state
                        .router
                        .touch(touch.id, touch.phase, touch.location, scale_factor)
                {
                    state.dispatch_pointer(event, egui_wants_pointer);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };

                match state.render_frame(render_cx) {
                    Ok(true) => state.window.request_redraw(),
                    Ok(false) => {}
                    Err(e @ RendererError::Surface(_)) => log::warn!("{}", e),
                    Err(e) => log::error!("{}", e),
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            if state.wheel.needs_redraw() {
                state.window.request_redraw();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.title, "HueWheel");
        assert_eq!(config.wheel.margin, 16.0);
        assert_eq!(config.background_color.to_rgba8().a, 255);
    }

    #[test]
    fn test_load_config_without_path() {
        let config = load_config(None);
        assert_eq!(config.wheel, HueWheelConfig::default());
    }

    #[test]
    fn test_load_config_falls_back_on_error() {
        let config = load_config(Some("/nonexistent/huewheel.json".to_string()));
        assert_eq!(config.wheel, HueWheelConfig::default());

        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let config = load_config(Some(path.display().to_string()));
        assert_eq!(config.wheel, HueWheelConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huewheel.json");
        fs::write(&path, r##"{ "presets": ["#112233"], "margin": 24.0 }"##).unwrap();

        let config = load_config(Some(path.display().to_string()));
        assert_eq!(config.wheel.presets, vec!["#112233".to_string()]);
        assert_eq!(config.wheel.margin, 24.0);
        assert_eq!(config.wheel.wedge_count, 360);
        assert_eq!(config.width, AppConfig::default().width);
    }
}
