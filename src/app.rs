use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::render::Renderer;

const WINDOW_TITLE: &str = "Animated Cube";
const DEFAULT_WINDOW_SIZE: (u32, u32) = (800, 600);

pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    initial_size: (u32, u32),
    startup_error: Option<anyhow::Error>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WINDOW_SIZE.0, DEFAULT_WINDOW_SIZE.1)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            window: None,
            renderer: None,
            initial_size: (width, height),
            startup_error: None,
        }
    }

    /// Consumes the app after the event loop returns. Non-Ok means startup
    /// failed and the process should exit with a non-zero status.
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.startup_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail_startup(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("startup failed: {err:#}");
        self.startup_error = Some(err);
        event_loop.exit();
    }

    fn handle_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(size);
        }
    }

    fn handle_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => renderer.resize(renderer.size),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => log::error!("render error: {e:?}"),
        }

        // Continuous animation: always schedule the next frame.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.initial_size;
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail_startup(event_loop, e.into()),
        };
        self.window = Some(window.clone());

        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => return self.fail_startup(event_loop, e.into()),
        };

        match rt.block_on(Renderer::new(window)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => self.fail_startup(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::RedrawRequested => self.handle_redraw(event_loop),
            _ => {}
        }
    }
}
