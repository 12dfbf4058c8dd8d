//! Winit application runner
//!
//! - [`App`]: builder for the window and launcher of the event loop
//! - [`AppHandler`]: what the application implements
//! - `AppRunner`: the winit [`ApplicationHandler`] gluing the two together
//!
//! Pointer input is translated by [`PointerAdapter`], offered to the render
//! surface's UI layer and then dispatched on the window-wide
//! [`PointerSurface`]. Each `RedrawRequested` ticks the clock, updates the
//! handler and renders through the [`RenderSurface`].
//!
//! ```rust,ignore
//! App::new()
//!     .with_title("Turntable")
//!     .run(viewer, HeadlessSurface::new())?;
//! ```

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::app::FrameState;
use crate::app::pointer_surface::PointerSurface;
use crate::app::surface::RenderSurface;
use crate::errors::{Result, ViewerError};
use crate::utils::Timer;

pub mod input_adapter;

use input_adapter::PointerAdapter;

/// Application behaviour driven by the runner.
///
/// # Lifecycle
///
/// 1. [`activate`](Self::activate) once the window exists
/// 2. [`resize`](Self::resize) on every size change (and once after activation)
/// 3. [`update`](Self::update) then [`render`](Self::render) every frame
/// 4. [`deactivate`](Self::deactivate) when the window closes
pub trait AppHandler: 'static {
    /// The window is up; `pointer` is the window-wide input surface and
    /// stays valid until [`deactivate`](Self::deactivate).
    fn activate(&mut self, pointer: &PointerSurface);

    #[allow(unused_variables)]
    fn resize(&mut self, width: u32, height: u32) {}

    fn update(&mut self, frame: &FrameState);

    fn render(&mut self, surface: &mut dyn RenderSurface);

    /// Release everything registered in [`activate`](Self::activate).
    fn deactivate(&mut self) {}
}

/// Window configuration and launcher.
pub struct App {
    title: String,
    width: f64,
    height: f64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Turntable".into(),
            width: 1280.0,
            height: 720.0,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Runs `handler` until the window closes, drawing through `surface`.
    ///
    /// Blocks the calling thread. Window creation failures are reported once
    /// the loop has exited.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run<H: AppHandler, S: RenderSurface + 'static>(self, handler: H, surface: S) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::new(self, handler, surface);
        event_loop.run_app(&mut runner)?;

        match runner.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Spawns the runner on the browser event loop and returns immediately.
    #[cfg(target_arch = "wasm32")]
    pub fn run<H: AppHandler, S: RenderSurface + 'static>(self, handler: H, surface: S) -> Result<()> {
        use winit::platform::web::EventLoopExtWebSys;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.spawn_app(AppRunner::new(self, handler, surface));
        Ok(())
    }
}

struct AppRunner<H: AppHandler, S: RenderSurface> {
    config: App,
    window: Option<Arc<Window>>,
    handler: H,
    surface: S,
    pointer: PointerSurface,
    adapter: PointerAdapter,
    timer: Timer,
    error: Option<ViewerError>,
}

impl<H: AppHandler, S: RenderSurface> AppRunner<H, S> {
    fn new(config: App, handler: H, surface: S) -> Self {
        Self {
            config,
            window: None,
            handler,
            surface,
            pointer: PointerSurface::new(),
            adapter: PointerAdapter::new(),
            timer: Timer::new(),
            error: None,
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.handler.resize(width, height);
        self.surface.resize(width, height);
    }

    fn redraw(&mut self) {
        self.timer.tick();
        let frame = FrameState {
            time: self.timer.elapsed_seconds(),
            dt: self.timer.dt_seconds(),
            frame_count: self.timer.frame_count,
        };

        self.handler.update(&frame);
        self.handler.render(&mut self.surface);

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.take().is_some() {
            self.handler.deactivate();
            log::info!("Window closed after {} frames", self.timer.frame_count);
        }
        event_loop.exit();
    }
}

impl<H: AppHandler, S: RenderSurface> ApplicationHandler for AppRunner<H, S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        #[allow(unused_mut)]
        let mut attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.width, self.config.height));

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowAttributesExtWebSys;
            attributes = attributes.with_append(true);
        }

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("Fatal window error: {err}");
                self.error = Some(err.into());
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.window = Some(window);
        log::info!("Window '{}' created ({}x{})", self.config.title, size.width, size.height);

        self.handler.activate(&self.pointer);
        self.resize(size.width, size.height);
        self.timer.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(pointer_event) = self.adapter.translate(&other) {
                    self.surface.pointer(&pointer_event);
                    self.pointer.dispatch(&pointer_event);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
