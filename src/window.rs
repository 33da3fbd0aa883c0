//! Window, event loop and per-frame driving of the session.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::SceneConfig;
use crate::error::AppError;
use crate::gpu::Renderer;
use crate::input::Input;
use crate::reading::ContentTable;
use crate::sensors::Sensors;
use crate::session::Session;
use crate::time::FrameClock;

const WINDOW_TITLE: &str = "Galactic Tarot";

/// Open the window and run until it is closed.
pub fn run(config: SceneConfig) -> Result<(), AppError> {
    let content = ContentTable::embedded()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, content, Sensors::unavailable());
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    #[cfg(feature = "egui")]
    overlay: Option<crate::gpu::overlay::Overlay>,
    session: Session,
    input: Input,
    clock: FrameClock,
    title: String,
    error: Option<AppError>,
}

impl App {
    fn new(config: SceneConfig, content: ContentTable, sensors: Sensors) -> Self {
        let clock = FrameClock::new();
        let session = Session::new(config, content, sensors, clock.elapsed());
        Self {
            window: None,
            renderer: None,
            #[cfg(feature = "egui")]
            overlay: None,
            session,
            input: Input::new(),
            clock,
            title: String::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            self.session.config().core_color,
        ))?;

        #[cfg(feature = "egui")]
        {
            self.overlay = Some(crate::gpu::overlay::Overlay::new(
                renderer.device(),
                renderer.format(),
                &window,
            ));
        }

        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn update_title(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let title = format!(
            "{} · {}",
            self.session.strings().title,
            self.session.status_line()
        );
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.clock.tick();
        if let Some(fps) = self.clock.take_fps_sample() {
            log::debug!("{fps:.1} fps, last frame {:.2} ms", self.clock.delta() * 1000.0);
        }

        let frame = self.session.frame(now);
        self.update_title();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        renderer.sync_scene(self.session.scene_mut());

        #[cfg(feature = "egui")]
        let result = match &mut self.overlay {
            Some(overlay) => {
                let mut actions = Vec::new();
                let session = &self.session;
                let hud = overlay.run(window, |ctx| {
                    actions = crate::ui::build(ctx, session, now);
                });
                let size = [renderer.config.width, renderer.config.height];
                let result = renderer.render_with(session.scene(), &frame, |device, queue, encoder, view| {
                    overlay.paint(device, queue, encoder, view, &hud, size);
                });
                for action in actions {
                    self.session.apply(action, now);
                }
                result
            }
            None => renderer.render(self.session.scene(), &frame),
        };
        #[cfg(not(feature = "egui"))]
        let result = renderer.render(self.session.scene(), &frame);

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {e:?}"),
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            log::error!("startup failed: {err}");
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        #[cfg(feature = "egui")]
        if let (Some(overlay), Some(window)) = (&mut self.overlay, &self.window) {
            if overlay.on_window_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let Some(input) = self.input.handle_event(&other) {
                    self.session.handle_input(input, self.clock.elapsed());
                }
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.session.shutdown();
        log::info!("goodbye after {} frames", self.clock.frame());
    }
}
