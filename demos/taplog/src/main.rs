//! Minimal window that logs touch activity instead of rendering it.
//!
//! Run with `RUST_LOG=taplog=debug,info` to watch the mapper work. A tap on
//! the square target region logs at info level; dragging pans, two fingers
//! pinch. On machines without a touchscreen the left mouse button acts as a
//! finger. Escape quits.

use touch_flow::{KeyCode, Vector2};

use touch_flow::key::KeyMapper;
use touch_flow::region::ScreenRect;
use touch_flow::touch::event::WinitTouches;
use touch_flow::touch::mapper::TouchMapper;
use touch_flow::touchable::Touchable;
use touch_flow::touchable::frame::TouchFrame;
use touch_flow::touchable::pane::TouchPane;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

fn anywhere(_: Vector2<f32>) -> bool {
    true
}

struct App {
    window: Option<Window>,
    touches: WinitTouches,
    mapper: TouchMapper,
    keys: KeyMapper,
    tap: TouchFrame<ScreenRect>,
    pane: TouchPane<fn(Vector2<f32>) -> bool>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            touches: WinitTouches::new().with_mouse_emulation(),
            mapper: TouchMapper::new(),
            keys: KeyMapper::new(),
            tap: TouchFrame::with_handler(ScreenRect::new(40.0, 40.0, 200.0, 200.0), || {
                log::info!("tap on the target region")
            }),
            pane: TouchPane::new(anywhere as fn(Vector2<f32>) -> bool, 2),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = event_loop
            .create_window(Window::default_attributes().with_title("taplog"))
            .unwrap();
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let Some(batch) = self.touches.handle(&event) {
            self.mapper.map(&batch);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.keys.map(&event),
            WindowEvent::RedrawRequested => {
                let mut update = self.mapper.frame_update();
                if let Some(added) = update.added() {
                    log::debug!("contact {} down at {:?}", added.id(), added.position());
                }
                if let Some(removed) = update.removed() {
                    log::debug!("contact {} up at {:?}", removed.id(), removed.position());
                }

                self.tap.update(&mut update);
                self.pane.update(&mut update);

                let movement = self.pane.movement();
                if movement != Vector2::new(0.0, 0.0) {
                    log::debug!("pan by {:?}", movement);
                }
                let scale = self.pane.scale();
                if (scale - 1.0).abs() > f32::EPSILON {
                    log::debug!("pinch by factor {}", scale);
                }

                self.keys.frame_update();
                if self.keys.key_hit(KeyCode::Escape) {
                    event_loop.exit();
                }

                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn suspended(&mut self, _: &ActiveEventLoop) {
        // No removal notifications on teardown; both sides reset directly.
        self.mapper.flush();
        self.tap.flush();
        self.pane.flush();
        self.keys.flush();
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
