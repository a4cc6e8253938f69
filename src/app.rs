//! The windowed desktop host.
//!
//! Single-process configuration: this instance is trivially authoritative,
//! so every redraw polls input, runs the authoritative tick, applies the
//! shared update, and renders. The winit `ApplicationHandler` owns all
//! session state.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::HostError;
use crate::host::AxisInput;
use crate::input::Input;
use crate::protocol::Navigator;
use crate::render::GpuState;
use crate::system::ParticleSystem;
use crate::time::{Clock, RunClock};

struct DesktopApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    input: Input,
    clock: RunClock,
    navigator: Navigator,
    system: ParticleSystem,
    rng: SmallRng,
}

impl DesktopApp {
    fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            input: Input::new(),
            clock: RunClock::new(),
            navigator: Navigator::new(),
            system: ParticleSystem::new(),
            rng: SmallRng::seed_from_u64(rand::thread_rng().gen()),
        }
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let steering = self.input.poll();
        if steering.quit {
            event_loop.exit();
            return;
        }

        self.navigator.steer(self.clock.now(), &steering);
        self.navigator.apply(&mut self.system, &mut self.rng);

        if let Some(gpu) = &mut self.gpu {
            match gpu.render(&self.system, self.navigator.state()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for DesktopApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("Particle Fountain")
                .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
            self.window = Some(window.clone());
            self.gpu = Some(pollster::block_on(GpuState::new(window)));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Run the windowed demo until Escape or the window closes.
pub fn run() -> Result<(), HostError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DesktopApp::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
