use std::error::Error;
use std::marker::PhantomData;
use std::time::Instant;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::command::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        info!("window created at {}x{}", size.width, size.height);

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                if app.poll_frame() {
                    redraw_pending = true;
                }
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if app.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        info!("closing window");
                        app.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);
                        app.submit_render_request_if_needed();

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(e) = app.render(egui_output) {
                            error!("render error: {e}");
                            app.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if app.tick(Instant::now()) {
                    redraw_pending = true;
                }

                // Viewport changes only take effect once submitted from a redraw.
                if redraw_pending {
                    window.request_redraw();
                }

                match app.next_deadline() {
                    Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
