use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{info, warn};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::ports::export_error::ExportError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point::PointerPosition;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::interaction::PointerEvent;
use crate::input::gui::app::panel::{PanelStatus, show_control_panel};
use crate::input::gui::app::pointer_input::PointerInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::input::state::explorer_state::ExplorerState;
use crate::presenters::file::png::PngFilePresenter;

pub const EXPORT_FILENAME: &str = "mandelbrot.png";

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub controller: InteractiveController,
    state: ExplorerState,
    pointer: PointerInput,
    status_message: Option<String>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            scale_factor,
            presenter,
            controller,
            state: ExplorerState::new(SurfaceSize::new(size.width, size.height), Instant::now()),
            pointer: PointerInput::default(),
            status_message: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// Pulls a finished frame from the worker, if one arrived.
    pub fn poll_frame(&mut self) -> bool {
        self.presenter.poll_frame()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let trigger = self.state.interaction.resize(SurfaceSize::new(width, height));
        self.state.apply(trigger);

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            warn!("failed to resize surface to {}x{}: {}", width, height, err);
        }
    }

    pub fn submit_render_request_if_needed(&mut self) {
        let request = self.state.build_render_request();

        if self.state.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            self.state.record_submission(request, generation);
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut actions = None;

        let output = self.egui_ctx.clone().run(raw_input, |ctx| {
            let status = PanelStatus {
                last_render_duration: self.presenter.last_render_duration(),
                message: self
                    .status_message
                    .as_deref()
                    .or(self.presenter.last_error_message()),
            };

            actions = Some(show_control_panel(ctx, &mut self.state, status));
        });

        let hovered = self.egui_ctx.is_pointer_over_area();
        self.state.panel.set_hovered(hovered, Instant::now());

        if let Some(actions) = actions {
            self.state.apply(actions.trigger);

            if actions.export_requested {
                self.export_png();
            }
        }

        output
    }

    /// Forwards a window event to egui and then to the viewport. Returns
    /// `true` if the window should be redrawn.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        let mut redraw = response.repaint;

        let Some(pointer_event) = self.pointer.translate(event) else {
            return redraw;
        };

        if let PointerEvent::Move { x, y } = pointer_event {
            let surface = self.state.interaction.surface();
            redraw |= self.state.panel.pointer_moved(PointerPosition { x, y }, surface);
        }

        let over_panel = response.consumed || self.egui_ctx.is_pointer_over_area();
        let starts_interaction = matches!(
            pointer_event,
            PointerEvent::Down { .. } | PointerEvent::Wheel { .. }
        );

        if over_panel && starts_interaction {
            return redraw;
        }

        let trigger = self.state.interaction.handle_pointer(pointer_event);
        redraw |= self.state.apply(trigger);

        redraw
    }

    /// Applies due panel timers. Returns `true` if the panel changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.panel.tick(now)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.panel.next_deadline()
    }

    fn export_png(&mut self) {
        let result = match self.presenter.current_frame() {
            Some(frame) => PngFilePresenter::new().present(frame, EXPORT_FILENAME),
            None => Err(ExportError::EmptyFrame),
        };

        match result {
            Ok(()) => {
                info!("saved {}", EXPORT_FILENAME);
                self.status_message = None;
            }
            Err(err) => {
                warn!("export failed: {}", err);
                self.status_message = Some(err.to_string());
            }
        }
    }
}
