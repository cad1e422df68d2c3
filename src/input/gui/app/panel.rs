use std::time::Duration;

use egui::Context;

use crate::core::interaction::RenderTrigger;
use crate::core::interaction::config::{PANEL_MAX_SCALE, PANEL_MIN_SCALE};
use crate::input::state::explorer_state::ExplorerState;

const QUALITY_STEP: f64 = 0.1;

const INSTRUCTIONS: &str = "\
Drag with the left mouse button to pan.
Scroll the wheel to zoom about the cursor.
Lower the quality for faster rendering.
Move the pointer to the top-left corner to bring this panel back.";

/// What the user asked for through the panel this frame.
#[derive(Debug, Default)]
pub struct PanelActions {
    pub trigger: RenderTrigger,
    pub export_requested: bool,
}

/// Read-only status shown at the bottom of the panel.
pub struct PanelStatus<'a> {
    pub last_render_duration: Option<Duration>,
    pub message: Option<&'a str>,
}

pub fn show_control_panel(ctx: &Context, state: &mut ExplorerState, status: PanelStatus<'_>) -> PanelActions {
    let mut actions = PanelActions::default();

    if !state.panel.is_visible() {
        return actions;
    }

    egui::Window::new("Mandelbrot Explorer")
        .title_bar(false)
        .resizable(false)
        .fixed_pos([10.0, 10.0])
        .show(ctx, |ui| {
            let mut scale = state.interaction.viewport().scale();

            ui.horizontal(|ui| {
                ui.strong(format!("Quality: {:.0}%", scale * 100.0));
                let slider = egui::Slider::new(&mut scale, PANEL_MIN_SCALE..=PANEL_MAX_SCALE)
                    .step_by(QUALITY_STEP)
                    .show_value(false);

                if ui.add(slider).changed() {
                    actions.trigger = actions.trigger.combine(state.interaction.set_scale(scale));
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Zoom In").clicked() {
                    actions.trigger = actions.trigger.combine(state.interaction.zoom_in());
                }

                if ui.button("Reset View").clicked() {
                    actions.trigger = actions.trigger.combine(state.interaction.reset());
                }
            });

            if ui.button("Download PNG").clicked() {
                actions.export_requested = true;
            }

            if ui.button("Instructions").clicked() {
                state.panel.toggle_instructions();
            }

            if state.panel.instructions_open() {
                ui.separator();
                ui.label(INSTRUCTIONS);
            }

            if let Some(duration) = status.last_render_duration {
                ui.separator();
                ui.small(format!("Last render: {} ms", duration.as_millis()));
            }

            if let Some(message) = status.message {
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        });

    actions
}
