use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::core::data::point::PointerPosition;
use crate::core::interaction::PointerEvent;

/// Translates winit window events into [`PointerEvent`]s in physical pixels.
#[derive(Debug, Default)]
pub struct PointerInput {
    cursor: Option<PointerPosition>,
}

impl PointerInput {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(PointerPosition {
                    x: position.x,
                    y: position.y,
                });

                Some(PointerEvent::Move {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;

                Some(PointerEvent::Leave)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let cursor = self.cursor?;

                    Some(PointerEvent::Down {
                        x: cursor.x,
                        y: cursor.y,
                    })
                }
                ElementState::Released => Some(PointerEvent::Up),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let cursor = self.cursor?;

                Some(PointerEvent::Wheel {
                    x: cursor.x,
                    y: cursor.y,
                    delta_y: wheel_delta_y(*delta),
                })
            }
            _ => None,
        }
    }
}

/// Vertical wheel delta with the browser's sign: positive when scrolling down.
///
/// winit reports scrolling up (away from the user) as positive.
#[must_use]
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y),
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}
