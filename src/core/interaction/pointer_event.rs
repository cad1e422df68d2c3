/// Pointer input in full-resolution device pixels relative to the surface.
///
/// `delta_y` follows the browser convention: positive means the wheel moved
/// down, which zooms out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Wheel { x: f64, y: f64, delta_y: f64 },
}
