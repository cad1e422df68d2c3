use crate::core::data::complex::Complex;
use crate::core::data::point::{PixelPoint, PointerPosition};
use crate::core::data::surface_size::SurfaceSize;
use crate::core::viewport::compensated::CompensatedF64;
use crate::core::viewport::errors::ViewportError;

pub const DEFAULT_ZOOM: f64 = 200.0;
pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_SCALE: f64 = 0.5;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Smallest resolution scale the viewport accepts; lower requests are clamped up.
pub const MIN_SCALE: f64 = 0.01;
pub const MAX_SCALE: f64 = 1.0;

/// The mapping from pixels to the fractal plane.
///
/// `zoom` is pixels per fractal unit at full resolution. `scale` is the
/// fraction of native resolution actually computed. Two coordinate spaces
/// are exposed and must not be mixed:
///
/// - render space ([`Viewport::render_pixel_to_fractal`]): pixels of the
///   downscaled raster, `(p − floor(W·scale)/2) / (zoom·scale) + center`
/// - pointer space ([`Viewport::fractal_coordinate_at`]): full-resolution
///   device pixels, `(p − W/2) / zoom + center`
///
/// The center is accumulated with compensated summation so that a pan and
/// its inverse cancel exactly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: CompensatedF64,
    center_y: CompensatedF64,
    zoom: f64,
    scale: f64,
    max_iterations: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: CompensatedF64::new(DEFAULT_CENTER_X),
            center_y: CompensatedF64::new(DEFAULT_CENTER_Y),
            zoom: DEFAULT_ZOOM,
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Viewport {
    pub fn new(
        center_x: f64,
        center_y: f64,
        zoom: f64,
        scale: f64,
        max_iterations: u32,
    ) -> Result<Self, ViewportError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ViewportError::NonFiniteCenter {
                x: center_x,
                y: center_y,
            });
        }

        let mut viewport = Self {
            center_x: CompensatedF64::new(center_x),
            center_y: CompensatedF64::new(center_y),
            ..Self::default()
        };

        viewport.set_zoom(zoom)?;
        viewport.set_scale(scale)?;
        viewport.set_max_iterations(max_iterations)?;

        Ok(viewport)
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x.value()
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y.value()
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_x(), self.center_y())
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Dimensions of the raster actually computed for `surface`.
    #[must_use]
    pub fn raster_size(&self, surface: SurfaceSize) -> SurfaceSize {
        surface.scaled(self.scale)
    }

    /// Fractal coordinate of a pixel in the downscaled raster.
    #[must_use]
    pub fn render_pixel_to_fractal(&self, pixel: PixelPoint, raster: SurfaceSize) -> Complex {
        let pixels_per_unit = self.zoom * self.scale;

        Complex {
            re: (f64::from(pixel.x) - f64::from(raster.width) / 2.0) / pixels_per_unit
                + self.center_x(),
            im: (f64::from(pixel.y) - f64::from(raster.height) / 2.0) / pixels_per_unit
                + self.center_y(),
        }
    }

    /// Fractal coordinate under a pointer given in full-resolution device pixels.
    #[must_use]
    pub fn fractal_coordinate_at(&self, pointer: PointerPosition, surface: SurfaceSize) -> Complex {
        pointer_to_fractal(pointer, surface, self.zoom, self.center())
    }

    /// Shifts the center by `(-dx, -dy)` fractal units.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        let x = self.center_x() - dx;
        let y = self.center_y() - dy;

        if !x.is_finite() || !y.is_finite() {
            return Err(ViewportError::NonFiniteCenter { x, y });
        }

        self.center_x.add(-dx);
        self.center_y.add(-dy);

        Ok(())
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom(zoom));
        }

        self.zoom = zoom;
        Ok(())
    }

    /// Multiplies the zoom about the current center.
    pub fn scale_zoom(&mut self, factor: f64) -> Result<(), ViewportError> {
        self.set_zoom(self.zoom * factor)
    }

    /// Multiplies the zoom while keeping the fractal point under `pointer` fixed.
    pub fn zoom_at(
        &mut self,
        pointer: PointerPosition,
        surface: SurfaceSize,
        factor: f64,
    ) -> Result<(), ViewportError> {
        let new_zoom = self.zoom * factor;

        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom(new_zoom));
        }

        let before = pointer_to_fractal(pointer, surface, self.zoom, self.center());
        let after = pointer_to_fractal(pointer, surface, new_zoom, self.center());
        let shift_x = before.re - after.re;
        let shift_y = before.im - after.im;

        let x = self.center_x() + shift_x;
        let y = self.center_y() + shift_y;

        if !x.is_finite() || !y.is_finite() {
            return Err(ViewportError::NonFiniteCenter { x, y });
        }

        self.center_x.add(shift_x);
        self.center_y.add(shift_y);
        self.zoom = new_zoom;

        Ok(())
    }

    /// Clamps `scale` into `[MIN_SCALE, MAX_SCALE]` and returns the value applied.
    pub fn set_scale(&mut self, scale: f64) -> Result<f64, ViewportError> {
        if scale.is_nan() {
            return Err(ViewportError::InvalidScale(scale));
        }

        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        Ok(self.scale)
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ViewportError> {
        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn pointer_to_fractal(
    pointer: PointerPosition,
    surface: SurfaceSize,
    zoom: f64,
    center: Complex,
) -> Complex {
    Complex {
        re: (pointer.x - f64::from(surface.width) / 2.0) / zoom + center.re,
        im: (pointer.y - f64::from(surface.height) / 2.0) / zoom + center.im,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800, 600)
    }

    fn full_resolution_viewport() -> Viewport {
        Viewport::new(-0.5, 0.0, 200.0, 1.0, 100).unwrap()
    }

    #[test]
    fn test_default_matches_startup_values() {
        let viewport = Viewport::default();

        assert_eq!(viewport.zoom(), 200.0);
        assert_eq!(viewport.center_x(), -0.5);
        assert_eq!(viewport.center_y(), 0.0);
        assert_eq!(viewport.scale(), 0.5);
        assert_eq!(viewport.max_iterations(), 100);
    }

    #[test]
    fn test_render_transform_at_raster_center() {
        let viewport = full_resolution_viewport();
        let raster = viewport.raster_size(surface());

        let c = viewport.render_pixel_to_fractal(PixelPoint { x: 400, y: 300 }, raster);

        assert_eq!(c, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_render_transform_at_top_left() {
        let viewport = full_resolution_viewport();
        let raster = viewport.raster_size(surface());

        let c = viewport.render_pixel_to_fractal(PixelPoint { x: 0, y: 0 }, raster);

        assert_eq!(c, Complex::new(-2.5, -1.5));
    }

    #[test]
    fn test_render_transform_uses_scaled_raster() {
        // At scale 0.5 the 400x300 raster covers the same region as the 800x600 surface.
        let viewport = Viewport::default();
        let raster = viewport.raster_size(surface());

        assert_eq!(raster, SurfaceSize::new(400, 300));
        assert_eq!(
            viewport.render_pixel_to_fractal(PixelPoint { x: 0, y: 0 }, raster),
            Complex::new(-2.5, -1.5)
        );
        assert_eq!(
            viewport.render_pixel_to_fractal(PixelPoint { x: 200, y: 150 }, raster),
            Complex::new(-0.5, 0.0)
        );
    }

    #[test]
    fn test_pointer_transform_ignores_scale() {
        let viewport = Viewport::default();

        let c = viewport.fractal_coordinate_at(PointerPosition { x: 0.0, y: 0.0 }, surface());

        assert_eq!(c, Complex::new(-2.5, -1.5));
    }

    #[test]
    fn test_pan_moves_center_opposite_to_delta() {
        let mut viewport = Viewport::default();

        viewport.pan(0.05, 0.025).unwrap();

        assert_eq!(viewport.center_x(), -0.5 - 0.05);
        assert_eq!(viewport.center_y(), -0.025);
    }

    #[test]
    fn test_pan_roundtrip_is_exact() {
        let deltas = [(0.05, 0.025), (0.1, -0.3), (1.0 / 3.0, 1e-7), (-2.2, 0.7)];

        for &(dx, dy) in &deltas {
            let mut viewport = Viewport::new(-0.743, 0.1318, 5000.0, 1.0, 100).unwrap();
            let original = (viewport.center_x(), viewport.center_y());

            viewport.pan(dx, dy).unwrap();
            viewport.pan(-dx, -dy).unwrap();

            assert_eq!((viewport.center_x(), viewport.center_y()), original);
        }
    }

    #[test]
    fn test_pan_rejects_non_finite_delta() {
        let mut viewport = Viewport::default();

        assert!(viewport.pan(f64::INFINITY, 0.0).is_err());
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_zoom_at_keeps_point_under_cursor_fixed() {
        let pointers = [
            PointerPosition { x: 0.0, y: 0.0 },
            PointerPosition { x: 123.5, y: 456.25 },
            PointerPosition { x: 799.0, y: 599.0 },
            PointerPosition { x: 400.0, y: 300.0 },
        ];

        for factor in [0.9, 1.1] {
            for &pointer in &pointers {
                let mut viewport = Viewport::new(-0.75, 0.1, 350.0, 0.5, 100).unwrap();
                let before = viewport.fractal_coordinate_at(pointer, surface());

                viewport.zoom_at(pointer, surface(), factor).unwrap();
                let after = viewport.fractal_coordinate_at(pointer, surface());

                assert!((before.re - after.re).abs() < TOLERANCE);
                assert!((before.im - after.im).abs() < TOLERANCE);
                assert_eq!(viewport.zoom(), 350.0 * factor);
            }
        }
    }

    #[test]
    fn test_zoom_at_center_does_not_move_center() {
        let mut viewport = Viewport::default();

        viewport
            .zoom_at(PointerPosition { x: 400.0, y: 300.0 }, surface(), 1.1)
            .unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_zoom_at_rejects_collapse_to_zero() {
        let mut viewport = Viewport::default();

        let result = viewport.zoom_at(PointerPosition { x: 10.0, y: 10.0 }, surface(), 0.0);

        assert_eq!(result, Err(ViewportError::InvalidZoom(0.0)));
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn test_zoom_at_rejects_overflow() {
        let mut viewport = Viewport::new(0.0, 0.0, f64::MAX, 1.0, 100).unwrap();

        assert!(viewport.zoom_at(PointerPosition::default(), surface(), 1.1).is_err());
        assert_eq!(viewport.zoom(), f64::MAX);
    }

    #[test]
    fn test_repeated_zoom_out_never_leaves_center_non_finite() {
        let mut viewport = Viewport::default();
        let pointer = PointerPosition { x: 0.0, y: 0.0 };
        let mut rejected = false;

        for _ in 0..20_000 {
            let previous = viewport;

            match viewport.zoom_at(pointer, surface(), 0.9) {
                Ok(()) => {
                    assert!(viewport.center_x().is_finite());
                    assert!(viewport.center_y().is_finite());
                }
                Err(_) => {
                    assert_eq!(viewport, previous);
                    rejected = true;
                    break;
                }
            }
        }

        assert!(rejected);
        assert!(viewport.pan(0.1, 0.1).is_ok());
    }

    #[test]
    fn test_set_zoom_rejects_non_positive_and_non_finite() {
        let mut viewport = Viewport::default();

        assert!(viewport.set_zoom(0.0).is_err());
        assert!(viewport.set_zoom(-5.0).is_err());
        assert!(viewport.set_zoom(f64::NAN).is_err());
        assert!(viewport.set_zoom(f64::INFINITY).is_err());
        assert_eq!(viewport.zoom(), DEFAULT_ZOOM);

        viewport.set_zoom(300.0).unwrap();
        assert_eq!(viewport.zoom(), 300.0);
    }

    #[test]
    fn test_scale_zoom_multiplies() {
        let mut viewport = Viewport::default();

        viewport.scale_zoom(1.5).unwrap();

        assert_eq!(viewport.zoom(), 300.0);
    }

    #[test]
    fn test_set_scale_clamps_into_range() {
        let mut viewport = Viewport::default();

        assert_eq!(viewport.set_scale(1.7), Ok(1.0));
        assert_eq!(viewport.set_scale(-0.3), Ok(MIN_SCALE));
        assert_eq!(viewport.set_scale(0.7), Ok(0.7));
        assert!(viewport.set_scale(f64::NAN).is_err());
        assert_eq!(viewport.scale(), 0.7);
    }

    #[test]
    fn test_set_max_iterations_rejects_zero() {
        let mut viewport = Viewport::default();

        assert_eq!(viewport.set_max_iterations(0), Err(ViewportError::ZeroMaxIterations));
        assert_eq!(viewport.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_new_validates_every_field() {
        assert!(Viewport::new(f64::NAN, 0.0, 200.0, 0.5, 100).is_err());
        assert!(Viewport::new(0.0, 0.0, 0.0, 0.5, 100).is_err());
        assert!(Viewport::new(0.0, 0.0, 200.0, f64::NAN, 100).is_err());
        assert!(Viewport::new(0.0, 0.0, 200.0, 0.5, 0).is_err());
    }

    #[test]
    fn test_reset_restores_defaults_from_any_state() {
        let mut viewport = Viewport::new(0.3, -0.2, 12345.0, 0.9, 30).unwrap();
        viewport.pan(0.123, 0.456).unwrap();

        viewport.reset();
        assert_eq!(viewport, Viewport::default());

        viewport.reset();
        assert_eq!(viewport.zoom(), 200.0);
        assert_eq!(viewport.center_x(), -0.5);
        assert_eq!(viewport.center_y(), 0.0);
        assert_eq!(viewport.scale(), 0.5);
    }
}
