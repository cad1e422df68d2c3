use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::export_error::ExportError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, RenderedFrame, render_frame};
use crate::core::data::surface_size::SurfaceSize;
use crate::core::viewport::Viewport;

/// Renders a single viewport synchronously and hands it to a file presenter.
pub struct StillRenderController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<RenderedFrame>,
}

impl<P: FilePresenterPort> StillRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    pub fn generate(&mut self, viewport: &Viewport, surface: SurfaceSize) -> Result<(), RenderFrameError> {
        info!(
            "rendering {}x{} at zoom {} (scale {}, {} iterations)",
            surface.width,
            surface.height,
            viewport.zoom(),
            viewport.scale(),
            viewport.max_iterations()
        );

        let start = Instant::now();
        let frame = render_frame(viewport, surface)?;

        info!(
            "rendered {}x{} raster in {:?}",
            frame.raster_size.width,
            frame.raster_size.height,
            start.elapsed()
        );

        self.frame = Some(frame);

        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> Option<&RenderedFrame> {
        self.frame.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), ExportError> {
        let frame = self.frame.as_ref().ok_or(ExportError::EmptyFrame)?;

        self.presenter.present(&frame.pixel_buffer, filepath.as_ref())?;
        info!("saved to {}", filepath.as_ref().display());

        Ok(())
    }
}
