pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::interactive::InteractiveController;
pub use crate::controllers::still::StillRenderController;
pub use crate::core::actions::render_frame::render_frame::{RenderedFrame, render_frame};
pub use crate::core::data::surface_size::SurfaceSize;
pub use crate::core::viewport::Viewport;
pub use crate::presenters::file::by_extension::ByExtensionFilePresenter;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::command::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
