pub mod export_error;
pub mod file_presenter;
