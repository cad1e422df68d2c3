//! Presentation state shared by the GUI adapter, kept free of windowing types
//! so it can be driven and tested without a display.

pub mod explorer_state;
pub mod panel_visibility;
