/// Custom user events for the GUI event loop.
///
/// These let the render worker wake the UI thread.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event may be waiting in the presenter's adapter.
    ///
    /// Receiving this does not redraw by itself; the handler polls the
    /// presenter and requests a redraw only if the image changed.
    Wake,
}
