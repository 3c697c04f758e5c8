//! Resources acquired at startup and released on quit

/// Holds the window and renderer for the lifetime of the demo.
///
/// Generic so the release order can be checked without a display.
pub struct AppContext<W, R> {
    window: Option<W>,
    renderer: Option<R>,
}

impl<W, R> AppContext<W, R> {
    pub fn new(window: W, renderer: R) -> Self {
        Self {
            window: Some(window),
            renderer: Some(renderer),
        }
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }

    pub fn is_live(&self) -> bool {
        self.window.is_some() || self.renderer.is_some()
    }

    /// Release the renderer, then the window. Only the first call does
    /// anything; returns whether this call released resources.
    pub fn teardown(&mut self) -> bool {
        if !self.is_live() {
            return false;
        }
        drop(self.renderer.take());
        drop(self.window.take());
        log::debug!("window and renderer released");
        true
    }
}

impl<W, R> Drop for AppContext<W, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
