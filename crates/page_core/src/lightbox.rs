//! Single-image overlay state.

/// Where a pointer activation landed while the overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The enlarged image or anything else inside the content frame.
    Content,
    /// The dimmed region around the content.
    Background,
    CloseControl,
}

#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    active_image: Option<String>,
}

impl LightboxController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `image`, replacing whatever was open. The reference is not checked.
    pub fn open(&mut self, image: impl Into<String>) {
        let image = image.into();
        tracing::debug!(%image, replaced = self.active_image.is_some(), "lightbox opened");
        self.active_image = Some(image);
    }

    pub fn close(&mut self) {
        if self.active_image.take().is_some() {
            tracing::debug!("lightbox closed");
        }
    }

    /// Routes a click on the overlay. Content clicks stop here and never reach
    /// the background handler. Returns whether the overlay was dismissed.
    pub fn handle_click(&mut self, target: OverlayTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        match target {
            OverlayTarget::Content => false,
            OverlayTarget::Background | OverlayTarget::CloseControl => {
                self.close();
                true
            }
        }
    }

    pub fn active_image(&self) -> Option<&str> {
        self.active_image.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.active_image.is_some()
    }
}

#[cfg(test)]
#[path = "tests/lightbox_tests.rs"]
mod tests;
