//! Light/dark preference and its presentation side effect.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Receiver of the dark/light marker. Applying the same value twice must leave
/// the presentation in the same state.
pub trait ThemeSink: Send + Sync {
    fn apply_dark(&self);
    fn apply_light(&self);
}

/// Process-wide dark marker shared between the theme controller and a renderer.
#[derive(Debug, Clone, Default)]
pub struct ThemeMarker {
    dark: Arc<AtomicBool>,
}

impl ThemeMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Acquire)
    }
}

impl ThemeSink for ThemeMarker {
    fn apply_dark(&self) {
        self.dark.store(true, Ordering::Release);
    }

    fn apply_light(&self) {
        self.dark.store(false, Ordering::Release);
    }
}

pub struct ThemeController {
    is_dark: bool,
    sink: Arc<dyn ThemeSink>,
}

impl ThemeController {
    /// Starts in light mode and settles the sink immediately.
    pub fn new(sink: Arc<dyn ThemeSink>) -> Self {
        let controller = Self {
            is_dark: false,
            sink,
        };
        controller.settle();
        controller
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
        self.settle();
    }

    // Re-applied on every transition, even when the sink already matches.
    fn settle(&self) {
        if self.is_dark {
            self.sink.apply_dark();
        } else {
            self.sink.apply_light();
        }
        tracing::debug!(dark = self.is_dark, "theme settled");
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("is_dark", &self.is_dark)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
