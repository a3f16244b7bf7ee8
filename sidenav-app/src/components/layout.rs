use dioxus::prelude::*;
use sidenav_lib::{close_nav, toggle_nav, ContentRegion, NavConfig, NavState, PanelRegion};

/// Style values of the two regions, shared through the component context.
#[derive(Clone, Copy)]
pub struct NavLayoutContext {
    pub panel_width: Signal<String>,
    pub content_offset: Signal<String>,
}

/// Convenience hook to access the nav layout context.
#[must_use]
pub fn use_nav_layout() -> NavLayoutContext {
    use_context::<NavLayoutContext>()
}

/// A signal holding one inline style value, usable as either nav region.
struct StyleSignal(Signal<String>);

impl PanelRegion for StyleSignal {
    fn width(&self) -> Result<String, String> {
        Ok(self.0.read().clone())
    }

    fn set_width(&mut self, value: &str) -> Result<(), String> {
        self.0.set(value.to_string());
        Ok(())
    }
}

impl ContentRegion for StyleSignal {
    fn margin_left(&self) -> Result<String, String> {
        Ok(self.0.read().clone())
    }

    fn set_margin_left(&mut self, value: &str) -> Result<(), String> {
        self.0.set(value.to_string());
        Ok(())
    }
}

impl NavLayoutContext {
    fn regions(self) -> (StyleSignal, StyleSignal) {
        (StyleSignal(self.panel_width), StyleSignal(self.content_offset))
    }

    #[must_use]
    pub fn state(self) -> NavState {
        NavState::from_panel_width(&self.panel_width.read(), &NavConfig::default())
    }

    pub fn toggle(self) {
        let (mut panel, mut content) = self.regions();
        if let Err(e) = toggle_nav(&mut panel, &mut content, &NavConfig::default()) {
            tracing::error!("Failed to toggle navigation: {e}");
        }
    }

    pub fn close(self) {
        let (mut panel, mut content) = self.regions();
        if let Err(e) = close_nav(&mut panel, &mut content, &NavConfig::default()) {
            tracing::error!("Failed to close navigation: {e}");
        }
    }
}
