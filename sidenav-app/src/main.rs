use dioxus::prelude::*;
use sidenav_lib::config::CLOSED_WIDTH;

/// Define a components module that contains all shared components for our app.
mod components;
mod i18n;

use components::{
    layout::NavLayoutContext,
    main_view::{MainView, ViewKind},
    side_nav::SideNav,
};
use i18n::Locale;

fn main() {
    // The `launch` function is the main entry point for a dioxus app. It takes a component and renders it with the platform feature
    // you have enabled
    dioxus::launch(App);
}

/// Root of the shell. The nav starts closed: both region styles hold the closed width until the
/// first toggle.
#[component]
fn App() -> Element {
    let selection = use_signal(|| ViewKind::Home);
    let locale = use_signal(Locale::default);
    let panel_width = use_signal(|| CLOSED_WIDTH.to_string());
    let content_offset = use_signal(|| CLOSED_WIDTH.to_string());
    use_context_provider(|| NavLayoutContext {
        panel_width,
        content_offset,
    });

    rsx! {
        div { class: "app-shell",
            SideNav { selection, locale: locale() }
            MainView { selection, locale }
        }
    }
}
