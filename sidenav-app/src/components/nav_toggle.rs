use dioxus::prelude::*;

use crate::components::layout::use_nav_layout;
use crate::i18n::{t, Locale};

#[component]
pub fn NavToggleButton(locale: Locale) -> Element {
    let layout = use_nav_layout();
    let open = layout.state().is_open();
    let label = if open {
        t(locale, "nav-close")
    } else {
        t(locale, "nav-open")
    };

    rsx! {
        button {
            class: "nav-toggle",
            aria_label: "{label}",
            aria_expanded: "{open}",
            aria_controls: sidenav_lib::config::DEFAULT_PANEL_ID,
            onclick: move |_| layout.toggle(),
            "☰"
        }
    }
}
