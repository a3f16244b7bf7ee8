use dioxus::prelude::*;
use sidenav_lib::config::DEFAULT_PANEL_ID;
use strum::IntoEnumIterator;

use crate::components::layout::use_nav_layout;
use crate::components::main_view::ViewKind;
use crate::i18n::{t, Locale};

const SIDE_NAV_STYLE: &str = "height: 100%; position: fixed; z-index: 1; top: 0; left: 0; \
     background-color: #111; overflow-x: hidden; padding-top: 60px; transition: 0.5s;";

#[component]
pub fn SideNav(mut selection: Signal<ViewKind>, locale: Locale) -> Element {
    let layout = use_nav_layout();
    let width = layout.panel_width.read().clone();
    let current = selection();

    rsx! {
        nav {
            id: DEFAULT_PANEL_ID,
            class: "sidenav",
            style: "width: {width}; {SIDE_NAV_STYLE}",
            aria_label: t(locale, "nav-title"),
            button {
                class: "sidenav__close",
                aria_label: t(locale, "nav-close"),
                onclick: move |_| layout.close(),
                "×"
            }
            for view in ViewKind::iter() {
                button {
                    key: "{view:?}",
                    class: link_class(view == current),
                    onclick: move |_| {
                        selection.set(view);
                        layout.close();
                    },
                    {t(locale, view.title_key())}
                }
            }
        }
    }
}

fn link_class(selected: bool) -> &'static str {
    if selected {
        "sidenav__link sidenav__link--selected"
    } else {
        "sidenav__link"
    }
}
