use dioxus::prelude::*;
use sidenav_lib::config::DEFAULT_CONTENT_ID;
use strum_macros::EnumIter;

use crate::components::{
    layout::use_nav_layout, locale_switch::LocaleSwitch, nav_toggle::NavToggleButton,
};
use crate::i18n::{t, Locale};

#[derive(EnumIter, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewKind {
    Home,
    Courses,
    LearningStyles,
    Students,
}

impl ViewKind {
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            ViewKind::Home => "view-home",
            ViewKind::Courses => "view-courses",
            ViewKind::LearningStyles => "view-learning-styles",
            ViewKind::Students => "view-students",
        }
    }

    #[must_use]
    pub fn body_key(self) -> &'static str {
        match self {
            ViewKind::Home => "view-home-body",
            ViewKind::Courses => "view-courses-body",
            ViewKind::LearningStyles => "view-learning-styles-body",
            ViewKind::Students => "view-students-body",
        }
    }
}

#[component]
pub fn MainView(selection: Signal<ViewKind>, locale: Signal<Locale>) -> Element {
    let layout = use_nav_layout();
    let offset = layout.content_offset.read().clone();
    let view = selection();
    let lang = locale();

    rsx! {
        main {
            id: DEFAULT_CONTENT_ID,
            class: "content-shell",
            role: "main",
            style: "margin-left: {offset}; transition: margin-left 0.5s; padding: 16px;",
            header { class: "content-shell__header",
                NavToggleButton { locale: lang }
                h1 { {t(lang, view.title_key())} }
                LocaleSwitch { locale }
            }
            p { {t(lang, view.body_key())} }
        }
    }
}
