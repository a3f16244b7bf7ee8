use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::i18n::{t, Locale};

#[component]
pub fn LocaleSwitch(mut locale: Signal<Locale>) -> Element {
    let current = locale();

    rsx! {
        select {
            class: "locale-switch",
            aria_label: t(current, "locale-label"),
            onchange: move |evt| locale.set(Locale::from_tag(&evt.value())),
            for choice in Locale::iter() {
                option {
                    key: "{choice.tag()}",
                    value: choice.tag(),
                    selected: choice == current,
                    {choice.tag()}
                }
            }
        }
    }
}
