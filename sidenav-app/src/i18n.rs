use fluent_bundle::{FluentBundle, FluentResource};
use once_cell::unsync::Lazy;
use std::{collections::HashMap, rc::Rc};
use strum_macros::EnumIter;
use unic_langid::{langid, LanguageIdentifier};

const EN_US_FTL: &str = include_str!("../assets/locales/en-US/main.ftl");
const PL_PL_FTL: &str = include_str!("../assets/locales/pl-PL/main.ftl");

type BundleRc = Rc<FluentBundle<FluentResource>>;

#[derive(EnumIter, PartialEq, Eq, Hash, Copy, Clone, Debug, Default)]
pub enum Locale {
    #[default]
    EnUs,
    PlPl,
}

impl Locale {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PlPl => "pl-PL",
        }
    }

    /// Unknown tags fall back to the default locale.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pl-PL" => Locale::PlPl,
            _ => Locale::EnUs,
        }
    }
}

thread_local! {
    static BUNDLES: Lazy<HashMap<Locale, BundleRc>> = Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert(Locale::EnUs, Rc::new(build_bundle(langid!("en-US"), EN_US_FTL)));
        map.insert(Locale::PlPl, Rc::new(build_bundle(langid!("pl-PL"), PL_PL_FTL)));
        map
    });
}

fn build_bundle(lang: LanguageIdentifier, ftl: &str) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![lang]);
    let resource =
        FluentResource::try_new(ftl.to_string()).expect("Failed to parse Fluent resources");
    bundle
        .add_resource(resource)
        .expect("Failed to add Fluent resources to bundle");
    bundle
}

fn bundle_for(locale: Locale) -> Option<BundleRc> {
    BUNDLES.with(|bundles| bundles.get(&locale).cloned())
}

fn translate(bundle: &FluentBundle<FluentResource>, key: &str) -> Option<String> {
    let message = bundle.get_message(key)?;
    let pattern = message.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, None, &mut errors);
    if errors.is_empty() {
        Some(value.into_owned())
    } else {
        None
    }
}

/// Looks `key` up in `locale`, then in en-US, then gives the key back.
#[must_use]
pub fn t(locale: Locale, key: &str) -> String {
    bundle_for(locale)
        .and_then(|bundle| translate(&bundle, key))
        .or_else(|| bundle_for(Locale::EnUs).and_then(|bundle| translate(&bundle, key)))
        .unwrap_or_else(|| key.to_string())
}
