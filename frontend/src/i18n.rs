//! Locale switching and string lookup.
//!
//! Every visible string goes through [`translate`], which resolves a key
//! against the active locale and falls back to the key itself when no
//! translation exists.

mod strings;

use std::collections::HashMap;
use std::fmt;

use log::{info, warn};
use once_cell::sync::Lazy;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    It,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::It, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    /// Short label used by the language selectors.
    pub fn label(self) -> &'static str {
        match self {
            Locale::It => "ITA",
            Locale::En => "EN",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

impl Default for Locale {
    fn default() -> Self {
        config::DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

struct Translation {
    it: &'static str,
    en: &'static str,
}

static TRANSLATIONS: Lazy<HashMap<&'static str, Translation>> = Lazy::new(|| {
    strings::STRINGS
        .iter()
        .map(|&(key, it, en)| (key, Translation { it, en }))
        .collect()
});

/// Resolves `key` for `locale`, returning the key unchanged when it is unknown.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    match TRANSLATIONS.get(key) {
        Some(translation) => match locale {
            Locale::It => translation.it,
            Locale::En => translation.en,
        },
        None => {
            warn!("No translation found for key: {}", key);
            key
        }
    }
}

pub fn has_translation(key: &str) -> bool {
    TRANSLATIONS.contains_key(key)
}

/// Active locale plus a way to change it, shared through a Yew context.
#[derive(Clone, PartialEq)]
pub struct LocaleHandle {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

impl LocaleHandle {
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.locale, key)
    }
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let locale = use_state(Locale::default);

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            if *locale != next {
                info!("Switching locale to {}", next);
                locale.set(next);
            }
        })
    };

    let handle = LocaleHandle {
        locale: *locale,
        set_locale,
    };

    html! {
        <ContextProvider<LocaleHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<LocaleHandle>>
    }
}

/// Returns the nearest [`LocaleHandle`], or a fixed default-locale handle
/// when rendered outside a [`LocaleProvider`].
#[hook]
pub fn use_locale() -> LocaleHandle {
    use_context::<LocaleHandle>().unwrap_or_else(|| LocaleHandle {
        locale: Locale::default(),
        set_locale: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_key_resolves_per_locale() {
        assert_eq!(translate(Locale::It, "nav.login"), "Accedi");
        assert_eq!(translate(Locale::En, "nav.login"), "Login");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Locale::En, "nav.doesNotExist"), "nav.doesNotExist");
        assert!(!has_translation("nav.doesNotExist"));
    }

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("de"), None);
    }

    #[test]
    fn default_locale_is_italian() {
        assert_eq!(Locale::default(), Locale::It);
    }

    #[test]
    fn table_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (key, _, _) in strings::STRINGS {
            assert!(seen.insert(*key), "duplicate translation key {}", key);
        }
    }
}
