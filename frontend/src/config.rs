use crate::i18n::Locale;
use log::Level;

/// Locale shown on first load, before the visitor picks one.
pub const DEFAULT_LOCALE: Locale = Locale::It;

pub const CONTACT_EMAIL: &str = "info@sustanet.it";

/// Vertical scroll offset (px) after which the navigation bar gets its shadow.
pub const NAV_SHADOW_THRESHOLD: f64 = 10.0;

/// Minimum length for first and last name in the waiting-list form.
pub const MIN_NAME_LENGTH: usize = 2;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
