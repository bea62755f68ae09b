//! Localization
//!
//! Two-state locale (Arabic / English) and paired localized strings.

use serde::{Deserialize, Serialize};

/// Active page language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }

    /// Value for the `lang` attribute
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Value for the `dir` attribute
    pub fn dir(self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::En => "ltr",
        }
    }

    /// Label on the switch button: names the language a click switches to
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::Ar => "EN",
            Locale::En => "AR",
        }
    }
}

/// Compile-time text pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub ar: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ar => self.ar,
            Locale::En => self.en,
        }
    }
}

/// Runtime text pair, used for configurable labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub ar: String,
    pub en: String,
}

impl LocalizedString {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar => &self.ar,
            Locale::En => &self.en,
        }
    }
}

/// Set `dir` and `lang` on the `<html>` element.
pub fn apply_document_locale(locale: Locale) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("dir", locale.dir());
    let _ = root.set_attribute("lang", locale.code());
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: LocalizedText = LocalizedText::new("مرحبا", "Hello");

    #[test]
    fn test_double_toggle_restores_everything() {
        let start = Locale::default();
        let once = start.toggled();
        let twice = once.toggled();

        assert_eq!(once, Locale::En);
        assert_eq!(GREETING.get(once), "Hello");
        assert_eq!((once.dir(), once.code()), ("ltr", "en"));

        assert_eq!(twice, start);
        assert_eq!(GREETING.get(twice), GREETING.get(start));
        assert_eq!((twice.dir(), twice.code()), ("rtl", "ar"));
        assert_eq!(twice.switch_label(), start.switch_label());
    }

    #[test]
    fn test_switch_label_names_other_language() {
        assert_eq!(Locale::Ar.switch_label(), "EN");
        assert_eq!(Locale::En.switch_label(), "AR");
    }
}
