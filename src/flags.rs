//! Feature Flags
//!
//! In-memory switches for optional page sections. Always start disabled.

use std::collections::BTreeMap;

pub const DARK_THEME: &str = "darkTheme";
pub const PROMO_BANNER: &str = "promoBanner";
pub const CATEGORIES: &str = "categories";

/// Flags with a visual effect, in toggle-bar order
pub const KNOWN_FLAGS: &[&str] = &[DARK_THEME, PROMO_BANNER, CATEGORIES];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlags {
    flags: BTreeMap<String, bool>,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            flags: KNOWN_FLAGS.iter().map(|name| (name.to_string(), false)).collect(),
        }
    }
}

/// What the current flags mean for the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagEffects {
    pub dark_theme: bool,
    pub promo_display: &'static str,
    pub categories_display: &'static str,
}

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a flag and return its new value.
    /// Unknown names are created on first toggle.
    pub fn toggle(&mut self, name: &str) -> bool {
        let value = self.flags.entry(name.to_string()).or_insert(false);
        *value = !*value;
        log::info!("Feature flag \"{}\" is now: {}", name, *value);
        *value
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn effects(&self) -> FlagEffects {
        FlagEffects {
            dark_theme: self.is_enabled(DARK_THEME),
            promo_display: if self.is_enabled(PROMO_BANNER) { "block" } else { "none" },
            categories_display: if self.is_enabled(CATEGORIES) { "grid" } else { "none" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_all_off() {
        let flags = FeatureFlags::new();
        assert!(KNOWN_FLAGS.iter().all(|name| !flags.is_enabled(name)));
        assert_eq!(
            flags.effects(),
            FlagEffects { dark_theme: false, promo_display: "none", categories_display: "none" }
        );
    }

    #[test]
    fn test_toggle_applies_effects() {
        let mut flags = FeatureFlags::new();
        assert!(flags.toggle(DARK_THEME));
        assert!(flags.toggle(CATEGORIES));

        let effects = flags.effects();
        assert!(effects.dark_theme);
        assert_eq!(effects.promo_display, "none");
        assert_eq!(effects.categories_display, "grid");
    }

    #[test]
    fn test_double_toggle_is_round_trip() {
        for name in KNOWN_FLAGS {
            let mut flags = FeatureFlags::new();
            let before = flags.effects();
            flags.toggle(name);
            assert_ne!(flags.effects(), before);
            flags.toggle(name);
            assert_eq!(flags.effects(), before);
        }
    }

    #[test]
    fn test_unknown_flag_created_without_effect() {
        let mut flags = FeatureFlags::new();
        let before = flags.effects();

        assert!(flags.toggle("giftWrap"));
        assert!(flags.is_enabled("giftWrap"));
        assert_eq!(flags.effects(), before);
    }
}
