//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Neither field is persisted: a reload starts from the defaults.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::flags::{FeatureFlags, FlagEffects};
use crate::i18n::{Locale, LocalizedText};

/// Page-wide UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct StorefrontState {
    /// Feature switches, all off at startup
    pub flags: FeatureFlags,
    /// Current language, Arabic at startup
    pub locale: Locale,
}

/// Type alias for the store
pub type AppStore = Store<StorefrontState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Reactive text that follows the current locale
pub fn use_localized(text: LocalizedText) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    let store = use_app_store();
    move || text.get(store.locale().get())
}

/// Reactive flag effects, recomputed only when the result changes
pub fn use_flag_effects() -> Memo<FlagEffects> {
    let store = use_app_store();
    Memo::new(move |_| store.flags().read().effects())
}

// ========================
// Store Helper Functions
// ========================

/// Flip a feature flag, returning its new value
pub fn store_toggle_flag(store: &AppStore, name: &str) -> bool {
    store.flags().write().toggle(name)
}

/// Flip the locale, returning the new one
pub fn store_switch_locale(store: &AppStore) -> Locale {
    let next = store.locale().read_untracked().toggled();
    *store.locale().write() = next;
    log::info!("[I18N] Language switched to {}", next.code());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{DARK_THEME, PROMO_BANNER};
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_store_round_trips() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(StorefrontState::default());

        let before = store.flags().read_untracked().effects();
        assert!(store_toggle_flag(&store, PROMO_BANNER));
        assert_eq!(store.flags().read_untracked().effects().promo_display, "block");
        assert!(!store_toggle_flag(&store, PROMO_BANNER));
        assert_eq!(store.flags().read_untracked().effects(), before);

        assert_eq!(store_switch_locale(&store), Locale::En);
        assert_eq!(store_switch_locale(&store), Locale::Ar);
        assert!(!store.flags().read_untracked().is_enabled(DARK_THEME));
    }
}
