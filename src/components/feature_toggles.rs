//! Feature Toggles Component
//!
//! One `.toggle[data-flag]` button per known flag.

use leptos::prelude::*;

use crate::flags::{CATEGORIES, DARK_THEME, KNOWN_FLAGS, PROMO_BANNER};
use crate::i18n::LocalizedText;
use crate::store::{store_toggle_flag, use_app_store, use_localized, StorefrontStateStoreFields};

fn flag_label(name: &str) -> LocalizedText {
    match name {
        DARK_THEME => LocalizedText::new("الوضع الليلي", "Dark theme"),
        PROMO_BANNER => LocalizedText::new("شريط العروض", "Promo banner"),
        CATEGORIES => LocalizedText::new("الأقسام", "Categories"),
        _ => LocalizedText::new("ميزة", "Feature"),
    }
}

#[component]
pub fn FeatureToggles() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="feature-toggles">
            {KNOWN_FLAGS.iter().map(|&name| {
                let label = use_localized(flag_label(name));
                let is_active = move || store.flags().read().is_enabled(name);
                view! {
                    <button
                        class="toggle"
                        class:active=is_active
                        data-flag=name
                        on:click=move |_| { store_toggle_flag(&store, name); }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
