//! Language Switch Component
//!
//! Flips the page language. Localized text and the document `dir`/`lang`
//! attributes follow the store, so repeated clicks are a clean toggle.

use leptos::prelude::*;

use crate::store::{store_switch_locale, use_app_store, StorefrontStateStoreFields};

#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            id="langSwitch"
            class="lang-switch"
            on:click=move |_| { store_switch_locale(&store); }
        >
            {move || store.locale().get().switch_label()}
        </button>
    }
}
