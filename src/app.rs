//! Storefront App
//!
//! Builds the controllers, provides them via context and lays out the page.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::auth::{Authenticator, DemoAuthenticator};
use crate::components::{
    CartPanel, CategoriesSection, FeatureToggles, LoginForm, NavBar, ProductGrid, PromoBanner, WeatherCard,
};
use crate::config::StorefrontConfig;
use crate::context::AppContext;
use crate::i18n::apply_document_locale;
use crate::store::{use_flag_effects, StorefrontState, StorefrontStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::load();
    let authenticator: Arc<dyn Authenticator> = Arc::new(DemoAuthenticator::new(config.demo_account.clone()));
    let ctx = AppContext::new(config, authenticator);
    let store = Store::new(StorefrontState::default());

    // Provide context to all children
    provide_context(ctx.clone());
    provide_context(store);

    // Load the server cart once on mount
    let cart = ctx.cart.clone();
    spawn_local(async move {
        if cart.fetch_all().await.is_ok() {
            log::info!("[APP] Cart ready, {} items in badge", cart.item_count());
        }
    });

    // Document direction and language follow the locale
    Effect::new(move |_| {
        apply_document_locale(store.locale().get());
    });

    let effects = use_flag_effects();

    view! {
        <div class="storefront" class:dark-theme=move || effects.get().dark_theme>
            <header>
                <NavBar />
            </header>

            <main class="container">
                <WeatherCard />
                <FeatureToggles />
                <PromoBanner />
                <CategoriesSection />
                <ProductGrid />
                <CartPanel />
                <LoginForm />
            </main>
        </div>
    }
}
