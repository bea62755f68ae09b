//! Product Grid Component
//!
//! Catalog cards whose buttons add one unit to the cart.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{Product, ADDED, BUY_NOW, PRODUCTS};
use crate::context::use_app_context;
use crate::i18n::LocalizedText;
use crate::store::{use_app_store, use_localized, StorefrontStateStoreFields};

const HEADING: LocalizedText = LocalizedText::new("منتجاتنا", "Our perfumes");
const CURRENCY: LocalizedText = LocalizedText::new("ر.س", "SAR");

const ADDED_BACKGROUND: &str = "#27ae60";
const DEFAULT_BACKGROUND: &str = "#a9745b";

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let cart = ctx.cart.clone();
    let feedback_ms = ctx.config.added_feedback_ms;
    let (added, set_added) = signal(false);

    let name = use_localized(product.name);
    let description = use_localized(product.description);
    let currency = use_localized(CURRENCY);
    let label = move || (if added.get() { ADDED } else { BUY_NOW }).get(store.locale().get());

    let on_click = move |_| {
        // the cart line carries the name as currently displayed
        let name = product.name.get(store.locale().get_untracked());
        let cart = cart.clone();
        spawn_local(async move {
            let _ = cart.add(product.cart_id(), 1, name).await;
        });

        set_added.set(true);
        Timeout::new(feedback_ms, move || set_added.set(false)).forget();
    };

    view! {
        <div class="product-card">
            <h3 class="product-name">{name}</h3>
            <p class="product-desc">{description}</p>
            <p class="product-price">{product.price_sar} " " {currency}</p>
            <button
                class="product-btn"
                data-product-id=product.id.unwrap_or_default()
                style:background=move || if added.get() { ADDED_BACKGROUND } else { DEFAULT_BACKGROUND }
                on:click=on_click
            >
                {label}
            </button>
        </div>
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    view! {
        <section id="products" class="products">
            <h2>{use_localized(HEADING)}</h2>
            <div class="product-grid">
                {PRODUCTS.iter().map(|product| view! { <ProductCard product=*product /> }).collect_view()}
            </div>
        </section>
    }
}
