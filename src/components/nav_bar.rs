//! Navigation Bar Component
//!
//! Section links scroll smoothly; the cart link carries the badge.

use leptos::prelude::*;
use leptos_smooth_scroll::AnchorLink;

use crate::components::{CartBadge, LanguageSwitch};
use crate::i18n::LocalizedText;
use crate::store::use_localized;

const BRAND: &str = "My Fragrance";

const LINKS: &[(&str, LocalizedText)] = &[
    ("#products", LocalizedText::new("المنتجات", "Products")),
    ("#categories", LocalizedText::new("الأقسام", "Categories")),
    ("#login", LocalizedText::new("الدخول", "Sign in")),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="main-nav">
            <span class="brand">{BRAND}</span>
            {LINKS.iter().map(|&(href, text)| {
                let text = use_localized(text);
                view! { <AnchorLink href=href>{text}</AnchorLink> }
            }).collect_view()}
            <AnchorLink href="#cart">
                "🛒 " <CartBadge />
            </AnchorLink>
            <LanguageSwitch />
        </nav>
    }
}
