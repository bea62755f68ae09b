//! Flag-Controlled Sections
//!
//! Promo banner and category grid, shown only while their flag is on.

use leptos::prelude::*;

use crate::catalog::CATEGORIES;
use crate::i18n::LocalizedText;
use crate::store::{use_flag_effects, use_localized};

const PROMO: LocalizedText = LocalizedText::new(
    "🎁 خصم 20% على جميع العطور هذا الأسبوع!",
    "🎁 20% off all perfumes this week!",
);
const CATEGORIES_HEADING: LocalizedText = LocalizedText::new("تسوق حسب القسم", "Shop by category");

#[component]
pub fn PromoBanner() -> impl IntoView {
    let effects = use_flag_effects();

    view! {
        <div id="promoBanner" class="promo-banner" style:display=move || effects.get().promo_display>
            {use_localized(PROMO)}
        </div>
    }
}

#[component]
pub fn CategoriesSection() -> impl IntoView {
    let effects = use_flag_effects();

    view! {
        <section id="categories" class="categories" style:display=move || effects.get().categories_display>
            <h2>{use_localized(CATEGORIES_HEADING)}</h2>
            {CATEGORIES.iter().map(|&category| view! {
                <div class="category-card">{use_localized(category)}</div>
            }).collect_view()}
        </section>
    }
}
