//! Cart Badge Component
//!
//! Item count next to the cart link, hidden while the cart is empty.

use leptos::prelude::*;

use crate::cart::badge_display;
use crate::context::use_app_context;

#[component]
pub fn CartBadge() -> impl IntoView {
    let count = use_app_context().cart.count();

    view! {
        <span class="cart-count" style:display=move || badge_display(count.get())>
            {move || count.get()}
        </span>
    }
}
