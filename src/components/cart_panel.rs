//! Cart Panel Component
//!
//! Line items with quantity controls, remove and clear actions.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiResult;
use crate::components::ConfirmButton;
use crate::context::{use_app_context, Cart};
use crate::i18n::LocalizedText;
use crate::models::CartItem;
use crate::store::use_localized;

const TITLE: LocalizedText = LocalizedText::new("سلة المشتريات", "Shopping cart");
const EMPTY: LocalizedText = LocalizedText::new("السلة فارغة", "Your cart is empty");
const CLEAR: LocalizedText = LocalizedText::new("تفريغ السلة", "Clear cart");
const UPDATING: LocalizedText = LocalizedText::new("جاري التحديث...", "Updating...");

/// Fire a cart operation; failures are already logged by the controller
fn run_cart_op<F, Fut>(cart: &Cart, op: F)
where
    F: FnOnce(Cart) -> Fut,
    Fut: Future<Output = ApiResult<()>> + 'static,
{
    let fut = op(cart.clone());
    spawn_local(async move {
        let _ = fut.await;
    });
}

/// Single cart line
#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let cart = use_app_context().cart;
    let quantity = item.effective_quantity();

    let decrement = {
        let cart = cart.clone();
        let id = item.id.clone();
        move |_| {
            let id = id.clone();
            // dropping to zero removes the line
            run_cart_op(&cart, move |c| async move { c.update_quantity(id, quantity.saturating_sub(1)).await });
        }
    };
    let increment = {
        let cart = cart.clone();
        let id = item.id.clone();
        move |_| {
            let id = id.clone();
            run_cart_op(&cart, move |c| async move { c.update_quantity(id, quantity + 1).await });
        }
    };
    let remove = {
        let id = item.id.clone();
        move |_| {
            let id = id.clone();
            run_cart_op(&cart, move |c| async move { c.remove(id).await });
        }
    };

    view! {
        <li class="cart-row">
            <span class="cart-row-name">{item.name.clone()}</span>
            <span class="cart-row-qty">
                <button class="qty-btn" on:click=decrement>"−"</button>
                <span>{quantity}</span>
                <button class="qty-btn" on:click=increment>"+"</button>
            </span>
            <button class="remove-btn" on:click=remove>"×"</button>
        </li>
    }
}

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = use_app_context().cart;
    let items = cart.items();
    let loading = cart.is_loading();
    let title = use_localized(TITLE);
    let empty = use_localized(EMPTY);
    let updating = use_localized(UPDATING);

    let clear_cart = Callback::new(move |_: ()| {
        run_cart_op(&cart, |c| async move { c.clear().await });
    });

    view! {
        <aside class="cart-panel" id="cart">
            <h2>{title}</h2>
            <Show when=move || loading.get()>
                <p class="cart-loading">{updating}</p>
            </Show>
            <Show
                when=move || !items.with(|items| items.is_empty())
                fallback=move || view! { <p class="cart-empty">{empty}</p> }
            >
                <ul class="cart-items">
                    {move || items.get().into_iter().map(|item| view! { <CartRow item=item /> }).collect_view()}
                </ul>
                <ConfirmButton button_class="clear-cart-btn" label=CLEAR on_confirm=clear_cart />
            </Show>
        </aside>
    }
}
