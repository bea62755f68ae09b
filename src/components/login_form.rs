//! Login Form Component
//!
//! Placeholder sign-in: no session or token is created.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{attempt_login, Credentials, LoginOutcome};
use crate::context::use_app_context;
use crate::i18n::LocalizedText;
use crate::store::{use_app_store, use_localized, StorefrontStateStoreFields};

const HEADING: LocalizedText = LocalizedText::new("تسجيل الدخول", "Sign in");
const EMAIL: LocalizedText = LocalizedText::new("البريد الإلكتروني", "Email");
const PASSWORD: LocalizedText = LocalizedText::new("كلمة المرور", "Password");
const SUBMIT: LocalizedText = LocalizedText::new("دخول", "Log in");

/// Read both fields and clear them. The form is cleared whatever the outcome.
fn take_credentials(email: RwSignal<String>, password: RwSignal<String>) -> Credentials {
    let credentials = Credentials::from_fields(&email.get_untracked(), &password.get_untracked());
    email.set(String::new());
    password.set(String::new());
    credentials
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let authenticator = use_app_context().authenticator;
    let store = use_app_store();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (outcome, set_outcome) = signal(None::<LoginOutcome>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = take_credentials(email, password);
        let authenticator = authenticator.clone();
        spawn_local(async move {
            let result = attempt_login(authenticator.as_ref(), &credentials).await;
            set_outcome.set(Some(result));
        });
    };

    let message = move || outcome.get().map(|o| o.message().get(store.locale().get()));
    let color = move || outcome.get().map(LoginOutcome::color).unwrap_or_default();

    view! {
        <section id="login" class="login">
            <h2>{use_localized(HEADING)}</h2>
            <form id="loginForm" on:submit=on_submit>
                <input
                    type="email"
                    id="email"
                    placeholder=use_localized(EMAIL)
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    id="password"
                    placeholder=use_localized(PASSWORD)
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit">{use_localized(SUBMIT)}</button>
            </form>
            <p id="message" style:color=color>{message}</p>
        </section>
    }
}
