//! Application Context
//!
//! Controllers and collaborators provided via Leptos Context API.
//! Built once in `App`; components never construct their own.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpCartApi;
use crate::auth::Authenticator;
use crate::cart::CartController;
use crate::config::StorefrontConfig;

pub type Cart = CartController<HttpCartApi>;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<StorefrontConfig>,
    pub cart: Cart,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppContext {
    pub fn new(config: StorefrontConfig, authenticator: Arc<dyn Authenticator>) -> Self {
        let cart = CartController::new(HttpCartApi::new(config.api_base.clone()));
        Self {
            config: Arc::new(config),
            cart,
            authenticator,
        }
    }
}

/// Get the app context; panics outside `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
