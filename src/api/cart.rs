//! Cart API
//!
//! `CartApi` is the seam between the cart controller and the server.
//! `HttpCartApi` talks to the real endpoints.

use async_trait::async_trait;
use serde::Serialize;

use super::{endpoint_url, send_empty, send_json, with_credentials, ApiResult};
use crate::models::{CartResponse, CartItem, ItemId};

/// Server-held cart. Every mutating call returns the full new item list,
/// except `clear_cart` which returns nothing.
#[async_trait(?Send)]
pub trait CartApi: Send + Sync {
    async fn fetch_cart(&self) -> ApiResult<Vec<CartItem>>;

    async fn add_item(&self, product_id: &ItemId, quantity: u32) -> ApiResult<Vec<CartItem>>;

    async fn update_item(&self, item_id: &ItemId, quantity: u32) -> ApiResult<Vec<CartItem>>;

    async fn remove_item(&self, item_id: &ItemId) -> ApiResult<Vec<CartItem>>;

    async fn clear_cart(&self) -> ApiResult<()>;
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct AddItemBody<'a> {
    perfume_id: &'a ItemId,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateItemBody<'a> {
    item_id: &'a ItemId,
    quantity: u32,
}

// ========================
// HTTP Implementation
// ========================

#[derive(Debug, Clone)]
pub struct HttpCartApi {
    base: String,
}

impl HttpCartApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = reqwest::Client::new()
            .request(method, endpoint_url(&self.base, path))
            .header("Content-Type", "application/json");
        with_credentials(builder)
    }
}

#[async_trait(?Send)]
impl CartApi for HttpCartApi {
    async fn fetch_cart(&self) -> ApiResult<Vec<CartItem>> {
        let resp: CartResponse = send_json(self.request(reqwest::Method::GET, "cart")).await?;
        Ok(resp.items)
    }

    async fn add_item(&self, product_id: &ItemId, quantity: u32) -> ApiResult<Vec<CartItem>> {
        let builder = self
            .request(reqwest::Method::POST, "cart/add")
            .json(&AddItemBody { perfume_id: product_id, quantity });
        let resp: CartResponse = send_json(builder).await?;
        Ok(resp.items)
    }

    async fn update_item(&self, item_id: &ItemId, quantity: u32) -> ApiResult<Vec<CartItem>> {
        let builder = self
            .request(reqwest::Method::PUT, "cart/update")
            .json(&UpdateItemBody { item_id, quantity });
        let resp: CartResponse = send_json(builder).await?;
        Ok(resp.items)
    }

    async fn remove_item(&self, item_id: &ItemId) -> ApiResult<Vec<CartItem>> {
        let path = format!("cart/remove/{}", item_id);
        let resp: CartResponse = send_json(self.request(reqwest::Method::DELETE, &path)).await?;
        Ok(resp.items)
    }

    async fn clear_cart(&self) -> ApiResult<()> {
        send_empty(self.request(reqwest::Method::DELETE, "cart/clear")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_bodies_use_backend_field_names() {
        let id = ItemId::from("oud-1");
        let add = serde_json::to_value(AddItemBody { perfume_id: &id, quantity: 1 }).unwrap();
        assert_eq!(add, serde_json::json!({"perfume_id": "oud-1", "quantity": 1}));

        let id = ItemId::Num(12);
        let update = serde_json::to_value(UpdateItemBody { item_id: &id, quantity: 3 }).unwrap();
        assert_eq!(update, serde_json::json!({"item_id": 12, "quantity": 3}));
    }
}
