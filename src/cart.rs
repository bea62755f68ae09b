//! Cart Controller
//!
//! Mirrors the server cart in a signal. Every successful response replaces
//! the local list wholesale; failures are logged and handled per operation:
//! - fetch: local cart reset to empty
//! - add: a local item with a timestamp id is appended so the UI reacts
//! - update / remove / clear: local state left as is
//!
//! Responses are applied in arrival order, the last one to resolve wins.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiResult, CartApi};
use crate::models::{total_quantity, CartItem, ItemId};

pub struct CartController<A> {
    api: Arc<A>,
    items: RwSignal<Vec<CartItem>>,
    loading: RwSignal<bool>,
}

impl<A> Clone for CartController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            items: self.items,
            loading: self.loading,
        }
    }
}

/// CSS `display` for the cart badge
pub fn badge_display(count: u32) -> &'static str {
    if count > 0 { "inline-block" } else { "none" }
}

impl<A: CartApi + 'static> CartController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
        }
    }

    pub fn items(&self) -> ReadSignal<Vec<CartItem>> {
        self.items.read_only()
    }

    /// Current item count without subscribing
    pub fn item_count(&self) -> u32 {
        self.items.with_untracked(|items| total_quantity(items))
    }

    /// Reactive item count for the badge
    pub fn count(&self) -> Signal<u32> {
        let items = self.items;
        Signal::derive(move || items.with(|items| total_quantity(items)))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.loading.into()
    }

    async fn request<T>(&self, call: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        self.loading.set(true);
        let result = call.await;
        self.loading.set(false);
        result
    }

    pub async fn fetch_all(&self) -> ApiResult<()> {
        match self.request(self.api.fetch_cart()).await {
            Ok(items) => {
                log::info!("[CART] Fetched {} items", items.len());
                self.items.set(items);
                Ok(())
            }
            Err(e) => {
                log::error!("[CART] Fetch failed: {}", e);
                self.items.set(Vec::new());
                Err(e)
            }
        }
    }

    pub async fn add(&self, product_id: ItemId, quantity: u32, name: &str) -> ApiResult<()> {
        match self.request(self.api.add_item(&product_id, quantity)).await {
            Ok(items) => {
                log::info!("[CART] Added {} to cart", name);
                self.items.set(items);
                Ok(())
            }
            Err(e) => {
                log::error!("[CART] Add failed: {}, keeping {} locally", e, name);
                let local = CartItem {
                    id: ItemId::timestamp(),
                    name: name.to_string(),
                    quantity: Some(quantity),
                };
                self.items.update(|items| items.push(local));
                Err(e)
            }
        }
    }

    /// Quantities below one remove the item
    pub async fn update_quantity(&self, item_id: ItemId, quantity: u32) -> ApiResult<()> {
        if quantity < 1 {
            return self.remove(item_id).await;
        }
        match self.request(self.api.update_item(&item_id, quantity)).await {
            Ok(items) => {
                self.items.set(items);
                Ok(())
            }
            Err(e) => {
                log::error!("[CART] Update of {} failed: {}", item_id, e);
                Err(e)
            }
        }
    }

    pub async fn remove(&self, item_id: ItemId) -> ApiResult<()> {
        match self.request(self.api.remove_item(&item_id)).await {
            Ok(items) => {
                self.items.set(items);
                Ok(())
            }
            Err(e) => {
                log::error!("[CART] Remove of {} failed: {}", item_id, e);
                Err(e)
            }
        }
    }

    pub async fn clear(&self) -> ApiResult<()> {
        match self.request(self.api.clear_cart()).await {
            Ok(()) => {
                log::info!("[CART] Cleared");
                self.items.set(Vec::new());
                Ok(())
            }
            Err(e) => {
                log::error!("[CART] Clear failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use async_trait::async_trait;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// In-memory server keyed by product id
    #[derive(Default)]
    struct MockCartApi {
        server: Mutex<Vec<CartItem>>,
        offline: AtomicBool,
    }

    impl MockCartApi {
        fn seeded(items: Vec<CartItem>) -> Self {
            Self { server: Mutex::new(items), offline: AtomicBool::new(false) }
        }

        fn set_offline(&self, offline: bool) {
            self.offline.store(offline, Ordering::SeqCst);
        }

        fn check(&self) -> ApiResult<()> {
            if self.offline.load(Ordering::SeqCst) {
                Err(ApiError::Status(503))
            } else {
                Ok(())
            }
        }

        fn snapshot(&self) -> Vec<CartItem> {
            self.server.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl CartApi for MockCartApi {
        async fn fetch_cart(&self) -> ApiResult<Vec<CartItem>> {
            self.check()?;
            Ok(self.snapshot())
        }

        async fn add_item(&self, product_id: &ItemId, quantity: u32) -> ApiResult<Vec<CartItem>> {
            self.check()?;
            let mut server = self.server.lock().unwrap();
            match server.iter().position(|item| &item.id == product_id) {
                Some(idx) => {
                    let current = server[idx].effective_quantity();
                    server[idx].quantity = Some(current + quantity);
                }
                None => server.push(line(product_id.clone(), Some(quantity))),
            }
            Ok(server.clone())
        }

        async fn update_item(&self, item_id: &ItemId, quantity: u32) -> ApiResult<Vec<CartItem>> {
            self.check()?;
            let mut server = self.server.lock().unwrap();
            let found = server.iter_mut().find(|item| &item.id == item_id).ok_or(ApiError::Status(404))?;
            found.quantity = Some(quantity);
            Ok(server.clone())
        }

        async fn remove_item(&self, item_id: &ItemId) -> ApiResult<Vec<CartItem>> {
            self.check()?;
            let mut server = self.server.lock().unwrap();
            server.retain(|item| &item.id != item_id);
            Ok(server.clone())
        }

        async fn clear_cart(&self) -> ApiResult<()> {
            self.check()?;
            self.server.lock().unwrap().clear();
            Ok(())
        }
    }

    fn line(id: ItemId, quantity: Option<u32>) -> CartItem {
        CartItem { id: id.clone(), name: format!("Perfume {}", id), quantity }
    }

    fn seed() -> Vec<CartItem> {
        vec![
            line(ItemId::Num(1), Some(2)),
            line(ItemId::Num(2), None),
            line(ItemId::from("oud"), Some(3)),
        ]
    }

    fn controller(api: MockCartApi) -> (Owner, CartController<MockCartApi>) {
        let owner = Owner::new();
        owner.set();
        (owner, CartController::new(api))
    }

    #[tokio::test]
    async fn test_fetch_sets_badge_count() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));

        cart.fetch_all().await.unwrap();

        assert_eq!(cart.items().get_untracked().len(), 3);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.count().get_untracked(), 6);
        assert_eq!(badge_display(cart.item_count()), "inline-block");
        assert!(!cart.is_loading().get_untracked());
    }

    #[tokio::test]
    async fn test_fetch_failure_resets_to_empty() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));
        cart.fetch_all().await.unwrap();

        cart.api.set_offline(true);
        assert_eq!(cart.fetch_all().await, Err(ApiError::Status(503)));

        assert!(cart.items().get_untracked().is_empty());
        assert_eq!(badge_display(cart.item_count()), "none");
        assert!(!cart.is_loading().get_untracked());
    }

    #[tokio::test]
    async fn test_add_replaces_with_server_list() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));
        cart.fetch_all().await.unwrap();

        cart.add(ItemId::from("musk"), 1, "White Musk").await.unwrap();
        cart.add(ItemId::from("musk"), 1, "White Musk").await.unwrap();

        assert_eq!(cart.items().get_untracked(), cart.api.snapshot());
        assert_eq!(cart.item_count(), 8);
    }

    #[tokio::test]
    async fn test_add_failure_keeps_local_item() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));
        cart.fetch_all().await.unwrap();
        cart.api.set_offline(true);

        let result = cart.add(ItemId::from("amber"), 1, "Amber Night").await;

        assert!(result.is_err());
        let items = cart.items().get_untracked();
        assert_eq!(items.len(), 4);
        let local = items.last().unwrap();
        assert_eq!(local.name, "Amber Night");
        assert_eq!(local.quantity, Some(1));
        assert!(matches!(local.id, ItemId::Num(_)));
        assert_eq!(cart.item_count(), 7);
        assert_eq!(cart.count().get_untracked(), cart.item_count());
        // server never saw it
        assert_eq!(cart.api.snapshot().len(), 3);
    }

    #[tokio::test]
    async fn test_next_fetch_drops_local_fallback_items() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));
        cart.api.set_offline(true);
        let _ = cart.add(ItemId::from("amber"), 1, "Amber Night").await;
        assert_eq!(cart.items().get_untracked().len(), 1);

        cart.api.set_offline(false);
        cart.fetch_all().await.unwrap();
        assert_eq!(cart.items().get_untracked(), seed());
    }

    #[tokio::test]
    async fn test_update_to_zero_equals_remove() {
        let (_owner, by_update) = controller(MockCartApi::seeded(seed()));
        let by_remove = CartController::new(MockCartApi::seeded(seed()));
        by_update.fetch_all().await.unwrap();
        by_remove.fetch_all().await.unwrap();

        by_update.update_quantity(ItemId::from("oud"), 0).await.unwrap();
        by_remove.remove(ItemId::from("oud")).await.unwrap();

        assert_eq!(by_update.items().get_untracked(), by_remove.items().get_untracked());
        assert_eq!(by_update.api.snapshot(), by_remove.api.snapshot());
        assert_eq!(by_update.item_count(), 3);
    }

    #[tokio::test]
    async fn test_update_quantity() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));
        cart.fetch_all().await.unwrap();

        cart.update_quantity(ItemId::Num(2), 5).await.unwrap();

        assert_eq!(cart.item_count(), 10);
    }

    #[tokio::test]
    async fn test_failed_mutations_leave_state() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));
        cart.fetch_all().await.unwrap();
        let before = cart.items().get_untracked();
        cart.api.set_offline(true);

        assert!(cart.update_quantity(ItemId::Num(1), 9).await.is_err());
        assert!(cart.remove(ItemId::Num(1)).await.is_err());
        assert!(cart.clear().await.is_err());

        assert_eq!(cart.items().get_untracked(), before);
        assert!(!cart.is_loading().get_untracked());
    }

    #[tokio::test]
    async fn test_clear_empties_cart() {
        let (_owner, cart) = controller(MockCartApi::seeded(seed()));
        cart.fetch_all().await.unwrap();

        cart.clear().await.unwrap();

        assert!(cart.items().get_untracked().is_empty());
        assert!(cart.api.snapshot().is_empty());
        assert_eq!(cart.count().get_untracked(), 0);
    }
}
