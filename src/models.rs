//! Frontend Models
//!
//! Data structures matching the cart API payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Cart line / product identifier.
///
/// The API hands out numeric ids, catalog entries may use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl ItemId {
    /// Surrogate id from the current time in milliseconds
    pub fn timestamp() -> Self {
        ItemId::Num(chrono::Utc::now().timestamp_millis().max(0) as u64)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Num(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// Cart line item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<u32>,
}

impl CartItem {
    /// Quantity used for counting; a missing or zero quantity counts as one
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.filter(|q| *q > 0).unwrap_or(1)
    }
}

/// Any positive number is a quantity (floats rounded), everything else is `None`
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64).and_then(|q| {
        let q = q.round();
        (1.0..=u32::MAX as f64).contains(&q).then_some(q as u32)
    }))
}

/// Lines that do not parse as a `CartItem` are dropped, not fatal
fn lenient_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<CartItem>, D::Error> {
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|line| match serde_json::from_value::<CartItem>(line) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("[CART] Skipping malformed cart line: {}", e);
                None
            }
        })
        .collect())
}

/// Body returned by every cart endpoint except clear
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartResponse {
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<CartItem>,
}

/// Sum of effective quantities
pub fn total_quantity(items: &[CartItem]) -> u32 {
    items.iter().map(CartItem::effective_quantity).sum()
}
