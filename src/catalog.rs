//! Product Catalog
//!
//! Static perfume list and category names shown on the page.

use crate::i18n::LocalizedText;
use crate::models::ItemId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    /// Backend product id; products without one get a timestamp id when added
    pub id: Option<&'static str>,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub price_sar: u32,
}

impl Product {
    pub fn cart_id(&self) -> ItemId {
        self.id.map(ItemId::from).unwrap_or_else(ItemId::timestamp)
    }
}

pub const BUY_NOW: LocalizedText = LocalizedText::new("اشتري الآن", "Buy now");
pub const ADDED: LocalizedText = LocalizedText::new("تم الإضافة!", "Added!");

pub const PRODUCTS: &[Product] = &[
    Product {
        id: Some("oud-royal"),
        name: LocalizedText::new("عود ملكي", "Royal Oud"),
        description: LocalizedText::new("عود كمبودي مع لمسة ورد طائفي", "Cambodian oud with a touch of Taif rose"),
        price_sar: 450,
    },
    Product {
        id: Some("white-musk"),
        name: LocalizedText::new("مسك أبيض", "White Musk"),
        description: LocalizedText::new("مسك ناعم ونظيف لكل يوم", "Soft, clean musk for every day"),
        price_sar: 180,
    },
    Product {
        id: Some("amber-night"),
        name: LocalizedText::new("ليالي العنبر", "Amber Nights"),
        description: LocalizedText::new("عنبر دافئ مع الفانيليا", "Warm amber with vanilla"),
        price_sar: 320,
    },
    Product {
        id: None,
        name: LocalizedText::new("إصدار محدود", "Limited Edition"),
        description: LocalizedText::new("تركيبة موسمية", "Seasonal blend"),
        price_sar: 600,
    },
];

pub const CATEGORIES: &[LocalizedText] = &[
    LocalizedText::new("شرقي", "Oriental"),
    LocalizedText::new("زهري", "Floral"),
    LocalizedText::new("خشبي", "Woody"),
    LocalizedText::new("منعش", "Fresh"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_id() {
        assert_eq!(PRODUCTS[0].cart_id(), ItemId::from("oud-royal"));
        assert!(matches!(PRODUCTS[3].cart_id(), ItemId::Num(ms) if ms > 0));
    }
}
