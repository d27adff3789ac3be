//! Product types.

use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A product as listed by the backend.
///
/// Every field defaults when missing or `null`, so sparse product objects
/// (such as the one carried in checkout navigation state) still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Unique product identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: ProductId,
    /// Product name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Category name.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Unit price.
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Full description.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Manufacturer name.
    #[serde(deserialize_with = "null_as_default")]
    pub manufacturer: String,
    /// Units in stock.
    #[serde(deserialize_with = "null_as_default")]
    pub available_items: i64,
    /// Image URL.
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
}

impl Product {
    /// Format the price for display.
    pub fn price_display(&self) -> String {
        format!("₹ {:.2}", self.price)
    }

    /// Check if the product is in stock.
    pub fn is_available(&self) -> bool {
        self.available_items > 0
    }

    /// Case-insensitive match against name, manufacturer and description.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.manufacturer, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Body of the create and modify product calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Present only when modifying an existing product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub manufacturer: String,
    pub available_items: i64,
    pub image_url: String,
}

impl ProductInput {
    /// Prefill a modify form from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            description: product.description.clone(),
            manufacturer: product.manufacturer.clone(),
            available_items: product.available_items,
            image_url: product.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_backend_shape() {
        let json = r#"{
            "id": "64c3",
            "name": "Desk Lamp",
            "category": "Furniture",
            "price": 1499.5,
            "description": "Warm light",
            "manufacturer": "Lumen",
            "availableItems": 12,
            "imageUrl": "https://img.test/lamp.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "64c3");
        assert_eq!(product.available_items, 12);
        assert!(product.is_available());
        assert_eq!(product.price_display(), "₹ 1499.50");
    }

    #[test]
    fn test_partial_product_deserializes() {
        let product: Product = serde_json::from_str(r#"{"id": "p1"}"#).unwrap();
        assert_eq!(product.id.as_str(), "p1");
        assert!(product.name.is_empty());
        assert!(!product.is_available());
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let json = r#"[
            {"id": "p1", "name": "Lamp", "description": null, "imageUrl": null},
            {"id": "p2", "name": "Chair", "price": null, "availableItems": null, "manufacturer": null}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Lamp");
        assert!(products[0].description.is_empty());
        assert!(products[0].image_url.is_empty());
        assert_eq!(products[1].price, 0.0);
        assert_eq!(products[1].available_items, 0);
        assert!(products[1].manufacturer.is_empty());
    }

    #[test]
    fn test_search_matching() {
        let product = Product {
            name: "Desk Lamp".into(),
            manufacturer: "Lumen".into(),
            ..Default::default()
        };
        assert!(product.matches_search("lamp"));
        assert!(product.matches_search(" LUMEN "));
        assert!(product.matches_search(""));
        assert!(!product.matches_search("chair"));
    }

    #[test]
    fn test_input_skips_missing_id() {
        let input = ProductInput {
            name: "Chair".into(),
            available_items: 3,
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["availableItems"], 3);

        let product = Product {
            id: ProductId::new("p9"),
            name: "Chair".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(ProductInput::from_product(&product)).unwrap();
        assert_eq!(json["id"], "p9");
    }
}
