//! Add/modify product form.

use eshop_commerce::catalog::{Product, ProductInput};

use crate::rule::{COUNT_RE, PRICE_RE};
use crate::{FormError, FormSchema, FormState, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Category,
    Manufacturer,
    AvailableItems,
    Price,
    ImageUrl,
    Description,
}

#[derive(Debug, Clone, Copy)]
pub struct ProductSchema;

impl FormSchema for ProductSchema {
    type Field = ProductField;
    type Output = ProductInput;

    const FIELDS: &'static [ProductField] = &[
        ProductField::Name,
        ProductField::Category,
        ProductField::Manufacturer,
        ProductField::AvailableItems,
        ProductField::Price,
        ProductField::ImageUrl,
        ProductField::Description,
    ];

    fn name(field: ProductField) -> &'static str {
        match field {
            ProductField::Name => "name",
            ProductField::Category => "category",
            ProductField::Manufacturer => "manufacturer",
            ProductField::AvailableItems => "availableItems",
            ProductField::Price => "price",
            ProductField::ImageUrl => "imageUrl",
            ProductField::Description => "description",
        }
    }

    fn label(field: ProductField) -> &'static str {
        match field {
            ProductField::Name => "Name *",
            ProductField::Category => "Category *",
            ProductField::Manufacturer => "Manufacturer *",
            ProductField::AvailableItems => "Available Items *",
            ProductField::Price => "Price *",
            ProductField::ImageUrl => "Image URL",
            ProductField::Description => "Product Description",
        }
    }

    fn rule(field: ProductField) -> Rule<ProductField> {
        match field {
            ProductField::Name | ProductField::Category | ProductField::Manufacturer => {
                Rule::Required
            }
            ProductField::AvailableItems => {
                Rule::required(&COUNT_RE, "Please enter valid number of items.")
            }
            ProductField::Price => Rule::required(&PRICE_RE, "Please enter valid price."),
            ProductField::ImageUrl | ProductField::Description => Rule::Optional,
        }
    }

    fn build(form: &FormState<Self>) -> Result<ProductInput, FormError> {
        let value = |field| form.value(field).trim().to_string();
        let price = value(ProductField::Price)
            .parse::<f64>()
            .map_err(|e| FormError::Conversion {
                field: "price",
                message: e.to_string(),
            })?;
        let available_items = value(ProductField::AvailableItems)
            .parse::<i64>()
            .map_err(|e| FormError::Conversion {
                field: "availableItems",
                message: e.to_string(),
            })?;

        Ok(ProductInput {
            id: None,
            name: value(ProductField::Name),
            category: value(ProductField::Category),
            price,
            description: value(ProductField::Description),
            manufacturer: value(ProductField::Manufacturer),
            available_items,
            image_url: value(ProductField::ImageUrl),
        })
    }
}

impl FormState<ProductSchema> {
    /// A modify form prefilled from an existing product.
    pub fn from_product(product: &Product) -> Self {
        let mut form = Self::new();
        form.on_change(ProductField::Name, product.name.as_str());
        form.on_change(ProductField::Category, product.category.as_str());
        form.on_change(ProductField::Manufacturer, product.manufacturer.as_str());
        form.on_change(ProductField::AvailableItems, product.available_items.to_string());
        form.on_change(ProductField::Price, product.price.to_string());
        form.on_change(ProductField::ImageUrl, product.image_url.as_str());
        form.on_change(ProductField::Description, product.description.as_str());
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eshop_commerce::ids::ProductId;

    #[test]
    fn test_numbers_are_parsed() {
        let mut form = FormState::<ProductSchema>::new();
        form.on_change(ProductField::Name, "Desk Lamp");
        form.on_change(ProductField::Category, "Furniture");
        form.on_change(ProductField::Manufacturer, "Lumen");
        form.on_change(ProductField::AvailableItems, "12");
        form.on_change(ProductField::Price, "499.50");

        let input = form.submit().unwrap();
        assert_eq!(input.price, 499.5);
        assert_eq!(input.available_items, 12);
        assert_eq!(input.description, "");
        assert!(input.id.is_none());
    }

    #[test]
    fn test_bad_numbers_flagged() {
        let mut form = FormState::<ProductSchema>::new();
        form.on_change(ProductField::AvailableItems, "-1");
        form.on_change(ProductField::Price, "1.999");
        form.validate_all();
        assert_eq!(
            form.field(ProductField::Price).helper_text(),
            Some("Please enter valid price.")
        );
        assert_eq!(
            form.invalid_fields(),
            vec!["name", "category", "manufacturer", "availableItems", "price"]
        );
    }

    #[test]
    fn test_prefill_from_product() {
        let product = Product {
            id: ProductId::new("p1"),
            name: "Desk Lamp".into(),
            category: "Furniture".into(),
            manufacturer: "Lumen".into(),
            price: 1200.0,
            available_items: 3,
            ..Default::default()
        };
        let mut form = FormState::<ProductSchema>::from_product(&product);
        assert_eq!(form.value(ProductField::Price), "1200");
        let input = form.submit().unwrap();
        assert_eq!(input.price, 1200.0);
        assert_eq!(input.name, "Desk Lamp");
    }
}
