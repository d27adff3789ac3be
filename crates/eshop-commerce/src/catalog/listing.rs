//! Catalog state: categories, products, and the active filter and sort.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ALL_CATEGORIES};
use crate::CommerceError;

/// Product ordering offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortBy {
    /// Server order.
    #[default]
    Default,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Most recently added first (reverse server order).
    Newest,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Default,
        SortBy::PriceDesc,
        SortBy::PriceAsc,
        SortBy::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Default => "default",
            SortBy::PriceDesc => "price-desc",
            SortBy::PriceAsc => "price-asc",
            SortBy::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Default => "Default",
            SortBy::PriceDesc => "Price: High to Low",
            SortBy::PriceAsc => "Price: Low to High",
            SortBy::Newest => "Newest",
        }
    }
}

impl FromStr for SortBy {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s.to_lowercase())
            .ok_or_else(|| CommerceError::UnknownSort(s.to_string()))
    }
}

/// Catalog contents plus the user's browsing choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Category names, `"ALL"` first.
    pub categories: Vec<String>,
    /// Products in server order.
    pub products: Vec<Product>,
    /// Selected category; `None` shows every category.
    pub filter: Option<String>,
    pub sort_by: SortBy,
    /// Free-text search from the app bar.
    pub search: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Catalog {
    /// Catalog built from freshly fetched data. Categories are expected to
    /// already carry the leading `"ALL"`.
    pub fn loaded(categories: Vec<String>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
            filter: None,
            sort_by: SortBy::Default,
            search: String::new(),
        }
    }

    /// Degraded catalog used when initialization fails.
    pub fn empty() -> Self {
        Self::loaded(vec![ALL_CATEGORIES.to_string()], Vec::new())
    }

    /// Select a category. `"ALL"` clears the filter.
    pub fn set_filter(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.filter = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category)
        };
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// The category shown as selected.
    pub fn selected_category(&self) -> &str {
        self.filter.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    /// Find a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products after applying filter, search and sort.
    pub fn visible_products(&self) -> Vec<&Product> {
        let mut visible: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| match &self.filter {
                Some(category) => &p.category == category,
                None => true,
            })
            .filter(|p| p.matches_search(&self.search))
            .collect();

        match self.sort_by {
            SortBy::Default => {}
            SortBy::PriceDesc => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortBy::PriceAsc => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortBy::Newest => visible.reverse(),
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(id: &str, category: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Item {}", id),
            category: category.to_string(),
            price,
            ..Default::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::loaded(
            vec!["ALL".into(), "Apparel".into(), "Electronics".into()],
            vec![
                product("1", "Apparel", 500.0),
                product("2", "Electronics", 1500.0),
                product("3", "Apparel", 50.0),
            ],
        )
    }

    fn ids(products: Vec<&Product>) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_catalog_has_all_category() {
        let catalog = Catalog::empty();
        assert_eq!(catalog.categories, vec!["ALL"]);
        assert!(catalog.products.is_empty());
    }

    #[test]
    fn test_filter_and_clear() {
        let mut catalog = catalog();
        catalog.set_filter("Apparel");
        assert_eq!(ids(catalog.visible_products()), vec!["1", "3"]);
        assert_eq!(catalog.selected_category(), "Apparel");

        catalog.set_filter("ALL");
        assert_eq!(catalog.filter, None);

        catalog.set_filter("Electronics");
        catalog.clear_filter();
        assert_eq!(catalog.visible_products().len(), 3);
    }

    #[test]
    fn test_sorting() {
        let mut catalog = catalog();
        catalog.set_sort_by(SortBy::PriceAsc);
        assert_eq!(ids(catalog.visible_products()), vec!["3", "1", "2"]);
        catalog.set_sort_by(SortBy::PriceDesc);
        assert_eq!(ids(catalog.visible_products()), vec!["2", "1", "3"]);
        catalog.set_sort_by(SortBy::Newest);
        assert_eq!(ids(catalog.visible_products()), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_search_combines_with_filter() {
        let mut catalog = catalog();
        catalog.set_filter("Apparel");
        catalog.set_search("item 3");
        assert_eq!(ids(catalog.visible_products()), vec!["3"]);
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("price-asc".parse::<SortBy>().unwrap(), SortBy::PriceAsc);
        assert_eq!("NEWEST".parse::<SortBy>().unwrap(), SortBy::Newest);
        assert!("cheapest".parse::<SortBy>().is_err());
    }
}
