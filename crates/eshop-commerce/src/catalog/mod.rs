//! Product catalog module.
//!
//! Contains product and category types and the browsable catalog state.

mod category;
mod listing;
mod product;

pub use category::{with_all_category, ALL_CATEGORIES};
pub use listing::{Catalog, SortBy};
pub use product::{Product, ProductInput};
