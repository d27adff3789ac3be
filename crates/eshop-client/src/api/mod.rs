//! One function per backend operation.
//!
//! Each function sends exactly one request and settles it through the
//! uniform [`ApiResult`](eshop_data::ApiResult) contract. Protected calls
//! take the bearer token as an argument; callers get it from
//! [`AppContext::token`](crate::AppContext::token), which refuses expired
//! sessions before any I/O happens.

mod addresses;
mod auth;
mod orders;
mod products;

pub use addresses::{create_address, fetch_all_addresses};
pub use auth::{login, signup, BAD_CREDENTIALS_REASON};
pub use orders::create_order;
pub use products::{
    create_product, delete_product, fetch_all_categories, fetch_all_products, modify_product,
};

/// Backend paths, relative to the client's base URL.
pub mod paths {
    pub const SIGN_IN: &str = "/api/auth/signin";
    pub const SIGN_UP: &str = "/api/auth/signup";
    pub const CATEGORIES: &str = "/api/products/categories";
    pub const PRODUCTS: &str = "/api/products";
    pub const ADDRESSES: &str = "/api/addresses";
    pub const ORDERS: &str = "/api/orders";

    /// Path of one product.
    pub fn product(id: &str) -> String {
        format!("{}/{}", PRODUCTS, id)
    }
}
