//! Catalog, address and checkout types for the E-Shop storefront client.
//!
//! - **Catalog**: products, categories, filter and sort state
//! - **Checkout**: addresses, the order draft and the three-step wizard
//!
//! # Example
//!
//! ```rust,ignore
//! use eshop_commerce::prelude::*;
//!
//! let mut wizard = CheckoutWizard::enter(Some(r#"{"product":{"id":"p1"},"quantity":2}"#), None)?;
//! wizard.select_address(Some(address));
//! wizard.next();
//! let order = wizard.submission()?;
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductInput, SortBy, ALL_CATEGORIES};

    // Checkout
    pub use crate::checkout::{
        AddressRecord, CheckoutStep, CheckoutWizard, NewAddress, OrderDraft, StepChange,
        StepState,
    };
}
