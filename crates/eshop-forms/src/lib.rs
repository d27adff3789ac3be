//! Form validation engine for the E-Shop storefront client.
//!
//! A [`FormSchema`] lists a form's fields and the [`Rule`] for each. A
//! [`FormState`] holds the per-field value, error flag, message and touched
//! flag for one instance of the form:
//!
//! - [`FormState::on_change`] stores a value without validating,
//! - [`FormState::on_blur`] validates one field,
//! - [`FormState::submit`] validates every field and builds the typed body.
//!
//! ```rust,ignore
//! use eshop_forms::{AddressField, AddressSchema, FormState};
//!
//! let mut form = FormState::<AddressSchema>::new();
//! form.on_change(AddressField::Zipcode, "56000");
//! form.on_blur(AddressField::Zipcode);
//! assert_eq!(
//!     form.field(AddressField::Zipcode).helper_text(),
//!     Some("Please enter valid zip code.")
//! );
//! ```

mod error;
mod field;
mod form;
pub mod rule;
mod schemas;

pub use error::FormError;
pub use field::FormField;
pub use form::{FormSchema, FormState};
pub use rule::{Rule, REQUIRED_MESSAGE};
pub use schemas::*;
