//! The storefront's forms.

mod address;
mod login;
mod product;
mod signup;

pub use address::{AddressField, AddressSchema};
pub use login::{LoginField, LoginSchema};
pub use product::{ProductField, ProductSchema};
pub use signup::{SignUpField, SignUpSchema};
