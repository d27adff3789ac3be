//! Checkout module.
//!
//! Contains the address types, the order draft and the checkout wizard.

mod address;
mod flow;
mod order;

pub use address::{AddressRecord, NewAddress};
pub use flow::{parse_order_state, CheckoutStep, CheckoutWizard, StepChange, StepState};
pub use order::OrderDraft;
