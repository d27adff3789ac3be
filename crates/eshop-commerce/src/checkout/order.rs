//! Order draft assembled by the checkout wizard.

use crate::checkout::AddressRecord;
use crate::ids::{AddressId, ProductId, UserId};
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// The order being placed.
///
/// Product and quantity are fixed when checkout starts; the address is set
/// while the user picks one. `address_object` stays on the client and is not
/// part of the create-order body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub quantity: u32,
    pub user: Option<UserId>,
    pub product: ProductId,
    pub address: Option<AddressId>,
    #[serde(skip)]
    pub address_object: Option<AddressRecord>,
}

impl OrderDraft {
    /// Start a draft for a product and quantity.
    pub fn new(product: ProductId, quantity: u32, user: Option<UserId>) -> Self {
        Self {
            quantity,
            user,
            product,
            address: None,
            address_object: None,
        }
    }

    /// Set or clear the delivery address.
    pub fn set_address(&mut self, address: Option<AddressRecord>) {
        self.address = address.as_ref().map(|a| a.id.clone());
        self.address_object = address;
    }

    /// Check that the draft can be submitted.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.address.is_none() {
            return Err(CommerceError::CheckoutIncomplete("address".to_string()));
        }
        if self.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        Ok(())
    }
}
