//! Checkout wizard state machine.
//!
//! The wizard shows three steps in a stepper. `active_step` is the index of
//! the step being worked on: checkout opens on the address step (index 1)
//! with the items step already completed, since the product and quantity
//! were chosen before entry.

use crate::catalog::Product;
use crate::checkout::{AddressRecord, OrderDraft};
use crate::ids::UserId;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Product and quantity review.
    Items,
    /// Delivery address selection.
    SelectAddress,
    /// Order summary and placement.
    ConfirmOrder,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Items,
        CheckoutStep::SelectAddress,
        CheckoutStep::ConfirmOrder,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckoutStep::Items => "Items",
            CheckoutStep::SelectAddress => "Select Address",
            CheckoutStep::ConfirmOrder => "Confirm Order",
        }
    }

    /// Get the step number (1-indexed), as shown in the stepper.
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Items => 1,
            CheckoutStep::SelectAddress => 2,
            CheckoutStep::ConfirmOrder => 3,
        }
    }
}

/// One entry of the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepState {
    pub step: CheckoutStep,
    pub completed: bool,
}

/// Outcome of a navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange {
    /// Nothing happened.
    Unchanged,
    /// The active step moved.
    Moved { from: CheckoutStep, to: CheckoutStep },
    /// The user backed out of checkout to the product page.
    Exit,
}

/// Checkout wizard state.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutWizard {
    product: Product,
    active_step: usize,
    steps: [StepState; 3],
    draft: OrderDraft,
}

impl CheckoutWizard {
    /// Index of the step checkout opens on.
    pub const ENTRY_STEP: usize = 1;

    /// Enter checkout from the navigation state handed over by the product
    /// page, a JSON document of the form `{"product": {"id": ..}, "quantity": n}`.
    pub fn enter(nav_state: Option<&str>, user: Option<UserId>) -> Result<Self, CommerceError> {
        let (product, quantity) = parse_order_state(nav_state)?;
        Ok(Self::new(product, quantity, user))
    }

    /// Start checkout for a known product and quantity.
    pub fn new(product: Product, quantity: u32, user: Option<UserId>) -> Self {
        let draft = OrderDraft::new(product.id.clone(), quantity, user);
        let steps = CheckoutStep::ALL.map(|step| StepState {
            step,
            completed: step == CheckoutStep::Items,
        });
        Self {
            product,
            active_step: Self::ENTRY_STEP,
            steps,
            draft,
        }
    }

    /// Stepper index of the active step.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// The active step.
    pub fn step(&self) -> CheckoutStep {
        self.steps[self.active_step].step
    }

    pub fn steps(&self) -> &[StepState] {
        &self.steps
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Set or clear the delivery address chosen in the picker.
    pub fn select_address(&mut self, address: Option<AddressRecord>) {
        self.draft.set_address(address);
    }

    /// Handle the "next" button.
    ///
    /// Only the address step has a next button. Without a selected address
    /// the wizard stays where it is and reports nothing.
    pub fn next(&mut self) -> StepChange {
        if self.step() != CheckoutStep::SelectAddress {
            return StepChange::Unchanged;
        }
        if self.draft.address.is_none() {
            tracing::debug!("next ignored: no address selected");
            return StepChange::Unchanged;
        }

        let from = self.step();
        self.steps[self.active_step].completed = true;
        self.active_step += 1;
        StepChange::Moved {
            from,
            to: self.step(),
        }
    }

    /// Handle the "back" button.
    pub fn back(&mut self) -> StepChange {
        if self.active_step <= Self::ENTRY_STEP {
            return StepChange::Exit;
        }

        let from = self.step();
        self.steps[self.active_step - 1].completed = false;
        self.active_step -= 1;
        StepChange::Moved {
            from,
            to: self.step(),
        }
    }

    /// The draft ready for the create-order call.
    pub fn submission(&self) -> Result<&OrderDraft, CommerceError> {
        self.draft.validate()?;
        Ok(&self.draft)
    }

    /// Navigation state for returning to the product page.
    pub fn product_view_state(&self) -> Value {
        serde_json::json!({ "value": self.product })
    }
}

/// Parse checkout navigation state into a product and quantity.
///
/// Missing state, malformed JSON, a missing `product.id` or a missing or
/// non-positive `quantity` are all treated as invalid access.
pub fn parse_order_state(raw: Option<&str>) -> Result<(Product, u32), CommerceError> {
    let raw = raw.ok_or_else(|| CommerceError::InvalidAccess("no order state".to_string()))?;
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| CommerceError::InvalidAccess(format!("malformed order state: {}", e)))?;

    let product = value
        .get("product")
        .filter(|p| p.is_object())
        .ok_or_else(|| CommerceError::InvalidAccess("missing product".to_string()))?;
    let product: Product = serde_json::from_value(product.clone())
        .map_err(|e| CommerceError::InvalidAccess(format!("malformed product: {}", e)))?;
    if product.id.as_str().is_empty() {
        return Err(CommerceError::InvalidAccess("missing product.id".to_string()));
    }

    let quantity = value
        .get("quantity")
        .and_then(Value::as_u64)
        .filter(|q| *q > 0)
        .and_then(|q| u32::try_from(q).ok())
        .ok_or_else(|| CommerceError::InvalidAccess("missing quantity".to_string()))?;

    Ok((product, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::AddressId;

    const STATE: &str = r#"{"product": {"id": "p1"}, "quantity": 2}"#;

    fn address() -> AddressRecord {
        AddressRecord {
            id: AddressId::new("a1"),
            name: "Asha".into(),
            zipcode: "560001".into(),
            ..Default::default()
        }
    }

    fn completed(wizard: &CheckoutWizard) -> Vec<bool> {
        wizard.steps().iter().map(|s| s.completed).collect()
    }

    #[test]
    fn test_enter_opens_on_address_step() {
        let wizard = CheckoutWizard::enter(Some(STATE), Some(UserId::new("u1"))).unwrap();
        assert_eq!(wizard.active_step(), 1);
        assert_eq!(wizard.step(), CheckoutStep::SelectAddress);
        assert_eq!(completed(&wizard), vec![true, false, false]);
        assert_eq!(wizard.draft().quantity, 2);
        assert_eq!(wizard.draft().product.as_str(), "p1");
        assert!(wizard.draft().address.is_none());
    }

    #[test]
    fn test_next_without_address_is_silent_noop() {
        let mut wizard = CheckoutWizard::enter(Some(STATE), None).unwrap();
        assert_eq!(wizard.next(), StepChange::Unchanged);
        assert_eq!(wizard.active_step(), 1);
        assert_eq!(completed(&wizard), vec![true, false, false]);
    }

    #[test]
    fn test_next_with_address_advances() {
        let mut wizard = CheckoutWizard::enter(Some(STATE), None).unwrap();
        wizard.select_address(Some(address()));
        assert_eq!(
            wizard.next(),
            StepChange::Moved {
                from: CheckoutStep::SelectAddress,
                to: CheckoutStep::ConfirmOrder
            }
        );
        assert_eq!(wizard.active_step(), 2);
        assert!(wizard.steps()[1].completed);

        // No next button on the confirm step.
        assert_eq!(wizard.next(), StepChange::Unchanged);
        assert_eq!(wizard.active_step(), 2);
    }

    #[test]
    fn test_back_clears_completion_then_exits() {
        let mut wizard = CheckoutWizard::enter(Some(STATE), None).unwrap();
        wizard.select_address(Some(address()));
        wizard.next();

        assert_eq!(
            wizard.back(),
            StepChange::Moved {
                from: CheckoutStep::ConfirmOrder,
                to: CheckoutStep::SelectAddress
            }
        );
        assert_eq!(wizard.active_step(), 1);
        assert_eq!(completed(&wizard), vec![true, false, false]);

        assert_eq!(wizard.back(), StepChange::Exit);
        assert_eq!(wizard.active_step(), 1);
        assert_eq!(wizard.product_view_state()["value"]["id"], "p1");
    }

    #[test]
    fn test_clearing_address_blocks_next_again() {
        let mut wizard = CheckoutWizard::enter(Some(STATE), None).unwrap();
        wizard.select_address(Some(address()));
        wizard.select_address(None);
        assert_eq!(wizard.next(), StepChange::Unchanged);
        assert!(wizard.submission().is_err());
    }

    #[test]
    fn test_invalid_states_are_rejected() {
        let invalid = [
            None,
            Some("null"),
            Some("not json"),
            Some(r#"{"quantity": 2}"#),
            Some(r#"{"product": {}, "quantity": 2}"#),
            Some(r#"{"product": {"id": null}, "quantity": 2}"#),
            Some(r#"{"product": {"id": "p1"}}"#),
            Some(r#"{"product": {"id": "p1"}, "quantity": null}"#),
            Some(r#"{"product": {"id": "p1"}, "quantity": 0}"#),
        ];
        for state in invalid {
            let result = CheckoutWizard::enter(state, None);
            assert!(
                matches!(result, Err(CommerceError::InvalidAccess(_))),
                "state {:?} should be rejected",
                state
            );
        }
    }

    #[test]
    fn test_full_product_state_is_kept() {
        let state = r#"{"product": {"id": "p1", "name": "Desk Lamp", "price": 10.0}, "quantity": 1}"#;
        let wizard = CheckoutWizard::enter(Some(state), None).unwrap();
        assert_eq!(wizard.product().name, "Desk Lamp");
    }

    #[test]
    fn test_product_with_null_fields_enters() {
        let state = r#"{"product": {"id": "p1", "name": "Lamp", "description": null, "imageUrl": null}, "quantity": 2}"#;
        let wizard = CheckoutWizard::enter(Some(state), None).unwrap();
        assert_eq!(wizard.product().id.as_str(), "p1");
        assert!(wizard.product().description.is_empty());
        assert_eq!(wizard.draft().quantity, 2);
    }
}
