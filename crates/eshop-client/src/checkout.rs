//! Checkout view controller.

use eshop_commerce::checkout::{AddressRecord, CheckoutWizard, StepChange};

use crate::api::create_order;
use crate::routes::{Navigation, Route};
use crate::{AppContext, ClientError};

pub const INVALID_ACCESS_MESSAGE: &str = "Invalid access. Redirecting to home...";
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";
pub const SELECT_ADDRESS_MESSAGE: &str = "Please select address!";

/// Drives a [`CheckoutWizard`] and reports outcomes through the notifier.
#[derive(Debug)]
pub struct CheckoutController {
    ctx: AppContext,
    wizard: CheckoutWizard,
}

impl CheckoutController {
    /// Open checkout with the state handed over by the product page.
    ///
    /// Invalid state posts a warning and sends the user home.
    pub fn enter(ctx: &AppContext, nav_state: Option<&str>) -> Result<Self, Navigation> {
        match CheckoutWizard::enter(nav_state, ctx.session().user_id()) {
            Ok(wizard) => Ok(Self {
                ctx: ctx.clone(),
                wizard,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "rejected checkout entry");
                ctx.notifier().warning(INVALID_ACCESS_MESSAGE);
                Err(Navigation::to(Route::Home))
            }
        }
    }

    pub fn wizard(&self) -> &CheckoutWizard {
        &self.wizard
    }

    pub fn select_address(&mut self, address: Option<AddressRecord>) {
        self.wizard.select_address(address);
    }

    pub fn next(&mut self) -> StepChange {
        self.wizard.next()
    }

    /// Step back. Leaving the first step returns to the product page.
    pub fn back(&mut self) -> Option<Navigation> {
        match self.wizard.back() {
            StepChange::Exit => Some(Navigation::with_state(
                Route::ProductView,
                self.wizard.product_view_state().to_string(),
            )),
            StepChange::Moved { .. } | StepChange::Unchanged => None,
        }
    }

    /// Submit the order.
    ///
    /// Without an address nothing is sent. Auth failures are returned for
    /// the caller to redirect on, without a message.
    pub async fn place_order(&self) -> Result<Navigation, ClientError> {
        let order = match self.wizard.submission() {
            Ok(order) => order,
            Err(e) => {
                self.ctx.notifier().error(SELECT_ADDRESS_MESSAGE);
                return Err(e.into());
            }
        };
        let token = self.ctx.token()?;

        match create_order(self.ctx.client(), order, &token).await {
            Ok(_) => {
                tracing::info!(product = %order.product, quantity = order.quantity, "order placed");
                self.ctx.notifier().success(ORDER_PLACED_MESSAGE);
                Ok(Navigation::to(Route::Home))
            }
            Err(failure) => {
                self.ctx.notifier().error(failure.reason.as_str());
                Err(failure.into())
            }
        }
    }
}
