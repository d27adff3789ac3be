//! Address picker and new-address form of the checkout address step.

use eshop_commerce::checkout::AddressRecord;
use eshop_commerce::ids::AddressId;
use eshop_forms::{AddressSchema, FormState};

use crate::api::{create_address, fetch_all_addresses};
use crate::scope::{ScopeTicket, ViewScope};
use crate::{AppContext, ClientError};

pub const ADDRESS_SAVED_MESSAGE: &str = "Address saved successfully.";

#[derive(Debug)]
pub struct AddressBook {
    ctx: AppContext,
    form: FormState<AddressSchema>,
    addresses: Vec<AddressRecord>,
    selected: Option<AddressId>,
    scope: ViewScope,
}

impl AddressBook {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            ctx: ctx.clone(),
            form: FormState::new(),
            addresses: Vec::new(),
            selected: None,
            scope: ViewScope::new(),
        }
    }

    pub fn form(&self) -> &FormState<AddressSchema> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState<AddressSchema> {
        &mut self.form
    }

    pub fn addresses(&self) -> &[AddressRecord] {
        &self.addresses
    }

    pub fn selected(&self) -> Option<&AddressRecord> {
        let id = self.selected.as_ref()?;
        self.addresses.iter().find(|a| &a.id == id)
    }

    /// Pick an address by id. Unknown ids clear the selection.
    ///
    /// Returns the record to hand to checkout.
    pub fn select(&mut self, id: Option<&AddressId>) -> Option<AddressRecord> {
        let found = id.and_then(|id| self.addresses.iter().find(|a| &a.id == id).cloned());
        self.selected = found.as_ref().map(|a| a.id.clone());
        found
    }

    /// Start a list refresh. Apply the result with [`finish_reload`](Self::finish_reload).
    pub fn begin_reload(&self) -> (ScopeTicket, impl std::future::Future<Output = Vec<AddressRecord>>) {
        let ctx = self.ctx.clone();
        let fetch = async move {
            let token = match ctx.token() {
                Ok(token) => token,
                Err(_) => return Vec::new(),
            };
            match fetch_all_addresses(ctx.client(), &token).await {
                Ok(list) => list.payload,
                Err(failure) => {
                    tracing::warn!(reason = %failure.reason, "address list unavailable");
                    Vec::new()
                }
            }
        };
        (self.scope.ticket(), fetch)
    }

    /// Apply a fetched list unless the view was reset meanwhile.
    pub fn finish_reload(&mut self, ticket: &ScopeTicket, list: Vec<AddressRecord>) -> bool {
        match ticket.admit(list) {
            Ok(list) => {
                self.addresses = list;
                if self.selected().is_none() {
                    self.selected = None;
                }
                true
            }
            Err(_) => false,
        }
    }

    /// Refresh the address list. Failures leave it empty.
    pub async fn reload(&mut self) -> &[AddressRecord] {
        let (ticket, fetch) = self.begin_reload();
        let list = fetch.await;
        self.finish_reload(&ticket, list);
        &self.addresses
    }

    /// Validate and save the form, then refresh the list.
    pub async fn save(&mut self) -> Result<String, ClientError> {
        let mut address = self.form.submit()?;
        address.user = self.ctx.session().user_id();
        let token = self.ctx.token()?;

        match create_address(self.ctx.client(), &address, &token).await {
            Ok(created) => {
                tracing::info!(name = %address.name, "address saved");
                self.ctx.notifier().success(ADDRESS_SAVED_MESSAGE);
                self.form.reset();
                self.reload().await;
                Ok(created.payload)
            }
            Err(failure) => {
                self.ctx.notifier().error(failure.reason.as_str());
                Err(failure.into())
            }
        }
    }

    /// Drop the list and form, discarding any refresh in flight.
    pub fn reset(&mut self) {
        self.scope.invalidate();
        self.form.reset();
        self.addresses.clear();
        self.selected = None;
    }
}
