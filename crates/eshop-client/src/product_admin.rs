//! Product add, modify and delete for administrators.

use eshop_auth::Role;
use eshop_commerce::catalog::Product;
use eshop_commerce::ids::ProductId;
use eshop_forms::{FormState, ProductSchema};

use crate::api::{create_product, delete_product, modify_product};
use crate::{AppContext, ClientError};

/// Save the product form: create when `existing` is `None`, else modify.
pub async fn save_product(
    ctx: &AppContext,
    form: &mut FormState<ProductSchema>,
    existing: Option<&ProductId>,
) -> Result<String, ClientError> {
    ctx.session().require_role(&[Role::Admin.as_str()])?;
    let mut input = form.submit()?;
    let token = ctx.token()?;

    let saved = match existing {
        Some(id) => {
            input.id = Some(id.clone());
            modify_product(ctx.client(), id, &input, &token).await
        }
        None => create_product(ctx.client(), &input, &token).await,
    };

    match saved {
        Ok(saved) => {
            ctx.notifier().success(saved.payload.as_str());
            form.reset();
            Ok(saved.payload)
        }
        Err(failure) => {
            ctx.notifier().error(failure.reason.as_str());
            Err(failure.into())
        }
    }
}

/// Delete a product after the user confirmed.
pub async fn remove_product(ctx: &AppContext, product: &Product) -> Result<String, ClientError> {
    ctx.session().require_role(&[Role::Admin.as_str()])?;
    let token = ctx.token()?;

    match delete_product(ctx.client(), &product.id, &token).await {
        Ok(_) => {
            let message = format!("Product {} deleted successfully.", product.name);
            ctx.notifier().success(message.as_str());
            Ok(message)
        }
        Err(failure) => {
            ctx.notifier().error(failure.reason.as_str());
            Err(failure.into())
        }
    }
}
