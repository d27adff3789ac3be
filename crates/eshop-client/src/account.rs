//! Sign-in, sign-up and sign-out.

use eshop_forms::{FormState, LoginSchema, SignUpSchema};

use crate::api::{login, signup};
use crate::routes::{Navigation, Route};
use crate::{AppContext, ClientError};

/// Submit the login form and start a session.
pub async fn sign_in(
    ctx: &AppContext,
    form: &mut FormState<LoginSchema>,
) -> Result<Navigation, ClientError> {
    let credentials = form.submit()?;

    match login(ctx.client(), &credentials, ctx.session().clock()).await {
        Ok(signed_in) => {
            ctx.session().begin(signed_in.payload);
            form.reset();
            Ok(Navigation::to(Route::Home))
        }
        Err(failure) => {
            ctx.notifier().error(failure.reason.as_str());
            Err(failure.into())
        }
    }
}

/// Submit the sign-up form. Settles with the server's message.
pub async fn sign_up(
    ctx: &AppContext,
    form: &mut FormState<SignUpSchema>,
) -> Result<String, ClientError> {
    let request = form.submit()?;

    match signup(ctx.client(), &request).await {
        Ok(registered) => {
            ctx.notifier().success(registered.payload.as_str());
            form.reset();
            Ok(registered.payload)
        }
        Err(failure) => {
            ctx.notifier().error(failure.reason.as_str());
            Err(failure.into())
        }
    }
}

/// End the session immediately.
pub fn sign_out(ctx: &AppContext) -> Navigation {
    ctx.session().end();
    Navigation::to(Route::Login)
}
