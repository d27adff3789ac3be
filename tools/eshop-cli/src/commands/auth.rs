//! Login, logout and sign-up.

use anyhow::Result;
use chrono::{DateTime, Local};
use eshop_client::account;
use eshop_forms::{FormState, LoginField, LoginSchema, SignUpField, SignUpSchema};

use super::{fill_form, report_form, settle, LoginArgs, SignUpArgs};
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Sign in");

    let mut form = FormState::<LoginSchema>::new();
    fill_form(
        ctx,
        &mut form,
        |field| match field {
            LoginField::Email => args.email.clone(),
            LoginField::Password => None,
        },
        |field| field == LoginField::Password,
    )?;

    let spinner = ctx.output.spinner("Signing in...");
    let result = account::sign_in(&ctx.app, &mut form).await;
    spinner.finish_and_clear();
    report_form(ctx, &form);
    settle(ctx, result)?;
    ctx.save_session()?;

    let Some(session) = ctx.app.current_session() else {
        return Ok(());
    };
    let expires = DateTime::from_timestamp_millis(session.access_token_expiry_ms)
        .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "username": session.username,
            "roles": session.roles,
            "expires": expires,
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Logged in as {}", session.username));
    let roles: Vec<&str> = session.roles.iter().map(String::as_str).collect();
    ctx.output.kv("roles", &roles.join(", "));
    ctx.output.kv("expires", &expires);
    Ok(())
}

/// Run the logout command.
pub async fn logout(ctx: &Context) -> Result<()> {
    let username = ctx.app.current_session().map(|s| s.username);
    let next = account::sign_out(&ctx.app);
    ctx.forget_session()?;

    match username {
        Some(username) => ctx.output.success(&format!("Logged out {}", username)),
        None => ctx.output.info("No active session"),
    }
    ctx.output.debug(&format!("Next: {}", next.route));
    Ok(())
}

/// Run the signup command.
pub async fn signup(args: SignUpArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Sign up");

    let mut form = FormState::<SignUpSchema>::new();
    fill_form(
        ctx,
        &mut form,
        |field| match field {
            SignUpField::FirstName => args.first_name.clone(),
            SignUpField::LastName => args.last_name.clone(),
            SignUpField::Email => args.email.clone(),
            SignUpField::ContactNumber => args.contact_number.clone(),
            SignUpField::Password | SignUpField::ConfirmPassword => None,
        },
        |field| matches!(field, SignUpField::Password | SignUpField::ConfirmPassword),
    )?;

    let spinner = ctx.output.spinner("Creating account...");
    let result = account::sign_up(&ctx.app, &mut form).await;
    spinner.finish_and_clear();
    report_form(ctx, &form);
    let message = settle(ctx, result)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "message": message }));
    }
    Ok(())
}
