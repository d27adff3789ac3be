use eshop_auth::{Clock, Credentials, MessageResponse, Session, SignInResponse, SignUpRequest};
use eshop_data::{settle_json, ApiResult, Failure, FetchClient};

use super::paths;

/// Reason given when sign-in is refused without an explanation.
pub const BAD_CREDENTIALS_REASON: &str = "Bad Credentials. Please try again.";

/// Sign in and build a session from the returned token.
///
/// The session's expiry is measured from when the response arrives.
pub async fn login(
    client: &FetchClient,
    credentials: &Credentials,
    clock: &dyn Clock,
) -> ApiResult<Session> {
    let result = client.post(paths::SIGN_IN).json(credentials).send().await;

    if let Ok(response) = &result {
        if response.status == 401 && response.server_message().is_none() {
            tracing::warn!(username = %credentials.username, "sign-in refused");
            return Err(Failure {
                reason: BAD_CREDENTIALS_REASON.to_string(),
                response: Some(response.meta()),
            });
        }
    }

    let signed_in = settle_json::<SignInResponse>(result)?;
    let issued_at = clock.now_ms();
    Ok(signed_in.map(|body| body.into_session(credentials.username.as_str(), issued_at)))
}

/// Register a new account. Settles with the server's message.
pub async fn signup(client: &FetchClient, request: &SignUpRequest) -> ApiResult<String> {
    let registered = client
        .post(paths::SIGN_UP)
        .json(request)
        .fetch_json::<MessageResponse>()
        .await?;
    Ok(registered.map(|body| body.message.unwrap_or_default()))
}
