use wallet_client_api::{
    Envelope, LoginData, LoginRequest, RegisterRequest, VerifyEmailRequest, VerifyPhoneRequest,
};

use crate::client::{ApiClient, LOGIN_ENDPOINT, REGISTER_ENDPOINT, RequestDescriptor};
use crate::error::ClientError;

pub const VERIFY_EMAIL: &str = "/auth/verify-email";
pub const VERIFY_PHONE: &str = "/auth/verify-phone";
pub const LOGOUT: &str = "/auth/logout";

/// POST /auth/login
///
/// On success the token (already stored by the client pipeline), the user
/// profile and the admin flag are all persisted in the session. A response
/// without a user record carrying `is_admin` is reported as malformed.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginData, ClientError> {
    let envelope = client
        .send(RequestDescriptor::post(LOGIN_ENDPOINT).json(request))
        .await?;

    let login: LoginData = envelope.decode_data().map_err(|err| {
        tracing::warn!(error = %err, "Login response without usable user data");
        client.report(
            LOGIN_ENDPOINT,
            ClientError::malformed("Invalid user data received"),
        )
    })?;

    client
        .session()
        .store_login(&login)
        .map_err(|err| client.report(LOGIN_ENDPOINT, err.into()))?;
    tracing::info!(
        user_id = ?login.user.id(),
        is_admin = login.user.is_admin(),
        "Logged in"
    );
    Ok(login)
}

/// POST /auth/register
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::post(REGISTER_ENDPOINT).json(request))
        .await
}

/// POST /auth/verify-email
pub async fn verify_email(
    client: &ApiClient,
    request: &VerifyEmailRequest,
) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::post(VERIFY_EMAIL).json(request))
        .await
}

/// POST /auth/verify-phone
pub async fn verify_phone(
    client: &ApiClient,
    request: &VerifyPhoneRequest,
) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::post(VERIFY_PHONE).json(request))
        .await
}

/// POST /auth/logout
///
/// The local session is cleared whatever the server answers; the server
/// outcome is returned afterwards.
pub async fn logout(client: &ApiClient) -> Result<Envelope, ClientError> {
    let outcome = client.send(RequestDescriptor::post(LOGOUT)).await;
    client
        .session()
        .clear_all()
        .map_err(|err| client.report(LOGOUT, err.into()))?;
    tracing::info!("Logged out");
    outcome
}
