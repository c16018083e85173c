use wallet_client_api::{
    AddEmailRequest, AddPhoneRequest, ChangePasswordRequest, Envelope, UpdateProfileRequest,
};

use crate::client::{ApiClient, RequestDescriptor};
use crate::error::ClientError;

pub const PROFILE: &str = "/user/profile";
pub const PASSWORD: &str = "/user/password";
pub const EMAILS: &str = "/user/emails";
pub const PHONES: &str = "/user/phones";

/// GET /user/profile
pub async fn profile(client: &ApiClient) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::get(PROFILE)).await
}

/// PUT /user/profile
pub async fn update_profile(
    client: &ApiClient,
    request: &UpdateProfileRequest,
) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::put(PROFILE).json(request)).await
}

/// PUT /user/password
pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::put(PASSWORD).json(request)).await
}

/// POST /user/emails
pub async fn add_email(client: &ApiClient, request: &AddEmailRequest) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::post(EMAILS).json(request)).await
}

/// POST /user/phones
pub async fn add_phone(client: &ApiClient, request: &AddPhoneRequest) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::post(PHONES).json(request)).await
}
