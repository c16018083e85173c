use wallet_client_api::{
    AddBankAccountRequest, BankAccountRef, Envelope, VerifyBankAccountRequest,
};

use crate::client::{ApiClient, RequestDescriptor};
use crate::error::ClientError;

pub const LIST: &str = "/accounts";
pub const ADD: &str = "/accounts/add";
pub const VERIFY: &str = "/accounts/verify";
pub const SET_PRIMARY: &str = "/accounts/set-primary";
pub const REMOVE: &str = "/accounts/remove";

/// GET /accounts
pub async fn list(client: &ApiClient) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::get(LIST)).await
}

/// POST /accounts/add
///
/// The envelope carries `verification_amount`, the micro-deposit to confirm
/// through [`verify`].
pub async fn add(
    client: &ApiClient,
    request: &AddBankAccountRequest,
) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::post(ADD).json(request)).await
}

/// POST /accounts/verify
pub async fn verify(
    client: &ApiClient,
    request: &VerifyBankAccountRequest,
) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::post(VERIFY).json(request)).await
}

/// POST /accounts/set-primary
pub async fn set_primary(client: &ApiClient, account_id: &str) -> Result<Envelope, ClientError> {
    let body = BankAccountRef {
        account_id: account_id.to_string(),
    };
    client
        .send(RequestDescriptor::post(SET_PRIMARY).json(&body))
        .await
}

/// POST /accounts/remove
pub async fn remove(client: &ApiClient, account_id: &str) -> Result<Envelope, ClientError> {
    let body = BankAccountRef {
        account_id: account_id.to_string(),
    };
    client.send(RequestDescriptor::post(REMOVE).json(&body)).await
}
