use wallet_client_api::{AdminTransferRequest, Envelope};

use crate::client::{ApiClient, RequestDescriptor};
use crate::error::ClientError;

pub const ACCOUNTS: &str = "/admin/accounts";
pub const TRANSFER: &str = "/admin/transfer";

/// GET /admin/accounts
pub async fn accounts(client: &ApiClient) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::get(ACCOUNTS)).await
}

/// POST /admin/transfer
pub async fn transfer(
    client: &ApiClient,
    request: &AdminTransferRequest,
) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::post(TRANSFER).json(request))
        .await
}
