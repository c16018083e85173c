use wallet_client_api::{
    CancelTransactionRequest, Envelope, PaymentRequest, TransactionFilter, TransferRequest,
};

use crate::client::{ApiClient, RequestDescriptor};
use crate::error::ClientError;

pub const TRANSFER: &str = "/transactions/transfer";
pub const REQUEST: &str = "/transactions/request";
pub const LIST: &str = "/transactions";
pub const CANCEL: &str = "/transactions/cancel";

/// POST /transactions/transfer
pub async fn transfer(
    client: &ApiClient,
    request: &TransferRequest,
) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::post(TRANSFER).json(request))
        .await
}

/// POST /transactions/request
pub async fn request_payment(
    client: &ApiClient,
    request: &PaymentRequest,
) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::post(REQUEST).json(request))
        .await
}

/// GET /transactions, filter fields sent as query parameters
pub async fn list(client: &ApiClient, filter: &TransactionFilter) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::get(LIST).query(filter))
        .await
}

/// POST /transactions/cancel
pub async fn cancel(client: &ApiClient, transaction_id: &str) -> Result<Envelope, ClientError> {
    let body = CancelTransactionRequest {
        transaction_id: transaction_id.to_string(),
    };
    client.send(RequestDescriptor::post(CANCEL).json(&body)).await
}
