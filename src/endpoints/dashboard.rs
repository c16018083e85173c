use wallet_client_api::{Envelope, RecentTransactionsQuery};

use crate::client::{ApiClient, RequestDescriptor};
use crate::error::ClientError;

pub const OVERVIEW: &str = "/dashboard/overview";
pub const RECENT_TRANSACTIONS: &str = "/dashboard/recent-transactions";

/// GET /dashboard/overview
pub async fn overview(client: &ApiClient) -> Result<Envelope, ClientError> {
    client.send(RequestDescriptor::get(OVERVIEW)).await
}

/// GET /dashboard/recent-transactions?limit=
pub async fn recent_transactions(client: &ApiClient, limit: u32) -> Result<Envelope, ClientError> {
    client
        .send(RequestDescriptor::get(RECENT_TRANSACTIONS).query(&RecentTransactionsQuery { limit }))
        .await
}
