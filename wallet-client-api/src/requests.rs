use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// -------- AUTH --------
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    /// Email address or phone number
    pub identifier: String,
    pub password: String, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    /// Social security number, without dashes
    pub ssn: String,
    pub email: String,
    pub phone: String,
    pub password: String, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifyEmailRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifyPhoneRequest {
    pub phone: String,
}

// -------- BANK ACCOUNTS --------
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddBankAccountRequest {
    pub bank_id: String,
    pub account_number: String,
}

/// Confirms ownership with the micro-deposit amount sent by the service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifyBankAccountRequest {
    pub account_id: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BankAccountRef {
    pub account_id: String,
}

// -------- TRANSACTIONS --------
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransferRequest {
    /// Email address or phone number of the recipient
    pub recipient_identifier: String,
    pub amount: f64,
    pub source_account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PayerShare {
    pub identifier: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentRequest {
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub payers: Vec<PayerShare>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CancelTransactionRequest {
    pub transaction_id: String,
}

/// Query parameters of the transaction listing. Absent fields are not sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct RecentTransactionsQuery {
    pub limit: u32,
}

// -------- USER --------
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddEmailRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddPhoneRequest {
    pub phone: String,
}

// -------- ADMIN --------
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdminTransferRequest {
    /// Source account; the system account is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_account: Option<String>,
    pub to_account: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transaction_filter_uses_query_names() {
        let filter = TransactionFilter {
            kind: Some("transfer".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..TransactionFilter::default()
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, json!({ "type": "transfer", "startDate": "2024-01-31" }));
    }

    #[test]
    fn change_password_is_camel_case() {
        let request = ChangePasswordRequest {
            old_password: "old".to_string(),
            new_password: "new".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "oldPassword": "old", "newPassword": "new" }));
    }

    #[test]
    fn admin_transfer_omits_system_source() {
        let request = AdminTransferRequest {
            from_account: None,
            to_account: "ACC2".to_string(),
            amount: 10.0,
            note: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "to_account": "ACC2", "amount": 10.0 }));
    }
}
