//! Payment request DTOs
//!
//! Payment endpoints speak the frontend's camelCase wire format; webhook
//! payloads keep the provider's own field casing.

use serde::Deserialize;
use validator::Validate;

fn default_bank_account() -> String {
    "0389876420".to_string()
}

/// Wallet (MoMo) payment creation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(range(min = 1))]
    pub amount: i64,

    pub order_info: String,

    #[validate(length(min = 1))]
    pub transaction_id: String,

    pub booking_id: i64,

    pub facility_id: i64,

    pub sport_type: String,

    pub court_id: Option<i32>,

    pub start_time: String,

    pub end_time: String,
}

/// Bank-transfer payment creation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BankPaymentRequest {
    #[validate(range(min = 1))]
    pub amount: i64,

    pub order_info: String,

    #[validate(length(min = 1))]
    pub transaction_id: String,

    pub booking_id: i64,

    pub facility_id: i64,

    pub sport_type: String,

    pub court_id: Option<i32>,

    pub start_time: String,

    pub end_time: String,

    #[serde(default = "default_bank_account")]
    pub bank_account: String,
}

/// MoMo IPN callback payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomoIpnRequest {
    pub order_id: String,
    pub result_code: i64,
    pub trans_id: Option<String>,
}

/// Bank transfer webhook payload
#[derive(Debug, Deserialize)]
pub struct BankWebhookRequest {
    pub account_number: String,
    pub amount: i64,
    pub description: String,
    pub transaction_time: Option<String>,
}
