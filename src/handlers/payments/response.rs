//! Payment response DTOs

use serde::Serialize;

/// MoMo payment intent
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomoCreateResponse {
    pub success: bool,
    pub pay_url: String,
    pub qr_code_url: String,
    pub order_id: String,
    pub message: String,
}

/// QR payload for a bank transfer
#[derive(Debug, Serialize)]
pub struct QrData {
    pub bank: String,
    pub account: String,
    pub amount: i64,
    pub description: String,
    pub template: String,
}

/// Receiving-account details for a bank transfer
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankInfo {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub amount: i64,
    pub description: String,
}

/// Bank-transfer payment intent
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankCreateResponse {
    pub success: bool,
    pub qr_data: QrData,
    pub bank_info: BankInfo,
    pub message: String,
}

/// Transaction status as seen by the polling frontend
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    pub status: String,
    pub message: String,
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
