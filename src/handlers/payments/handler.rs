//! Payment handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::PaymentService,
    state::AppState,
};

use super::{
    request::{BankPaymentRequest, BankWebhookRequest, MomoIpnRequest, PaymentRequest},
    response::{BankCreateResponse, MessageResponse, MomoCreateResponse, PaymentStatusResponse},
};

/// Create a MoMo wallet payment
pub async fn create_momo_payment(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Json(payload): Json<PaymentRequest>,
) -> AppResult<Json<MomoCreateResponse>> {
    payload.validate()?;

    let response = PaymentService::create_momo(state.redis(), state.config(), &payload).await?;
    Ok(Json(response))
}

/// Create a bank-transfer payment
pub async fn create_bank_payment(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Json(payload): Json<BankPaymentRequest>,
) -> AppResult<Json<BankCreateResponse>> {
    payload.validate()?;

    let response = PaymentService::create_bank(state.redis(), state.config(), &payload).await?;
    Ok(Json(response))
}

/// Poll a transaction's status
pub async fn check_payment_status(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(transaction_id): Path<String>,
) -> AppResult<Json<PaymentStatusResponse>> {
    let response = PaymentService::check_status(
        state.db(),
        state.redis(),
        state.config(),
        &transaction_id,
        false,
    )
    .await?;

    Ok(Json(response))
}

/// Poll a MoMo transaction's status
pub async fn check_momo_payment_status(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(transaction_id): Path<String>,
) -> AppResult<Json<PaymentStatusResponse>> {
    let response = PaymentService::check_status(
        state.db(),
        state.redis(),
        state.config(),
        &transaction_id,
        true,
    )
    .await?;

    Ok(Json(response))
}

/// MoMo IPN callback (no bearer token: called by the provider)
pub async fn momo_ipn(
    State(state): State<AppState>,
    Json(payload): Json<MomoIpnRequest>,
) -> AppResult<Json<MessageResponse>> {
    PaymentService::handle_momo_ipn(state.db(), state.redis(), state.config(), &payload).await?;

    Ok(Json(MessageResponse {
        message: "IPN processed successfully".to_string(),
    }))
}

/// Bank transfer webhook (no bearer token: called by the provider)
pub async fn bank_webhook(
    State(state): State<AppState>,
    Json(payload): Json<BankWebhookRequest>,
) -> AppResult<Json<MessageResponse>> {
    PaymentService::handle_bank_webhook(state.db(), state.redis(), state.config(), &payload)
        .await?;

    Ok(Json(MessageResponse {
        message: "Webhook processed successfully".to_string(),
    }))
}

/// Force a transaction to success (test helper)
pub async fn simulate_payment(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(transaction_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    PaymentService::simulate_success(state.db(), state.redis(), state.config(), &transaction_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Thanh toán được giả lập thành công".to_string(),
    }))
}
