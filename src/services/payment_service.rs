//! Payment service
//!
//! Payments are mocked: creating one records a pending transaction in the
//! status store and hands back a provider-shaped payment intent; a pending
//! transaction "confirms" after a configured delay, or immediately through
//! the provider callback endpoints. The status store lives in Redis keyed by
//! transaction id with a TTL, so in-flight state survives a process restart
//! and expired records need no sweeper.

use base64::Engine;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::Config,
    constants::{notification_types, payment_methods, priorities, transaction_status},
    db::repositories::BookingRepository,
    error::{AppError, AppResult},
    handlers::payments::{
        request::{BankPaymentRequest, BankWebhookRequest, MomoIpnRequest, PaymentRequest},
        response::{
            BankCreateResponse, BankInfo, MomoCreateResponse, PaymentStatusResponse, QrData,
        },
    },
    services::NotificationService,
    utils::crypto,
};

/// A payment attempt tracked in the status store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub status: String,
    pub amount: i64,
    pub order_id: Option<String>,
    pub booking_id: i64,
    pub method: String,
    pub bank_account: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Whether a pending transaction created at `created_at` has reached its
/// mocked confirmation time
pub fn confirmation_due(created_at: DateTime<Utc>, delay_secs: i64, now: DateTime<Utc>) -> bool {
    (now - created_at).num_seconds() > delay_secs
}

/// Payment service
pub struct PaymentService;

impl PaymentService {
    fn record_key(transaction_id: &str) -> String {
        format!("payment:{}", transaction_id)
    }

    fn order_key(order_id: &str) -> String {
        format!("payment_order:{}", order_id)
    }

    async fn put_record(
        mut redis: ConnectionManager,
        config: &Config,
        transaction_id: &str,
        record: &PaymentRecord,
    ) -> AppResult<()> {
        let value = serde_json::to_string(record)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Record encoding failed: {}", e)))?;

        redis
            .set_ex::<_, _, ()>(
                Self::record_key(transaction_id),
                value,
                config.payment.status_ttl_secs,
            )
            .await?;

        Ok(())
    }

    async fn get_record(
        mut redis: ConnectionManager,
        transaction_id: &str,
    ) -> AppResult<Option<PaymentRecord>> {
        let value: Option<String> = redis.get(Self::record_key(transaction_id)).await?;

        match value {
            Some(raw) => {
                let record = serde_json::from_str(&raw).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("Record decoding failed: {}", e))
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Create a mocked MoMo wallet payment
    pub async fn create_momo(
        redis: ConnectionManager,
        config: &Config,
        payload: &PaymentRequest,
    ) -> AppResult<MomoCreateResponse> {
        let order_id = format!("MOMO_{}", payload.transaction_id);
        let pay_url = format!(
            "{}?t={}&sig={}&redirect={}",
            config.payment.momo_pay_url_base,
            order_id,
            crypto::hash_string(&order_id),
            config.payment.momo_redirect_url
        );
        let qr_code_url = format!(
            "data:text/plain;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&pay_url)
        );

        let record = PaymentRecord {
            status: transaction_status::PENDING.to_string(),
            amount: payload.amount,
            order_id: Some(order_id.clone()),
            booking_id: payload.booking_id,
            method: payment_methods::MOMO.to_string(),
            bank_account: None,
            created_at: Utc::now(),
        };
        Self::put_record(redis.clone(), config, &payload.transaction_id, &record).await?;

        // Order-id index for the IPN callback
        let mut conn = redis;
        conn.set_ex::<_, _, ()>(
            Self::order_key(&order_id),
            payload.transaction_id.clone(),
            config.payment.status_ttl_secs,
        )
        .await?;

        Ok(MomoCreateResponse {
            success: true,
            pay_url,
            qr_code_url,
            order_id,
            message: "Tạo thanh toán MoMo thành công".to_string(),
        })
    }

    /// Create a mocked bank-transfer payment
    pub async fn create_bank(
        redis: ConnectionManager,
        config: &Config,
        payload: &BankPaymentRequest,
    ) -> AppResult<BankCreateResponse> {
        let description = format!("{} {}", payload.transaction_id, payload.order_info);

        let record = PaymentRecord {
            status: transaction_status::PENDING.to_string(),
            amount: payload.amount,
            order_id: None,
            booking_id: payload.booking_id,
            method: payment_methods::BANK.to_string(),
            bank_account: Some(payload.bank_account.clone()),
            created_at: Utc::now(),
        };
        Self::put_record(redis, config, &payload.transaction_id, &record).await?;

        Ok(BankCreateResponse {
            success: true,
            qr_data: QrData {
                bank: config.payment.bank_code.clone(),
                account: config.payment.bank_account_number.clone(),
                amount: payload.amount,
                description: description.clone(),
                template: "compact".to_string(),
            },
            bank_info: BankInfo {
                bank_name: "MB Bank".to_string(),
                account_number: config.payment.bank_account_number.clone(),
                account_name: config.payment.bank_account_name.clone(),
                amount: payload.amount,
                description,
            },
            message: "Tạo thanh toán ngân hàng thành công".to_string(),
        })
    }

    /// Poll a transaction's status, applying the mocked time-based
    /// confirmation for pending entries
    pub async fn check_status(
        pool: &PgPool,
        redis: ConnectionManager,
        config: &Config,
        transaction_id: &str,
        momo_flavor: bool,
    ) -> AppResult<PaymentStatusResponse> {
        let Some(mut record) = Self::get_record(redis.clone(), transaction_id).await? else {
            return Ok(PaymentStatusResponse {
                status: transaction_status::FAILED.to_string(),
                message: if momo_flavor {
                    "Không tìm thấy giao dịch MoMo".to_string()
                } else {
                    "Không tìm thấy giao dịch".to_string()
                },
                transaction_id: transaction_id.to_string(),
                amount: None,
            });
        };

        let delay = if record.method == payment_methods::MOMO {
            config.payment.momo_confirm_delay_secs
        } else {
            config.payment.bank_confirm_delay_secs
        };

        if record.status == transaction_status::PENDING
            && confirmation_due(record.created_at, delay, Utc::now())
        {
            record.status = transaction_status::SUCCESS.to_string();
            Self::confirm_booking(pool, &record, Some(transaction_id)).await?;
            Self::put_record(redis, config, transaction_id, &record).await?;
        }

        let succeeded = record.status == transaction_status::SUCCESS;
        let message = match (momo_flavor, succeeded) {
            (true, true) => "Thanh toán MoMo thành công",
            (true, false) => "Đang xử lý thanh toán MoMo",
            (false, true) => "Thành công",
            (false, false) => "Đang xử lý",
        };

        Ok(PaymentStatusResponse {
            status: record.status,
            message: message.to_string(),
            transaction_id: transaction_id.to_string(),
            amount: Some(record.amount),
        })
    }

    /// Handle the MoMo IPN callback
    pub async fn handle_momo_ipn(
        pool: &PgPool,
        redis: ConnectionManager,
        config: &Config,
        payload: &MomoIpnRequest,
    ) -> AppResult<()> {
        let mut conn = redis.clone();
        let transaction_id: Option<String> = conn.get(Self::order_key(&payload.order_id)).await?;

        let Some(transaction_id) = transaction_id else {
            return Ok(());
        };
        let Some(mut record) = Self::get_record(redis.clone(), &transaction_id).await? else {
            return Ok(());
        };

        if payload.result_code == 0 {
            record.status = transaction_status::SUCCESS.to_string();
            Self::confirm_booking(pool, &record, payload.trans_id.as_deref()).await?;
        } else {
            record.status = transaction_status::FAILED.to_string();
        }

        Self::put_record(redis, config, &transaction_id, &record).await?;

        Ok(())
    }

    /// Handle the bank transfer webhook.
    ///
    /// The transfer description starts with the transaction id; the receiving
    /// account and the transferred amount must both match the record.
    pub async fn handle_bank_webhook(
        pool: &PgPool,
        redis: ConnectionManager,
        config: &Config,
        payload: &BankWebhookRequest,
    ) -> AppResult<()> {
        if payload.account_number != config.payment.bank_account_number {
            return Ok(());
        }

        let Some(transaction_id) = payload.description.split_whitespace().next() else {
            return Ok(());
        };

        let Some(mut record) = Self::get_record(redis.clone(), transaction_id).await? else {
            return Ok(());
        };

        if record.amount != payload.amount {
            return Ok(());
        }

        record.status = transaction_status::SUCCESS.to_string();
        Self::confirm_booking(pool, &record, Some(transaction_id)).await?;
        Self::put_record(redis, config, transaction_id, &record).await?;

        Ok(())
    }

    /// Force a transaction to success (test helper)
    pub async fn simulate_success(
        pool: &PgPool,
        redis: ConnectionManager,
        config: &Config,
        transaction_id: &str,
    ) -> AppResult<()> {
        let Some(mut record) = Self::get_record(redis.clone(), transaction_id).await? else {
            return Err(AppError::NotFound("Không tìm thấy giao dịch".to_string()));
        };

        record.status = transaction_status::SUCCESS.to_string();
        Self::confirm_booking(pool, &record, Some(transaction_id)).await?;
        Self::put_record(redis, config, transaction_id, &record).await?;

        Ok(())
    }

    /// Confirm the booking behind a successful payment and notify the payer.
    ///
    /// A missing booking is logged, not an error: the provider already
    /// considers the payment settled.
    async fn confirm_booking(
        pool: &PgPool,
        record: &PaymentRecord,
        transaction_ref: Option<&str>,
    ) -> AppResult<()> {
        let booking =
            BookingRepository::confirm_paid(pool, record.booking_id, &record.method, transaction_ref)
                .await?;

        match booking {
            Some(booking) => {
                NotificationService::notify(
                    pool,
                    booking.user_id,
                    notification_types::PAYMENT_SUCCESS,
                    "Thanh toán thành công",
                    &format!(
                        "Thanh toán {} VNĐ cho đặt sân #{} đã được xử lý thành công.",
                        record.amount, booking.id
                    ),
                    priorities::MEDIUM,
                    serde_json::json!({ "amount": record.amount, "bookingId": booking.id }),
                )
                .await?;
            }
            None => {
                tracing::warn!(
                    booking_id = record.booking_id,
                    "Payment confirmed for a booking that no longer exists"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_confirmation_due() {
        let now = Utc::now();

        assert!(confirmation_due(now - Duration::seconds(11), 10, now));
        assert!(!confirmation_due(now - Duration::seconds(5), 10, now));
        // Exactly at the threshold is still pending
        assert!(!confirmation_due(now - Duration::seconds(10), 10, now));
    }

    #[test]
    fn test_record_round_trip() {
        let record = PaymentRecord {
            status: "pending".to_string(),
            amount: 160_000,
            order_id: Some("MOMO_TXN1".to_string()),
            booking_id: 9,
            method: "momo".to_string(),
            bank_account: None,
            created_at: Utc::now(),
        };

        let raw = serde_json::to_string(&record).unwrap();
        let back: PaymentRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.amount, 160_000);
        assert_eq!(back.order_id.as_deref(), Some("MOMO_TXN1"));
        assert_eq!(back.booking_id, 9);
    }
}
