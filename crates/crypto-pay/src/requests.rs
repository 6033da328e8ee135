//! Typed parameters for Crypto Pay API operations.
//!
//! Required fields live as plain struct fields set via `new`; optional
//! fields are `Option` and are dropped from the wire payload when `None`
//! (see [`crate::params::normalize`]). Monetary amounts are
//! [`rust_decimal::Decimal`], which serializes as a decimal string — the
//! API specifies amounts as strings, never floats.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Button shown to the payer once an invoice is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaidButton {
    ViewItem,
    OpenChannel,
    OpenBot,
    Callback,
}

/// Invoice lifecycle states accepted by the `getInvoices` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Active,
    Paid,
}

/// Check lifecycle states accepted by the `getChecks` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Active,
    Activated,
}

/// Parameters for `createInvoice`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInvoiceParams {
    /// Currency code, e.g. `BTC`, `TON`, `USDT`.
    pub asset: String,
    /// Invoice amount, e.g. `125.50`.
    pub amount: Decimal,
    /// Description shown to the payer. Up to 1024 symbols.
    pub description: Option<String>,
    /// Message revealed to the payer after payment.
    pub hidden_message: Option<String>,
    pub paid_btn_name: Option<PaidButton>,
    /// Required by the API when `paid_btn_name` is set.
    pub paid_btn_url: Option<String>,
    /// Opaque data echoed back with the invoice. Up to 4 KiB.
    pub payload: Option<String>,
    pub allow_comments: Option<bool>,
    pub allow_anonymous: Option<bool>,
    /// Invoice lifetime in seconds, 1–2678400. Omitted means no expiration.
    pub expires_in: Option<u32>,
}

impl CreateInvoiceParams {
    pub fn new(asset: impl Into<String>, amount: Decimal) -> Self {
        Self {
            asset: asset.into(),
            amount,
            description: None,
            hidden_message: None,
            paid_btn_name: None,
            paid_btn_url: None,
            payload: None,
            allow_comments: None,
            allow_anonymous: None,
            expires_in: None,
        }
    }
}

/// Parameters for `transfer`.
#[derive(Debug, Clone, Serialize)]
pub struct TransferParams {
    /// Telegram user ID of the recipient.
    pub user_id: i64,
    pub asset: String,
    pub amount: Decimal,
    /// Idempotency key, unique per transfer. Up to 64 symbols.
    pub spend_id: String,
    pub comment: Option<String>,
    pub disable_send_notification: Option<bool>,
}

impl TransferParams {
    pub fn new(
        user_id: i64,
        asset: impl Into<String>,
        amount: Decimal,
        spend_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            asset: asset.into(),
            amount,
            spend_id: spend_id.into(),
            comment: None,
            disable_send_notification: None,
        }
    }
}

/// Parameters for `createCheck`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCheckParams {
    pub asset: String,
    pub amount: Decimal,
    /// Only this user ID may activate the check.
    pub pin_to_user_id: Option<i64>,
    /// Only this username may activate the check.
    pub pin_to_username: Option<String>,
}

impl CreateCheckParams {
    pub fn new(asset: impl Into<String>, amount: Decimal) -> Self {
        Self {
            asset: asset.into(),
            amount,
            pin_to_user_id: None,
            pin_to_username: None,
        }
    }
}

/// Filter for `getInvoices`. `Default` selects everything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceFilter {
    pub asset: Option<String>,
    pub invoice_ids: Option<Vec<u64>>,
    pub status: Option<InvoiceStatus>,
    pub offset: Option<u32>,
    /// Number of invoices to return. Default 100, max 1000.
    pub count: Option<u32>,
}

/// Filter for `getTransfers`. `Default` selects everything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferFilter {
    pub asset: Option<String>,
    pub transfer_ids: Option<Vec<u64>>,
    pub offset: Option<u32>,
    pub count: Option<u32>,
}

/// Filter for `getChecks`. `Default` selects everything.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckFilter {
    pub asset: Option<String>,
    pub check_ids: Option<Vec<u64>>,
    pub status: Option<CheckStatus>,
    pub offset: Option<u32>,
    pub count: Option<u32>,
}

/// Date range for `getStats`. The API defaults to the last 24 hours.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsFilter {
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}
