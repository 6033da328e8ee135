//! Async client for the Crypto Pay API.
//!
//! Crypto Pay is the payment service run by [@CryptoBot](http://t.me/CryptoBot?start=pay)
//! (or [@CryptoTestnetBot](http://t.me/CryptoTestnetBot?start=pay) for testnet).
//! Send `/pay` to the bot to create an app and get an API token.
//!
//! The client is a thin wrapper: it serializes typed parameters, drops
//! absent optional fields, sends one HTTP request per call, and hands the
//! decoded JSON back untouched — including the API's own `{ok, error}`
//! envelope.
//!
//! # Quick example
//!
//! ```no_run
//! use crypto_pay::{CreateInvoiceParams, CryptoPayClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), crypto_pay::CryptoPayError> {
//! let client = CryptoPayClient::new("12345:AAbbCCddEE")?;
//!
//! let me = client.get_me(false).await?;
//! println!("app: {me}");
//!
//! let mut params = CreateInvoiceParams::new("USDT", "125.50".parse().unwrap());
//! params.description = Some("3 months subscription".to_string());
//! let invoice = client.create_invoice(&params).await?;
//! println!("invoice: {invoice}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod constants;
pub mod error;
pub mod params;
pub mod requests;

pub use client::CryptoPayClient;
pub use constants::{MAINNET_API_URL, TESTNET_API_URL, TOKEN_HEADER};
pub use error::CryptoPayError;
pub use requests::{
    CheckFilter, CheckStatus, CreateCheckParams, CreateInvoiceParams, InvoiceFilter,
    InvoiceStatus, PaidButton, StatsFilter, TransferFilter, TransferParams,
};

// Re-export the amount type so callers don't need a separate dependency.
pub use rust_decimal::Decimal;
