use thiserror::Error;

/// Errors returned by Crypto Pay API operations.
///
/// API-level failures (`{"ok": false, "error": ...}` bodies) are *not*
/// represented here. The remote envelope is returned to the caller as a
/// normal decoded value; inspecting `ok` is the caller's job.
#[derive(Debug, Error)]
pub enum CryptoPayError {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid params: {0}")]
    InvalidParams(String),
}
