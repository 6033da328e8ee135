use std::time::Duration;

/// Mainnet API base URL (apps created via @CryptoBot).
pub const MAINNET_API_URL: &str = "https://pay.crypt.bot/api";

/// Testnet API base URL (apps created via @CryptoTestnetBot).
pub const TESTNET_API_URL: &str = "https://testnet-pay.crypt.bot/api";

/// Header carrying the app's API token on every request.
pub const TOKEN_HEADER: &str = "Crypto-Pay-API-Token";

/// Default request timeout for the built-in HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
