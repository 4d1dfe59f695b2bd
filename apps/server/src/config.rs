//! Environment-driven server configuration.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;

/// Runtime configuration, read once at startup from `FF_*` environment
/// variables (a `.env` file is honored via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Secret used to sign access tokens.
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub token_ttl_secs: u64,
    /// Allowed CORS origin; "*" permits any origin.
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr =
            std::env::var("FF_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let db_path =
            std::env::var("FF_DB_PATH").unwrap_or_else(|_| "data/finfusion.db".to_string());
        let jwt_secret = std::env::var("FF_JWT_SECRET").unwrap_or_else(|_| {
            // Ephemeral secret: tokens do not survive a restart. Fine for
            // development, logged so operators notice in production.
            let mut bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut bytes);
            tracing::warn!("FF_JWT_SECRET not set; generated an ephemeral signing secret");
            BASE64.encode(bytes)
        });
        let token_ttl_secs = std::env::var("FF_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);
        let cors_origin = std::env::var("FF_CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Self {
            listen_addr,
            db_path,
            jwt_secret,
            token_ttl_secs,
            cors_origin,
        }
    }
}
