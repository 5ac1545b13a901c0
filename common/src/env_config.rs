use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// This struct holds all the necessary configuration parameters
/// required to initialize and run the accounts service.
/// It includes database connection details, reset-token configuration,
/// server host and port, number of worker threads, CORS settings,
/// logging preferences, the frontend base URL used to build
/// password-reset links, and the SMTP relay configuration.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// Configuration for the password-reset token scheme.
    pub reset_token: ResetTokenConfig,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Base URL of the web frontend. Password-reset links sent by email
    /// point at this host, not at this service.
    pub frontend_url: String,
    /// Configuration for the SMTP relay used to deliver reset emails.
    pub smtp: SmtpConfig,
}

#[derive(Clone, Debug)]
/// Configuration for the stateless password-reset token scheme.
///
/// Tokens are keyed HMAC signatures; no reset state is ever stored.
/// The secret must not be shared with any other signing concern.
pub struct ResetTokenConfig {
    /// The server-wide secret key used to sign and verify reset tokens.
    pub secret: String,
    /// Width of one token time bucket in seconds. A token stays valid
    /// through its own bucket and the one after it, so the effective
    /// lifetime is between one and two buckets.
    pub timeout_secs: u64,
}

impl ResetTokenConfig {
    /// Creates a new `ResetTokenConfig` instance from environment variables.
    ///
    /// - `RESET_TOKEN_SECRET`: Required. The secret key for token signing.
    /// - `RESET_TOKEN_TIMEOUT_SECS`: Optional. Defaults to 259200 (3 days).
    ///
    /// # Panics
    ///
    /// This function will panic if:
    /// - `RESET_TOKEN_SECRET` environment variable is not set
    /// - `RESET_TOKEN_TIMEOUT_SECS` is set but cannot be parsed as a valid
    ///   number, or is zero (the bucket width divides timestamps)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let timeout_secs: u64 = env::var("RESET_TOKEN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "259200".to_string())
            .parse()
            .expect("RESET_TOKEN_TIMEOUT_SECS must be a valid number");
        assert!(
            timeout_secs > 0,
            "RESET_TOKEN_TIMEOUT_SECS must be greater than zero"
        );

        ResetTokenConfig {
            secret: env::var("RESET_TOKEN_SECRET").expect("RESET_TOKEN_SECRET must be set"),
            timeout_secs,
        }
    }
}

#[derive(Clone, Debug)]
/// SMTP relay settings for outbound email.
pub struct SmtpConfig {
    /// Hostname of the SMTP relay.
    pub host: String,
    /// Port of the SMTP relay.
    pub port: u16,
    /// Username for SMTP authentication.
    pub username: String,
    /// Password for SMTP authentication.
    pub password: String,
    /// The From address on outbound mail.
    pub from_address: String,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `ENVIRONMENT`: "development" or "production"
    /// - `DATABASE_URL`: Connection string for the database
    /// - `RESET_TOKEN_SECRET`: Secret key for reset-token signing
    ///   (via `ResetTokenConfig::from_env()`)
    ///
    /// Optional (with defaults):
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `FRONTEND_URL`: Frontend base URL for reset links (default: "http://localhost:3000")
    /// - `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`, `SMTP_FROM`:
    ///   SMTP relay settings (defaults target a local relay)
    ///
    /// # Panics
    ///
    /// This function will panic if required environment variables are missing
    /// or if numeric values cannot be parsed correctly.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            reset_token: ResetTokenConfig::from_env(),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .unwrap_or(587),
                username: env::var("SMTP_USERNAME").unwrap_or_default(),
                password: env::var("SMTP_PASSWORD").unwrap_or_default(),
                from_address: env::var("SMTP_FROM")
                    .unwrap_or_else(|_| "noreply@example.com".to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "RESET_TOKEN_TIMEOUT_SECS must be greater than zero")]
    fn zero_token_timeout_is_rejected_at_startup() {
        unsafe {
            env::set_var("RESET_TOKEN_SECRET", "test-signing-secret");
            env::set_var("RESET_TOKEN_TIMEOUT_SECS", "0");
        }
        let _ = ResetTokenConfig::from_env();
    }
}
