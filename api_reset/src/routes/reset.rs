use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::reset::{PasswordResetConfirmRequest, PasswordResetRequest};
use crate::services;
use crate::services::mailer::Mailer;

/// Requests a password reset for the given email address.
///
/// # Input
/// - `req`: JSON payload containing the registered email address
/// - `pool`: Database connection pool
/// - `config`: Application configuration
///
/// # Output
/// - Success: 200 with `{"detail": "Password reset email sent."}`;
///   the email itself is dispatched asynchronously
/// - Error: 400 if the email field is missing or empty,
///   404 if no account matches the email
#[post("/password-reset")]
async fn post_password_reset(
    req: web::Json<PasswordResetRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
    mailer: web::Data<Mailer>,
) -> Res<impl Responder> {
    let email = req
        .into_inner()
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Email is required.".to_string()))?;

    services::reset::request_reset(&pool, &config, &mailer, &email).await?;
    Success::detail("Password reset email sent.")
}

/// Confirms a password reset with a token from the emailed link.
///
/// # Input
/// - `req`: JSON payload with `uid` (opaque account identity from the
///   link), `token`, and `new_password`
/// - `pool`: Database connection pool
/// - `config`: Application configuration
///
/// # Output
/// - Success: 200 with `{"detail": "Password has been reset."}`
/// - Error: 400 for an invalid or expired token, a malformed uid,
///   or a new password failing the strength policy
#[post("/password-reset/confirm")]
async fn post_password_reset_confirm(
    req: web::Json<PasswordResetConfirmRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let req = req.into_inner();
    services::reset::confirm_reset(&pool, &config, &req.uid, &req.token, &req.new_password)
        .await?;
    Success::detail("Password has been reset.")
}

pub fn mount_reset() -> actix_web::Scope {
    web::scope("/accounts")
        .service(post_password_reset)
        .service(post_password_reset_confirm)
}
