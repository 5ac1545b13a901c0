use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, password_hash::PasswordHasher};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::env_config::Config;
use common::error::{AppError, Res};
use sqlx::PgPool;
use uuid::Uuid;

use crate::services::mailer::Mailer;
use crate::token::{self, AccountState};

/// Looks up the account, issues a token bound to its current state and
/// hands the reset link to the mail dispatcher.
///
/// Deliberately discloses whether the email is registered: an unknown
/// address gets a 404 rather than a generic 200. This mirrors the
/// product's current contract with the frontend and is not an oversight.
pub async fn request_reset(pool: &PgPool, config: &Config, mailer: &Mailer, email: &str) -> Res<()> {
    let (account, credentials) = db::account::get_account_with_password_hash(pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("No user is associated with this email.".to_string()))?;

    let state = AccountState {
        user_id: account.id,
        password_hash: &credentials.password_hash,
        last_login: account.last_login,
    };
    let token = token::issue(&config.reset_token, &state);
    let uid = encode_uid(account.id);
    let reset_url = format!(
        "{}/reset-password/{}/{}/",
        config.frontend_url.trim_end_matches('/'),
        uid,
        token
    );

    // Fire-and-forget. Delivery failures are the dispatcher's problem;
    // the request has already succeeded from the caller's point of view.
    mailer.send_password_reset_email(account.email, reset_url);

    Ok(())
}

/// Verifies the token against the account's current state and, on
/// success, overwrites the password hash. The overwrite is what makes
/// the token single-use: the next verification recomputes against the
/// new hash and fails.
pub async fn confirm_reset(
    pool: &PgPool,
    config: &Config,
    uid: &str,
    token: &str,
    new_password: &str,
) -> Res<()> {
    let user_id = decode_uid(uid).ok_or(AppError::InvalidToken)?;

    let (account, credentials) = db::account::get_account_with_password_hash_by_id(pool, user_id)
        .await?
        .ok_or(AppError::InvalidToken)?;

    let state = AccountState {
        user_id: account.id,
        password_hash: &credentials.password_hash,
        last_login: account.last_login,
    };
    if !token::verify(&config.reset_token, &state, token) {
        return Err(AppError::InvalidToken);
    }

    validate_new_password(new_password)?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(new_password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    db::account::update_password_hash(pool, account.id, &password_hash).await?;

    log::info!("password reset completed for user {}", account.id);
    Ok(())
}

/// Reversible, URL-safe encoding of the account's primary key, used in
/// the reset link path segment.
pub fn encode_uid(user_id: Uuid) -> String {
    URL_SAFE_NO_PAD.encode(user_id.to_string().as_bytes())
}

pub fn decode_uid(uid: &str) -> Option<Uuid> {
    let bytes = URL_SAFE_NO_PAD.decode(uid).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    Uuid::parse_str(&text).ok()
}

fn validate_new_password(password: &str) -> Res<()> {
    if password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters long.".to_string(),
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest(
            "Password cannot be entirely numeric.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_encoding_round_trips() {
        let id = Uuid::new_v4();
        assert_eq!(decode_uid(&encode_uid(id)), Some(id));
    }

    #[test]
    fn uid_decoding_fails_closed_on_garbage() {
        assert_eq!(decode_uid(""), None);
        assert_eq!(decode_uid("!!!not-base64!!!"), None);
        // Valid base64, but not a UUID underneath.
        assert_eq!(decode_uid(&URL_SAFE_NO_PAD.encode(b"12345")), None);
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_new_password("abc1234").is_err());
        assert!(validate_new_password("abcd1234").is_ok());
    }

    #[test]
    fn fully_numeric_passwords_are_rejected() {
        assert!(validate_new_password("1234567890").is_err());
    }
}
