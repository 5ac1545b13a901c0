//! Stateless password-reset tokens.
//!
//! A token is a keyed signature over the account identity, a quantized
//! timestamp and a fingerprint of the account's mutable secrets. Nothing
//! is stored: validity is re-derived at verification time. Changing the
//! password (or logging in) changes the fingerprint, which retroactively
//! invalidates every token issued before the change.

use chrono::{DateTime, NaiveDateTime, Utc};
use common::env_config::ResetTokenConfig;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// The slice of account state a token is bound to.
pub struct AccountState<'a> {
    pub user_id: Uuid,
    pub password_hash: &'a str,
    pub last_login: Option<NaiveDateTime>,
}

impl AccountState<'_> {
    /// Any password change or login changes this value, and with it the
    /// expected signature of every outstanding token.
    fn fingerprint(&self) -> String {
        let last_login = self
            .last_login
            .map(|t| t.and_utc().timestamp())
            .unwrap_or_default();
        format!("{}:{}", self.password_hash, last_login)
    }
}

/// Issues a reset token for the account's current state.
///
/// Deterministic within one time bucket: calling this twice without an
/// intervening password change or login returns the same string.
pub fn issue(config: &ResetTokenConfig, account: &AccountState) -> String {
    issue_at(config, account, Utc::now())
}

/// Verifies a token against the account's *current* state.
///
/// Accepts the token only if its signature matches the bucket encoded in
/// it and that bucket is the current one or the one directly before it.
/// Malformed input fails closed.
pub fn verify(config: &ResetTokenConfig, account: &AccountState, token: &str) -> bool {
    verify_at(config, account, token, Utc::now())
}

fn issue_at(config: &ResetTokenConfig, account: &AccountState, now: DateTime<Utc>) -> String {
    let bucket = time_bucket(config, now);
    format!("{:x}-{}", bucket, sign(config, account, bucket))
}

fn verify_at(
    config: &ResetTokenConfig,
    account: &AccountState,
    token: &str,
    now: DateTime<Utc>,
) -> bool {
    let Some((bucket_part, sig_part)) = token.split_once('-') else {
        return false;
    };
    let Ok(token_bucket) = i64::from_str_radix(bucket_part, 16) else {
        return false;
    };
    let Ok(signature) = hex::decode(sig_part) else {
        return false;
    };

    // Same or directly preceding bucket; anything else is expired or
    // from the future.
    let current = time_bucket(config, now);
    if token_bucket > current || current - token_bucket > 1 {
        return false;
    }

    // Constant-time comparison via Mac::verify_slice.
    mac(config, account, token_bucket)
        .verify_slice(&signature)
        .is_ok()
}

fn time_bucket(config: &ResetTokenConfig, now: DateTime<Utc>) -> i64 {
    now.timestamp() / config.timeout_secs as i64
}

fn sign(config: &ResetTokenConfig, account: &AccountState, bucket: i64) -> String {
    hex::encode(mac(config, account, bucket).finalize().into_bytes())
}

fn mac(config: &ResetTokenConfig, account: &AccountState, bucket: i64) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(config.secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(account.user_id.as_bytes());
    mac.update(&bucket.to_be_bytes());
    mac.update(account.fingerprint().as_bytes());
    mac
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TIMEOUT: u64 = 259_200; // 3 days

    fn config() -> ResetTokenConfig {
        ResetTokenConfig {
            secret: "test-signing-secret".to_string(),
            timeout_secs: TIMEOUT,
        }
    }

    fn account(password_hash: &str) -> AccountState<'_> {
        AccountState {
            user_id: Uuid::parse_str("7a6f1b0e-4f62-4f0c-9d3a-8b1c2e5f7a91").unwrap(),
            password_hash,
            last_login: Some(
                Utc.timestamp_opt(1_700_000_000, 0)
                    .unwrap()
                    .naive_utc(),
            ),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_750_000_000, 0).unwrap()
    }

    #[test]
    fn token_verifies_immediately_after_issuance() {
        let cfg = config();
        let acct = account("argon2-hash");
        let token = issue_at(&cfg, &acct, now());
        assert!(verify_at(&cfg, &acct, &token, now()));
    }

    #[test]
    fn token_is_deterministic_within_a_bucket() {
        let cfg = config();
        let acct = account("argon2-hash");
        let a = issue_at(&cfg, &acct, now());
        let b = issue_at(&cfg, &acct, now() + chrono::Duration::seconds(5));
        assert_eq!(a, b);
    }

    #[test]
    fn token_survives_into_the_adjacent_bucket() {
        let cfg = config();
        let acct = account("argon2-hash");
        let token = issue_at(&cfg, &acct, now());
        let later = now() + chrono::Duration::seconds(TIMEOUT as i64);
        assert!(verify_at(&cfg, &acct, &token, later));
    }

    #[test]
    fn token_expires_after_two_buckets() {
        let cfg = config();
        let acct = account("argon2-hash");
        let token = issue_at(&cfg, &acct, now());
        let later = now() + chrono::Duration::seconds(2 * TIMEOUT as i64);
        assert!(!verify_at(&cfg, &acct, &token, later));
    }

    #[test]
    fn token_from_the_future_is_rejected() {
        let cfg = config();
        let acct = account("argon2-hash");
        let token = issue_at(&cfg, &acct, now() + chrono::Duration::seconds(TIMEOUT as i64));
        assert!(!verify_at(&cfg, &acct, &token, now()));
    }

    #[test]
    fn password_change_invalidates_outstanding_tokens() {
        let cfg = config();
        let before = account("old-hash");
        let token = issue_at(&cfg, &before, now());
        let after = account("new-hash");
        assert!(!verify_at(&cfg, &after, &token, now()));
    }

    #[test]
    fn login_invalidates_outstanding_tokens() {
        let cfg = config();
        let before = account("argon2-hash");
        let token = issue_at(&cfg, &before, now());
        let mut after = account("argon2-hash");
        after.last_login = Some(now().naive_utc());
        assert!(!verify_at(&cfg, &after, &token, now()));
    }

    #[test]
    fn token_issued_for_another_account_is_rejected() {
        let cfg = config();
        let alice = account("argon2-hash");
        let mut bob = account("argon2-hash");
        bob.user_id = Uuid::parse_str("2c3d4e5f-6a7b-4c8d-9e0f-1a2b3c4d5e6f").unwrap();
        let token = issue_at(&cfg, &alice, now());
        assert!(!verify_at(&cfg, &bob, &token, now()));
    }

    #[test]
    fn malformed_tokens_fail_closed() {
        let cfg = config();
        let acct = account("argon2-hash");
        for token in ["", "garbage", "no-signature-here", "-", "ffff-zzzz", "ffff-"] {
            assert!(!verify_at(&cfg, &acct, token, now()), "{token:?}");
        }
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let cfg = config();
        let acct = account("argon2-hash");
        let token = issue_at(&cfg, &acct, now());
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == '0' { '1' } else { '0' });
        assert!(!verify_at(&cfg, &acct, &tampered, now()));
    }
}
