use common::error::Res;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::account::{Account, AuthCredentials};

/// Flat join row used because the reset flow always needs the account
/// together with its current password hash.
#[derive(sqlx::FromRow)]
struct AccountCredentialsRow {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    role: String,
    last_login: Option<chrono::NaiveDateTime>,
    created_at: chrono::NaiveDateTime,
    updated_at: chrono::NaiveDateTime,
    password_hash: String,
}

impl AccountCredentialsRow {
    fn split(self) -> (Account, AuthCredentials) {
        (
            Account {
                id: self.id,
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
                role: self.role,
                last_login: self.last_login,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            AuthCredentials {
                user_id: self.id,
                password_hash: self.password_hash,
            },
        )
    }
}

const ACCOUNT_CREDENTIALS_COLUMNS: &str = "u.id, u.email, u.first_name, u.last_name, u.role, \
     u.last_login, u.created_at, u.updated_at, ac.password_hash";

pub async fn get_account_with_password_hash<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<Option<(Account, AuthCredentials)>> {
    let row = sqlx::query_as::<_, AccountCredentialsRow>(&format!(
        "SELECT {ACCOUNT_CREDENTIALS_COLUMNS}
         FROM users u
         JOIN auth_credentials ac ON u.id = ac.user_id
         WHERE u.email = $1"
    ))
    .bind(email)
    .fetch_optional(executor)
    .await?;
    Ok(row.map(AccountCredentialsRow::split))
}

pub async fn get_account_with_password_hash_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<(Account, AuthCredentials)>> {
    let row = sqlx::query_as::<_, AccountCredentialsRow>(&format!(
        "SELECT {ACCOUNT_CREDENTIALS_COLUMNS}
         FROM users u
         JOIN auth_credentials ac ON u.id = ac.user_id
         WHERE u.id = $1"
    ))
    .bind(user_id)
    .fetch_optional(executor)
    .await?;
    Ok(row.map(AccountCredentialsRow::split))
}

/// Overwrites the stored password hash. Every reset token issued against
/// the old hash stops verifying the moment this commits.
pub async fn update_password_hash<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    password_hash: &str,
) -> Res<()> {
    sqlx::query("UPDATE auth_credentials SET password_hash = $2 WHERE user_id = $1")
        .bind(user_id)
        .bind(password_hash)
        .execute(executor)
        .await?;
    Ok(())
}
