use common::error::Res;
use sqlx::{Executor, Postgres};
use std::collections::HashSet;

use crate::dtos::country::CountryUpsert;
use crate::models::country::Country;

pub async fn get_country<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    code: &str,
) -> Res<Option<Country>> {
    let country = sqlx::query_as::<_, Country>(
        "SELECT code, name, phone_code, currency_code, is_active, created_at
         FROM countries WHERE code = $1",
    )
    .bind(code)
    .fetch_optional(executor)
    .await?;
    Ok(country)
}

pub async fn list_countries<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<Country>> {
    let countries = sqlx::query_as::<_, Country>(
        "SELECT code, name, phone_code, currency_code, is_active, created_at
         FROM countries ORDER BY code",
    )
    .fetch_all(executor)
    .await?;
    Ok(countries)
}

pub async fn list_active_codes<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<HashSet<String>> {
    let codes: Vec<String> =
        sqlx::query_scalar("SELECT code FROM countries WHERE is_active = true")
            .fetch_all(executor)
            .await?;
    Ok(codes.into_iter().collect())
}

/// Inserts the row or overwrites its mutable fields, reactivating it if
/// needed. `created_at` is only written on first insert.
pub async fn upsert_country<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: &CountryUpsert,
) -> Res<()> {
    sqlx::query(
        r#"
        INSERT INTO countries (code, name, phone_code, currency_code, is_active)
        VALUES ($1, $2, $3, $4, true)
        ON CONFLICT (code) DO UPDATE
        SET name = EXCLUDED.name,
            phone_code = EXCLUDED.phone_code,
            currency_code = EXCLUDED.currency_code,
            is_active = true
        "#,
    )
    .bind(&data.code)
    .bind(&data.name)
    .bind(&data.phone_code)
    .bind(&data.currency_code)
    .execute(executor)
    .await?;
    Ok(())
}

/// No-op when the code does not exist.
pub async fn deactivate_country<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    code: &str,
) -> Res<()> {
    sqlx::query("UPDATE countries SET is_active = false WHERE code = $1")
        .bind(code)
        .execute(executor)
        .await?;
    Ok(())
}
