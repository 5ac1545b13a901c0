use chrono::NaiveDateTime;
use serde::Serialize;

/// A row of country reference data, keyed by ISO 3166-1 alpha-2 code.
///
/// Countries are never deleted. A country that disappears from the
/// authoritative source is flipped to `is_active = false` so addresses
/// that reference it stay valid.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    /// Empty string when no phone code is known for this country.
    pub phone_code: String,
    /// Empty string when no currency code is known for this country.
    pub currency_code: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}
