use actix_web::{Responder, get, web};
use common::error::{AppError, Res};
use common::http::Success;
use sqlx::PgPool;
use std::sync::Arc;

/// Returns one country reference row by ISO 3166-1 alpha-2 code.
///
/// # Input
/// - `path`: the country code, case-insensitive
///
/// # Output
/// - Success: 200 with the country row, inactive rows included so
///   addresses referencing a deactivated country still resolve it
/// - Error: 404 for a code the store has never seen
#[get("/{code}")]
async fn get_country(
    path: web::Path<String>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let code = path.into_inner().to_uppercase();
    let country = db::country::get_country(&***pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound("Country not found.".to_string()))?;
    Success::ok(country)
}

pub fn mount_countries() -> actix_web::Scope {
    web::scope("/countries").service(get_country)
}
