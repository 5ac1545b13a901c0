use actix_web::HttpResponse;
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email error: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    // === APPLICATION ERRORS ===
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    // Signature mismatch, expired bucket or malformed token. Maps to 400
    // so the caller cannot distinguish the three cases.
    #[error("Invalid or expired reset token.")]
    InvalidToken,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_json = |err_msg: &str| {
            if is_dev {
                serde_json::json!({ "detail": err_msg })
            } else {
                serde_json::json!({ "detail": "Internal server error" })
            }
        };

        match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Mail(error) => {
                log::error!("Email error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Smtp(error) => {
                log::error!("SMTP error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Address(error) => {
                log::error!("Address error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }

            // === APPLICATION ERRORS ===
            AppError::BadRequest(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "detail": self.to_string() }))
            }
            AppError::NotFound(_) => {
                HttpResponse::NotFound().json(serde_json::json!({ "detail": self.to_string() }))
            }
            AppError::InvalidToken => {
                HttpResponse::BadRequest().json(serde_json::json!({ "detail": self.to_string() }))
            }

            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}
