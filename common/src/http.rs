use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use super::error::Res;

pub struct Success;
impl Success {
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(body))
    }
    /// 200 response with a `{"detail": "..."}` body, the shape the
    /// account endpoints use for plain status messages.
    pub fn detail(message: &str) -> Res<impl Responder> {
        Result::Ok(HttpResponse::Ok().json(Detail {
            detail: message.to_string(),
        }))
    }
}

#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: String,
}
