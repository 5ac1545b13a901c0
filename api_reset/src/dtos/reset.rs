use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    /// Optional so the handler can answer a missing email with its own
    /// 400 body instead of a deserialization error.
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    /// Opaque encoding of the account identity, taken from the reset link.
    pub uid: String,
    pub token: String,
    pub new_password: String,
}
