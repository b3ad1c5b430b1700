use serde::Serialize;

/// Successful register/login body: the bearer token and nothing else.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
