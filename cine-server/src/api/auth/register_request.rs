use serde::Deserialize;

/// Fields are optional at the serde layer so that missing values surface as
/// the contract's 400 `invalid_payload` instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}
