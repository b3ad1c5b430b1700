use serde::Serialize;

/// Body for successful deletes: `{"ok": true}`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
