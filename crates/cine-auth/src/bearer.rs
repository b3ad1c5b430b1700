/// Extract the token from an `Authorization` header value.
///
/// Returns `None` for a missing header, a non-`Bearer` scheme, or an empty
/// remainder - the three cases are deliberately indistinguishable so the
/// caller rejects them identically, and the token service is never invoked
/// with an empty string.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
