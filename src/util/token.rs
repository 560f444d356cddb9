#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Extract the `exp` claim (seconds since epoch) from a signed token.
///
/// This is an unverified decode: the payload segment is base64url-decoded
/// and parsed as JSON, but the signature is not (and cannot be) checked
/// client-side. Returns `None` for any malformed input — callers treat that
/// as already-expired.
pub fn decode_exp(token: &str) -> Option<u64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?;

    // RFC 7519 NumericDate permits fractional seconds.
    exp.as_u64()
        .or_else(|| exp.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

/// Whether the token is expired at `now`, fail-closed.
///
/// An undecodable payload or missing claim counts as expired, and the
/// boundary is inclusive: a token expiring exactly now is expired.
pub fn is_expired(token: &str, now: u64) -> bool {
    match decode_exp(token) {
        Some(exp) => exp <= now,
        None => true,
    }
}

/// Current time as seconds since the Unix epoch.
pub fn now_epoch_secs() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
