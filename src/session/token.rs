//! Credential token inspection
//!
//! The backend issues JWT-shaped bearer tokens. The only claim the client
//! reads is `exp`, so expiry can be detected locally without a server round
//! trip. The signature is never verified here; the server remains the
//! authority on token validity.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    // Base64url uses - instead of + and _ instead of /
    let standard_b64 = input.replace('-', "+").replace('_', "/");

    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

/// Extract the embedded expiration time from a bearer token.
///
/// Returns [`ApiError::InvalidToken`] for anything that is not a three-part
/// JWT with a parseable `exp` claim.
pub fn decode_expiry(token: &str) -> Result<DateTime<Utc>> {
    #[derive(Deserialize)]
    struct Claims {
        exp: i64, // Unix timestamp
    }

    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::InvalidToken.into());
    }

    let payload_bytes = base64_decode_url(parts[1]).map_err(|_| ApiError::InvalidToken)?;

    let claims: Claims =
        serde_json::from_slice(&payload_bytes).map_err(|_| ApiError::InvalidToken)?;

    DateTime::from_timestamp(claims.exp, 0).ok_or_else(|| ApiError::InvalidToken.into())
}

#[cfg(test)]
pub(crate) fn make_token(expires_at: DateTime<Utc>) -> String {
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, expires_at.timestamp()));
    format!("{}.{}.signature", header, payload)
}
