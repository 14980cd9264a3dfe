#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde_json::{Value, json};

/// Token with a readable payload and a junk signature; the client only
/// peeks at claims, the server verifies.
pub fn unsigned_token(sub: &str, email: Option<&str>, exp_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let mut payload = json!({
        "sub": sub,
        "iat": now,
        "exp": now + exp_offset_secs,
    });
    if let Some(email) = email {
        payload["email"] = Value::from(email);
    }

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.signature")
}
