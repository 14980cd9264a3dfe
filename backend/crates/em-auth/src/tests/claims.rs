use crate::{AuthError, Claims};

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use em_core::Identity;
use googletest::prelude::*;

fn unsigned_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature-not-checked")
}

#[googletest::test]
fn given_well_formed_token_when_peeked_then_claims_are_read_without_signature() {
    let token = unsigned_token(&serde_json::json!({
        "sub": "user-7",
        "email": "grace@example.com",
        "user_metadata": { "name": "Grace" },
        "exp": 4_102_444_800_i64,
        "iat": 1_700_000_000_i64,
    }));

    let claims = Claims::peek_unverified(&token).unwrap();

    expect_that!(claims.sub, eq("user-7"));
    expect_that!(claims.email, some(eq("grace@example.com")));
    expect_that!(claims.is_expired_at(1_700_000_001), eq(false));
}

#[googletest::test]
fn given_two_segment_token_when_peeked_then_malformed() {
    let result = Claims::peek_unverified("abc.def");

    expect_that!(matches!(result, Err(AuthError::MalformedToken { .. })), eq(true));
}

#[googletest::test]
fn given_non_json_payload_when_peeked_then_malformed() {
    let body = URL_SAFE_NO_PAD.encode("not json");
    let result = Claims::peek_unverified(&format!("h.{body}.s"));

    expect_that!(matches!(result, Err(AuthError::MalformedToken { .. })), eq(true));
}

#[googletest::test]
fn given_invalid_email_claim_when_validated_then_rejected() {
    let claims = Claims {
        sub: "user-1".to_string(),
        email: Some("not-an-email".to_string()),
        user_metadata: BTreeMap::new(),
        exp: 10,
        iat: 0,
    };

    let result = claims.validate();

    let claim = match result {
        Err(AuthError::InvalidClaim { claim, .. }) => Some(claim),
        _ => None,
    };
    expect_that!(claim, some(eq("email")));
}

#[googletest::test]
fn given_expiry_in_the_past_when_checked_then_expired() {
    let claims = Claims {
        sub: "user-1".to_string(),
        email: None,
        user_metadata: BTreeMap::new(),
        exp: 100,
        iat: 0,
    };

    expect_that!(claims.is_expired_at(100), eq(true));
    expect_that!(claims.is_expired_at(99), eq(false));
}

#[googletest::test]
fn given_claims_when_converted_then_identity_mirrors_subject() {
    let claims = Claims {
        sub: "user-9".to_string(),
        email: Some("x@example.com".to_string()),
        user_metadata: BTreeMap::new(),
        exp: 100,
        iat: 0,
    };

    let identity = Identity::from(claims);

    expect_that!(identity.id, eq("user-9"));
    expect_that!(identity.email, some(eq("x@example.com")));
    expect_that!(identity.metadata_name(), none());
}
