use crate::{AuthError, bearer_token, cookie_value, request_token};

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE, HeaderValue};

fn headers(pairs: &[(http::header::HeaderName, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    map
}

#[test]
fn given_no_authorization_header_when_bearer_read_then_none() {
    assert!(bearer_token(&HeaderMap::new()).unwrap().is_none());
}

#[test]
fn given_bearer_header_when_read_then_token_returned() {
    let map = headers(&[(AUTHORIZATION, "Bearer abc.def.ghi")]);

    assert_eq!(bearer_token(&map).unwrap().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn given_basic_scheme_when_bearer_read_then_invalid_scheme() {
    let map = headers(&[(AUTHORIZATION, "Basic dXNlcjpwYXNz")]);

    assert!(matches!(
        bearer_token(&map),
        Err(AuthError::InvalidScheme { .. })
    ));
}

#[test]
fn given_empty_bearer_when_read_then_missing_token() {
    let map = headers(&[(AUTHORIZATION, "Bearer   ")]);

    assert!(matches!(
        bearer_token(&map),
        Err(AuthError::MissingToken { .. })
    ));
}

#[test]
fn given_cookie_header_with_several_cookies_when_read_then_named_value_found() {
    let map = headers(&[(COOKIE, "theme=dark; em_session=tok123; other=1")]);

    assert_eq!(cookie_value(&map, "em_session").as_deref(), Some("tok123"));
    assert_eq!(cookie_value(&map, "missing"), None);
}

#[test]
fn given_both_bearer_and_cookie_when_request_token_then_bearer_wins() {
    let map = headers(&[
        (AUTHORIZATION, "Bearer from-header"),
        (COOKIE, "em_session=from-cookie"),
    ]);

    assert_eq!(
        request_token(&map, "em_session").unwrap().as_deref(),
        Some("from-header")
    );
}

#[test]
fn given_only_cookie_when_request_token_then_cookie_used() {
    let map = headers(&[(COOKIE, "em_session=from-cookie")]);

    assert_eq!(
        request_token(&map, "em_session").unwrap().as_deref(),
        Some("from-cookie")
    );
}
