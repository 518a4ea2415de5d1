use artistriage::ServiceError;
use artistriage::auth::{Token, current_timestamp, extract_code};

#[test]
fn test_extract_code_from_redirect() {
    let code = extract_code("https://localhost/?code=AQD9xyz&state=abc").unwrap();
    assert_eq!(code, "AQD9xyz");
}

#[test]
fn test_extract_code_reports_denied_access() {
    let result = extract_code("https://localhost/?error=access_denied");
    assert!(matches!(result, Err(ServiceError::Auth(message)) if message == "access_denied"));
}

#[test]
fn test_extract_code_requires_code() {
    assert!(extract_code("https://localhost/").is_err());
    assert!(extract_code("not a url").is_err());
}

#[test]
fn test_token_expiry() {
    let fresh = Token {
        access_token: "fresh".to_string(),
        refresh_token: None,
        expires_at: current_timestamp() + 3600,
    };
    let stale = Token {
        expires_at: current_timestamp() + 10,
        ..fresh.clone()
    };

    assert!(!fresh.is_expired());
    assert!(stale.is_expired());
}
