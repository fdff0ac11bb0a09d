use super::*;

#[test]
fn error_codes_are_stable() {
    assert_eq!(FetchError::Request("x".into()).error_code(), "E_OPENSKY_REQUEST");
    assert_eq!(FetchError::Status { status: 500, body: String::new() }.error_code(), "E_OPENSKY_STATUS");
    assert_eq!(FetchError::Body("x".into()).error_code(), "E_OPENSKY_BODY");
    assert_eq!(FetchError::HttpClientBuild("x".into()).error_code(), "E_HTTP_CLIENT_BUILD");
}

#[test]
fn transport_and_server_errors_are_retryable() {
    assert!(FetchError::Request("timeout".into()).retryable());
    assert!(FetchError::Status { status: 429, body: String::new() }.retryable());
    assert!(FetchError::Status { status: 503, body: String::new() }.retryable());
}

#[test]
fn client_errors_are_not_retryable() {
    assert!(!FetchError::Status { status: 401, body: String::new() }.retryable());
    assert!(!FetchError::Body("bad json".into()).retryable());
}

#[test]
fn status_error_message_includes_code() {
    let err = FetchError::Status { status: 502, body: "bad gateway".into() };
    assert_eq!(err.to_string(), "OpenSky response error: status 502");
}

#[test]
fn truncate_body_keeps_short_bodies() {
    assert_eq!(truncate_body("short"), "short");
}

#[test]
fn truncate_body_caps_long_bodies() {
    let long = "x".repeat(MAX_ERROR_BODY_CHARS + 10);
    let out = truncate_body(&long);
    assert_eq!(out.chars().count(), MAX_ERROR_BODY_CHARS + 1);
    assert!(out.ends_with('…'));
}

#[test]
fn client_uses_configured_url() {
    let cfg = SyncConfig { api_url: "http://localhost:1/states".into(), ..SyncConfig::default() };
    let client = OpenSkyClient::new(&cfg).unwrap();
    assert_eq!(client.api_url(), "http://localhost:1/states");
    assert_eq!(client.describe(), "http://localhost:1/states");
}
