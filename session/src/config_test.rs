use super::*;

#[test]
fn normalize_base_url_strips_trailing_slash() {
    assert_eq!(normalize_base_url("http://localhost:3001/"), Ok("http://localhost:3001".to_owned()));
    assert_eq!(normalize_base_url("  https://api.test  "), Ok("https://api.test".to_owned()));
}

#[test]
fn normalize_base_url_rejects_other_schemes() {
    assert!(normalize_base_url("ftp://example.com").is_err());
    assert!(normalize_base_url("localhost:3001").is_err());
    assert!(normalize_base_url("http://").is_err());
}

#[test]
fn default_matches_constants() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.timeout_ms(), DEFAULT_REQUEST_TIMEOUT_SECS * 1000);
}

#[test]
fn parse_timeout_secs_accepts_positive_values() {
    assert_eq!(parse_timeout_secs("3"), 3);
    assert_eq!(parse_timeout_secs(" 42 "), 42);
}

#[test]
fn parse_timeout_secs_falls_back_on_zero_and_garbage() {
    assert_eq!(parse_timeout_secs("0"), DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(parse_timeout_secs("soon"), DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(parse_timeout_secs(""), DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(parse_timeout_secs("-5"), DEFAULT_REQUEST_TIMEOUT_SECS);
}
