use super::*;

#[test]
fn build_config_defaults_when_unset() {
    let config = build_config(None, None);
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn build_config_normalizes_base_url() {
    let config = build_config(Some("https://api.example.com/"), Some("3"));
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
}

#[test]
fn build_config_ignores_zero_and_garbage_timeouts() {
    assert_eq!(build_config(None, Some("0")).request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(build_config(None, Some("soon")).request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
}

#[test]
fn build_config_falls_back_on_invalid_base_url_but_keeps_timeout() {
    let config = build_config(Some("ftp://nope"), Some("4"));
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.request_timeout, Duration::from_secs(4));
}

#[test]
fn timer_ms_saturates() {
    assert_eq!(timer_ms(1_500), 1_500);
    assert_eq!(timer_ms(u64::MAX), u32::MAX);
}

#[tokio::test]
async fn native_build_reports_fetch_unavailable() {
    let transport = GlooTransport::new(ClientConfig::default());
    let err = transport.send(Request::get(session::transport::SESSION_STATUS_PATH)).await.unwrap_err();
    assert_eq!(err, TransportError::Unavailable("browser fetch"));
}
