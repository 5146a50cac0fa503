use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        AppConfig {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    );
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("PORT", "8081"),
        ("BACKEND_URL", "https://horses.example.test/api/"),
        ("PROXY_TIMEOUT_SECS", "5"),
        ("PROXY_MAX_BODY_BYTES", "1024"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.backend_url, "https://horses.example.test/api");
    assert_eq!(cfg.proxy_timeout_secs, 5);
    assert_eq!(cfg.max_body_bytes, 1024);
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn from_lookup_rejects_unparsable_port() {
    let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = AppConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_non_http_backend() {
    let err = AppConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:8080")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendUrl("localhost:8080".to_owned()));
}
