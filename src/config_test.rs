use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.environment, DEFAULT_ENVIRONMENT);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("APP_ENV", "production"),
    ]))
    .unwrap();
    assert_eq!(cfg, ServerConfig { host: "127.0.0.1".into(), port: 8080, environment: "production".into() });
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("APP_ENV", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.environment, DEFAULT_ENVIRONMENT);
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
    assert_eq!(err.to_string(), "invalid PORT: 70000");
}

#[test]
fn bind_addr_combines_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "4100")])).unwrap();
    assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:4100");
}

#[test]
fn bind_addr_rejects_hostnames() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap();
    assert_eq!(
        cfg.bind_addr().unwrap_err(),
        ConfigError::InvalidAddr { host: "localhost".into(), port: DEFAULT_PORT }
    );
}
