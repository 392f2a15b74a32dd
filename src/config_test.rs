use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("CCI_API_URL", "https://example.test/api/"),
        ("SITE_ROOT", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://example.test/api");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn from_lookup_blank_values_use_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " "), ("CCI_API_URL", ""), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_lookup_slash_only_api_url_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("CCI_API_URL", "///")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "CCI_API_URL", .. }));
}
