use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid values.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("TAVILY_API_KEY", "tvly-test");
    m.insert("OPENAI_API_KEY", "sk-test");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "RADAR_ENV"));
}

#[test]
fn build_app_config_fails_without_tavily_key() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("OPENAI_API_KEY", "sk-test");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TAVILY_API_KEY"),
        "expected MissingEnvVar(TAVILY_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_openai_key() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("TAVILY_API_KEY", "tvly-test");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "OPENAI_API_KEY"),
        "expected MissingEnvVar(OPENAI_API_KEY), got: {result:?}"
    );
}

#[test]
fn blank_api_key_counts_as_missing() {
    let mut map = full_env();
    map.insert("OPENAI_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "OPENAI_API_KEY"),
        "expected MissingEnvVar(OPENAI_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.tavily_api_key, "tvly-test");
    assert_eq!(cfg.openai_api_key, "sk-test");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.locale, Locale::Ja);
    assert_eq!(cfg.model, "gpt-4o");
    assert!((cfg.temperature - 0.3).abs() < f32::EPSILON);
    assert_eq!(cfg.request_timeout_secs, 60);
    assert!(cfg.tavily_base_url.is_none());
    assert!(cfg.openai_base_url.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("RADAR_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RADAR_BIND_ADDR"),
        "expected InvalidEnvVar(RADAR_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn locale_override() {
    let mut map = full_env();
    map.insert("RADAR_LOCALE", "en");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.locale, Locale::En);
}

#[test]
fn locale_invalid() {
    let mut map = full_env();
    map.insert("RADAR_LOCALE", "klingon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RADAR_LOCALE"),
        "expected InvalidEnvVar(RADAR_LOCALE), got: {result:?}"
    );
}

#[test]
fn model_override() {
    let mut map = full_env();
    map.insert("RADAR_MODEL", "gpt-4o-mini");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.model, "gpt-4o-mini");
}

#[test]
fn model_blank_is_invalid() {
    let mut map = full_env();
    map.insert("RADAR_MODEL", "");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RADAR_MODEL"),
        "expected InvalidEnvVar(RADAR_MODEL), got: {result:?}"
    );
}

#[test]
fn temperature_not_a_number() {
    let mut map = full_env();
    map.insert("RADAR_TEMPERATURE", "warm");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RADAR_TEMPERATURE"),
        "expected InvalidEnvVar(RADAR_TEMPERATURE), got: {result:?}"
    );
}

#[test]
fn temperature_out_of_range() {
    let mut map = full_env();
    map.insert("RADAR_TEMPERATURE", "3.5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RADAR_TEMPERATURE"),
        "expected InvalidEnvVar(RADAR_TEMPERATURE), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_override() {
    let mut map = full_env();
    map.insert("RADAR_REQUEST_TIMEOUT_SECS", "120");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 120);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("RADAR_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RADAR_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(RADAR_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_invalid() {
    let mut map = full_env();
    map.insert("RADAR_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RADAR_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(RADAR_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn base_url_overrides_are_passed_through() {
    let mut map = full_env();
    map.insert("RADAR_TAVILY_BASE_URL", "http://localhost:9001");
    map.insert("RADAR_OPENAI_BASE_URL", "http://localhost:9002");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.tavily_base_url.as_deref(), Some("http://localhost:9001"));
    assert_eq!(cfg.openai_base_url.as_deref(), Some("http://localhost:9002"));
}

#[test]
fn debug_output_redacts_api_keys() {
    let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("tvly-test"), "tavily key leaked: {debug}");
    assert!(!debug.contains("sk-test"), "openai key leaked: {debug}");
    assert!(debug.contains("[redacted]"));
}
