use crate::app_config::{AppConfig, Environment};
use crate::locale::Locale;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the process environment so tests
/// can drive them with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let tavily_api_key = require("TAVILY_API_KEY")?;
    let openai_api_key = require("OPENAI_API_KEY")?;

    let env = parse_environment(&or_default("RADAR_ENV", "development"))?;

    let bind_addr = or_default("RADAR_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("RADAR_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("RADAR_LOG_LEVEL", "info");

    let locale = or_default("RADAR_LOCALE", "ja")
        .parse::<Locale>()
        .map_err(|e| invalid("RADAR_LOCALE", e.to_string()))?;

    let model = or_default("RADAR_MODEL", "gpt-4o");
    if model.trim().is_empty() {
        return Err(invalid("RADAR_MODEL", "model name must not be empty".to_string()));
    }

    let temperature = or_default("RADAR_TEMPERATURE", "0.3")
        .parse::<f32>()
        .map_err(|e| invalid("RADAR_TEMPERATURE", e.to_string()))?;
    if !(0.0..=2.0).contains(&temperature) {
        return Err(invalid(
            "RADAR_TEMPERATURE",
            format!("{temperature} is outside 0.0..=2.0"),
        ));
    }

    let request_timeout_secs = or_default("RADAR_REQUEST_TIMEOUT_SECS", "60")
        .parse::<u64>()
        .map_err(|e| invalid("RADAR_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "RADAR_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let tavily_base_url = lookup("RADAR_TAVILY_BASE_URL").ok();
    let openai_base_url = lookup("RADAR_OPENAI_BASE_URL").ok();

    Ok(AppConfig {
        tavily_api_key,
        openai_api_key,
        env,
        bind_addr,
        log_level,
        locale,
        model,
        temperature,
        request_timeout_secs,
        tavily_base_url,
        openai_base_url,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RADAR_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
