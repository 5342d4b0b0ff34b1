use crate::app_config::{AppConfig, Environment};
use crate::credential::Credential;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
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
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
/// A missing `GIPHY_API_KEY` is not an error: it puts the service in demo mode.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("GIFMOOD_ENV", "development"))?;
    let bind_addr = parse_addr("GIFMOOD_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("GIFMOOD_LOG_LEVEL", "info");

    let giphy_api_key = Credential::new(lookup("GIPHY_API_KEY").ok());
    let giphy_base_url = or_default("GIPHY_BASE_URL", "https://api.giphy.com/v1/gifs");
    let giphy_timeout_secs = parse_u64("GIFMOOD_GIPHY_TIMEOUT_SECS", "30")?;
    if giphy_timeout_secs == 0 {
        return Err(invalid(
            "GIFMOOD_GIPHY_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }
    let giphy_rating = or_default("GIFMOOD_GIPHY_RATING", "pg-13");
    let giphy_lang = or_default("GIFMOOD_GIPHY_LANG", "en");
    let user_agent = or_default("GIFMOOD_USER_AGENT", "gifmood/0.1 (reaction-picker)");

    let cors_origins = parse_list(&or_default(
        "GIFMOOD_CORS_ORIGINS",
        "http://localhost:3000,http://127.0.0.1:3000",
    ));
    let rate_limit_per_minute = parse_usize("GIFMOOD_RATE_LIMIT_PER_MINUTE", "120")?;
    if rate_limit_per_minute == 0 {
        return Err(invalid(
            "GIFMOOD_RATE_LIMIT_PER_MINUTE",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        giphy_api_key,
        giphy_base_url,
        giphy_timeout_secs,
        giphy_rating,
        giphy_lang,
        user_agent,
        cors_origins,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GIFMOOD_ENV".to_string(),
            reason: format!("expected development, test or production, got {other:?}"),
        }),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
