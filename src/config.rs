/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV) と .env の取り込み
 * - 不正値は既定値に落とす (PORT が読めなければ 5000)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw
            .unwrap_or("development")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        Ok(Config { addr, app_env })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn port_defaults_to_5000_when_unset() {
        let config = config_with(&[]);
        assert_eq!(config.addr.port(), 5000);
        assert!(config.addr.ip().is_unspecified());
    }

    #[test]
    fn port_is_taken_from_env() {
        let config = config_with(&[("PORT", "8080")]);
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        for raw in ["", "abc", "-1", "70000", "80.5"] {
            let config = config_with(&[("PORT", raw)]);
            assert_eq!(config.addr.port(), DEFAULT_PORT, "PORT={raw:?}");
        }
    }

    #[test]
    fn port_tolerates_surrounding_whitespace() {
        let config = config_with(&[("PORT", " 6000\n")]);
        assert_eq!(config.addr.port(), 6000);
    }

    #[test]
    fn app_env_recognizes_production_aliases() {
        assert_eq!(
            config_with(&[("APP_ENV", "PROD")]).app_env,
            AppEnv::Production
        );
        assert_eq!(
            config_with(&[("APP_ENV", "production")]).app_env,
            AppEnv::Production
        );
        assert_eq!(
            config_with(&[("APP_ENV", "staging")]).app_env,
            AppEnv::Development
        );
        assert_eq!(config_with(&[]).app_env, AppEnv::Development);
    }
}
