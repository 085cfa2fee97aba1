//! Application configuration
//!
//! All configuration comes from environment variables (optionally via a
//! `.env` file loaded in `main`) and is read once at startup into an
//! explicit [`AppConfig`] that is passed to the runtime. No global state.

use std::env;

/// Logging settings
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. "info" or "snaplink=debug"
    pub level: String,
    /// Log file path; empty means stdout
    pub file: Option<String>,
    /// "json" or plain text
    pub format: String,
}

/// Server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Externally visible base of every short link (scheme + host)
    pub public_base_url: String,
    /// Where an empty redirect path is sent
    pub default_url: String,
    /// Request quota enforced upstream of all routes: one token replenished
    /// every `rate_limit_replenish_secs`, bucket capped at `rate_limit_burst`
    pub rate_limit_replenish_secs: u64,
    pub rate_limit_burst: u32,
}

/// Storage and sweeper settings
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Backing JSON document, relative to the working directory
    pub data_file: String,
    pub sweep_interval_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Unset or unparsable variables fall back to their defaults; the only
    /// variable most deployments set is `PORT`.
    pub fn from_env() -> Self {
        let host = env_or("SERVER_HOST", "127.0.0.1");
        let port: u16 = env_parse_or("PORT", 3001);

        // 未显式配置时从监听地址推导
        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));
        let public_base_url = public_base_url.trim_end_matches('/').to_string();

        AppConfig {
            server: ServerConfig {
                host,
                port,
                public_base_url,
                default_url: env_or("DEFAULT_URL", "https://esap.cc/repo"),
                rate_limit_replenish_secs: env_parse_or("RATE_LIMIT_REPLENISH_SECS", 1),
                rate_limit_burst: env_parse_or("RATE_LIMIT_BURST", 50),
            },
            storage: StorageConfig {
                data_file: env_or("DATA_FILE", "data/urls.json"),
                sweep_interval_secs: env_parse_or("SWEEP_INTERVAL_SECS", 3600),
            },
            logging: LoggingConfig {
                level: env_or("LOG_LEVEL", "info"),
                file: env::var("LOG_FILE").ok().filter(|f| !f.is_empty()),
                format: env_or("LOG_FORMAT", "plain"),
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // 测试进程内不依赖环境变量的默认值路径
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 3001,
                public_base_url: "http://localhost:3001".into(),
                default_url: "https://esap.cc/repo".into(),
                rate_limit_replenish_secs: 1,
                rate_limit_burst: 50,
            },
            storage: StorageConfig {
                data_file: "data/urls.json".into(),
                sweep_interval_secs: 3600,
            },
            logging: LoggingConfig {
                level: "info".into(),
                file: None,
                format: "plain".into(),
            },
        };
        assert_eq!(config.bind_address(), "127.0.0.1:3001");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        // from_env 会读取进程环境，这里只验证 trim 约定
        let trimmed = "http://sn.ap/".trim_end_matches('/');
        assert_eq!(trimmed, "http://sn.ap");
    }
}
