use dotenv::dotenv;
use once_cell::sync::Lazy;
use reqwest::Url;
use std::env;

pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` runs the server over the in-memory demo rows.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,
    pub log_level: String,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("db_max_connections", &self.db_max_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(5000),
            database_url: lookup("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .or_else(|| database_url_from_parts(&lookup)),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            db_acquire_timeout_secs: lookup("DB_ACQUIRE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .filter(|origins| !origins.is_empty())
                .unwrap_or_else(|| vec!["*".to_string()]),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

// DB_HOST gates the whole group; the rest fall back to the compose defaults.
fn database_url_from_parts<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST").filter(|v| !v.trim().is_empty())?;
    let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let port: u16 = lookup("DB_PORT").and_then(|v| v.parse().ok()).unwrap_or(5432);
    let name = lookup("DB_NAME").unwrap_or_else(|| "users".to_string());

    // The setters percent-encode, so reserved characters in credentials stay in userinfo.
    let mut url = Url::parse(&format!("postgres://{}:{}", host, port)).ok()?;
    url.set_username(&user).ok()?;
    if !password.is_empty() {
        url.set_password(Some(&password)).ok()?;
    }
    url.set_path(&name);
    Some(url.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
