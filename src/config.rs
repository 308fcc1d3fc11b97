use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Base address of the property-management backend.
    pub backend_url: String,
    pub backend_timeout: Option<Duration>,
    pub secure_cookies: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = var_or("RENTDESK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid RENTDESK_HOST: {e}"))?;

        let port: u16 = var_or("RENTDESK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid RENTDESK_PORT: {e}"))?;

        let backend_url = var_or("RENTDESK_BACKEND_URL", "http://localhost:8000");
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(format!(
                "Invalid RENTDESK_BACKEND_URL: expected an http(s) URL, got '{backend_url}'"
            ));
        }

        let backend_timeout = match lookup("RENTDESK_BACKEND_TIMEOUT_SECS") {
            Some(secs) if !secs.trim().is_empty() => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .map_err(|e| format!("Invalid RENTDESK_BACKEND_TIMEOUT_SECS: {e}"))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            _ => None,
        };

        let secure_cookies = match var_or("RENTDESK_SECURE_COOKIES", "false").as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => return Err(format!("Invalid RENTDESK_SECURE_COOKIES: '{other}'")),
        };

        let log_level = var_or("RENTDESK_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            backend_url,
            backend_timeout,
            secure_cookies,
            log_level,
        })
    }
}
