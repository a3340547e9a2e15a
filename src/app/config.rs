use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_PAYMENT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub allowed_origin: String,
    pub payment_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unparseable values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            allowed_origin: lookup("ALLOWED_ORIGIN")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            payment_delay_ms: lookup("PAYMENT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAYMENT_DELAY_MS),
        }
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            payment_delay_ms: DEFAULT_PAYMENT_DELAY_MS,
        }
    }
}
