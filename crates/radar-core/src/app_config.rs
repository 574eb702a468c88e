use std::net::SocketAddr;

use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub tavily_api_key: String,
    pub openai_api_key: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub locale: Locale,
    pub model: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    /// Overrides the Tavily endpoint; `None` means production.
    pub tavily_base_url: Option<String>,
    /// Overrides the chat-completions endpoint; `None` means production.
    pub openai_base_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("tavily_api_key", &"[redacted]")
            .field("openai_api_key", &"[redacted]")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("locale", &self.locale)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("tavily_base_url", &self.tavily_base_url)
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}
