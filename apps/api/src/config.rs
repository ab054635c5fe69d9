use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Constructed once at startup and carried in `AppState`; no globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key. Required; startup fails without it.
    pub groq_api_key: String,
    /// Model identifier sent with every completion request.
    pub groq_model: String,
    /// Sampling temperature for roast generation.
    pub model_temperature: f32,
    /// Completion length cap, in tokens.
    pub max_tokens: u32,
    /// Upload size cap in bytes; larger requests are refused outright.
    pub max_upload_bytes: usize,
    /// Resume text length cap in characters; longer text is truncated.
    pub max_resume_chars: usize,
    /// Timeout for a single completion call, in seconds.
    pub llm_timeout_secs: u64,
    /// Declared for deployment parity; not enforced anywhere yet.
    pub rate_limit_per_minute: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_model: env_or("GROQ_MODEL", "llama3-8b-8192"),
            model_temperature: parse_env("MODEL_TEMPERATURE", 0.7)?,
            max_tokens: parse_env("MAX_TOKENS", 1024)?,
            max_upload_bytes: parse_env("MAX_FILE_SIZE", 16 * 1024 * 1024)?,
            max_resume_chars: parse_env("MAX_RESUME_CHARS", 8000)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            rate_limit_per_minute: parse_env("RATE_LIMIT_PER_MINUTE", 10)?,
            port: parse_env("PORT", 5000)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
