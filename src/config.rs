use std::env;

/// Runtime configuration, loaded once at startup. The Gemini credential is
/// never compiled in; an empty key is allowed here and reported as an error
/// on the first analyze call instead of aborting the process.
pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout_ms: u64,
    pub history_capacity: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        let gemini_base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        let timeout_ms = env::var("GEMINI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(20_000);

        let history_capacity = env::var("HISTORY_CAPACITY")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(256);

        Self {
            port,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            timeout_ms,
            history_capacity,
        }
    }
}
