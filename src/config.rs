use std::env;

pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub chat_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

        let chat_url = env::var("OPENAI_CHAT_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string());

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

        let timeout_ms = env::var("OPENAI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30_000);

        Self {
            port,
            api_key,
            chat_url,
            model,
            timeout_ms,
        }
    }
}
