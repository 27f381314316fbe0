/// Gemini connection settings loaded from environment variables.
///
/// All fields except the API key have defaults suitable for the hosted
/// API; override via environment variables where needed.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL (default: `https://generativelanguage.googleapis.com`).
    pub base_url: String,
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// Model used for concept images (default: `gemini-2.5-flash-image`).
    pub image_model: String,
    /// Model used for specification sheets (default: `gemini-2.5-flash`).
    pub text_model: String,
    /// Per-request timeout in seconds (default: `120`). A timed-out call
    /// takes the same path as a failed one, so a hung upstream can never
    /// pin the studio in its generating state.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                                        |
    /// |---------------------------|------------------------------------------------|
    /// | `GEMINI_API_KEY`          | (required)                                     |
    /// | `GEMINI_BASE_URL`         | `https://generativelanguage.googleapis.com`    |
    /// | `GEMINI_IMAGE_MODEL`      | `gemini-2.5-flash-image`                       |
    /// | `GEMINI_TEXT_MODEL`       | `gemini-2.5-flash`                             |
    /// | `GENERATION_TIMEOUT_SECS` | `120`                                          |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into());

        let image_model = std::env::var("GEMINI_IMAGE_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-image".into());

        let text_model =
            std::env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into());

        let timeout_secs: u64 = std::env::var("GENERATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("GENERATION_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            api_key,
            image_model,
            text_model,
            timeout_secs,
        }
    }
}
