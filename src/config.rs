// ABOUTME: Runtime configuration for the two pipelines - provider selection,
// ABOUTME: credentials and sampling defaults, read from the environment.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ConfigError, LlmError};
use crate::llm::{
    CompletionClient, CompletionOptions, DEFAULT_TIMEOUT, GeminiClient, LM_STUDIO_BASE_URL,
    LlmClient, OPENAI_BASE_URL, OpenAIClient,
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Model name LM Studio accepts for whatever model is loaded.
pub const LOCAL_MODEL: &str = "local-model";

/// Hosted provider used by the reasoning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Gemini,
    OpenAI,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAI => "openai",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => DEFAULT_GEMINI_MODEL,
            Provider::OpenAI => DEFAULT_OPENAI_MODEL,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAI),
            other => Err(ConfigError::Invalid {
                key: "RECKON_PROVIDER".to_string(),
                message: format!("unknown provider '{}', expected gemini or openai", other),
            }),
        }
    }
}

/// Settings for the tool-reasoning pipeline.
#[derive(Clone)]
pub struct ReasonerConfig {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for ReasonerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReasonerConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ReasonerConfig {
    /// Read configuration from process environment variables.
    ///
    /// * `RECKON_PROVIDER`: `gemini` (default) or `openai`
    /// * `GEMINI_API_KEY` (falling back to `GOOGLE_API_KEY`) or `OPENAI_API_KEY`
    /// * `RECKON_MODEL`: overrides the provider's default model
    /// * `GEMINI_BASE_URL` / `OPENAI_BASE_URL`: override the endpoint
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through `lookup`.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match var("RECKON_PROVIDER") {
            Some(name) => name.parse()?,
            None => Provider::default(),
        };

        let (api_key, base_url) = match provider {
            Provider::Gemini => {
                let key = var("GEMINI_API_KEY")
                    .or_else(|| var("GOOGLE_API_KEY"))
                    .ok_or_else(|| ConfigError::MissingCredential("GEMINI_API_KEY".into()))?;
                (key, var("GEMINI_BASE_URL"))
            }
            Provider::OpenAI => {
                let key = var("OPENAI_API_KEY")
                    .ok_or_else(|| ConfigError::MissingCredential("OPENAI_API_KEY".into()))?;
                (key, var("OPENAI_BASE_URL"))
            }
        };

        Ok(Self {
            provider,
            api_key,
            model: var("RECKON_MODEL").unwrap_or_else(|| provider.default_model().to_string()),
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Build the provider client this configuration names.
    pub fn build_client(&self) -> Result<Arc<dyn LlmClient>, LlmError> {
        let client: Arc<dyn LlmClient> = match self.provider {
            Provider::Gemini => {
                let client = GeminiClient::with_timeout(self.api_key.clone(), self.timeout)?;
                match &self.base_url {
                    Some(url) => Arc::new(client.with_base_url(url.clone())),
                    None => Arc::new(client),
                }
            }
            Provider::OpenAI => {
                let base_url = self.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);
                Arc::new(
                    OpenAIClient::with_timeout(base_url, self.timeout)?
                        .with_api_key(self.api_key.clone()),
                )
            }
        };
        Ok(client)
    }

    pub fn completion_client(&self) -> Result<CompletionClient, LlmError> {
        Ok(CompletionClient::new(self.build_client()?, self.model.clone()))
    }
}

/// Settings for the model comparator.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparatorConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            base_url: LM_STUDIO_BASE_URL.to_string(),
            model: LOCAL_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ComparatorConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn options(&self) -> CompletionOptions {
        CompletionOptions::new(self.temperature, self.max_tokens)
    }

    /// A completion client pointed at the local server.
    pub fn completion_client(&self) -> Result<CompletionClient, LlmError> {
        let client = OpenAIClient::with_timeout(self.base_url.clone(), self.timeout)?;
        Ok(CompletionClient::new(Arc::new(client), self.model.clone()))
    }
}
