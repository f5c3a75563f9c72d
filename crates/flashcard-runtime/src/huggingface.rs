//! Hugging Face QA Provider
//!
//! Implementation of `QaProvider` for the hosted inference API.

use async_trait::async_trait;
use flashcard_core::{
    error::{FlashcardError, Result},
    provider::{QaAnswer, QaProvider, QaQuery},
};
use serde::Serialize;
use serde_json::Value;

/// Default extractive QA model endpoint
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/deepset/roberta-base-squad2";

/// Hugging Face provider configuration
#[derive(Clone, Debug)]
pub struct HuggingFaceConfig {
    /// Full model inference URL
    pub api_url: String,

    /// API token, sent as a bearer credential
    pub api_key: Option<String>,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            api_key: None,
        }
    }
}

impl HuggingFaceConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("HF_API_URL").ok(),
            std::env::var("HF_API_KEY").ok(),
        )
    }

    /// Build from raw variable values; empty values count as unset
    fn from_values(api_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }
}

/// Inference request body: `{"inputs": {"question", "context"}}`
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a QaQuery,
}

/// Hugging Face inference provider
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceProvider {
    /// Create from configuration
    pub fn from_config(config: HuggingFaceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Some pipelines wrap the answer in a one-element list
    fn parse_answer(body: &str) -> Result<QaAnswer> {
        let value: Value = serde_json::from_str(body)?;
        let value = match value {
            Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
            other => other,
        };

        Ok(QaAnswer::from_reply(&value))
    }
}

#[async_trait]
impl QaProvider for HuggingFaceProvider {
    async fn answer(&self, query: &QaQuery) -> Result<QaAnswer> {
        let mut request = self
            .client
            .post(&self.config.api_url)
            .json(&InferenceRequest { inputs: query });

        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FlashcardError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FlashcardError::UpstreamUnavailable(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Hugging Face returned an error");
            return Err(FlashcardError::UpstreamHttp {
                status: status.as_u16(),
                body,
            });
        }

        Self::parse_answer(&body)
    }

    fn name(&self) -> &str {
        "HuggingFace"
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
