//! Application Configuration
//!
//! Read once at startup and shared read-only afterwards.

use std::{env, path::PathBuf, str::FromStr};

use anyhow::bail;
use flashcard_payments::IntaSendConfig;
use flashcard_runtime::HuggingFaceConfig;

/// Which QA backend answers flashcard questions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QaBackend {
    /// Hosted Hugging Face inference
    HuggingFace,
    /// In-process echo provider for offline demos
    Mock,
}

impl FromStr for QaBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Self::HuggingFace),
            "mock" => Ok(Self::Mock),
            other => bail!("unknown QA_PROVIDER '{other}' (expected 'huggingface' or 'mock')"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Listen address
    pub bind_addr: String,

    /// Externally visible origin, used for default checkout redirect URLs
    pub public_base_url: String,

    /// Directory holding the built frontend
    pub static_dir: PathBuf,

    pub qa_backend: QaBackend,
    pub huggingface: HuggingFaceConfig,
    pub intasend: IntaSendConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            public_base_url: "http://localhost:3000".into(),
            static_dir: PathBuf::from("static"),
            qa_backend: QaBackend::HuggingFace,
            huggingface: HuggingFaceConfig::default(),
            intasend: IntaSendConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build from environment variables. Call after `.env` is loaded.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let qa_backend = match env::var("QA_PROVIDER") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.qa_backend,
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or(defaults.public_base_url),
            static_dir: env::var("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            qa_backend,
            huggingface: HuggingFaceConfig::from_env(),
            intasend: IntaSendConfig::from_env(),
        })
    }

    /// Absolute URL of one of our own pages
    pub fn page_url(&self, page: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.qa_backend, QaBackend::HuggingFace);
        assert_eq!(config.intasend.default_currency, "KES");
    }

    #[test]
    fn test_page_url() {
        let config = AppConfig {
            public_base_url: "https://cards.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.page_url("success"), "https://cards.example.com/success");
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("HuggingFace".parse::<QaBackend>().unwrap(), QaBackend::HuggingFace);
        assert_eq!(" mock ".parse::<QaBackend>().unwrap(), QaBackend::Mock);
        assert!("openai".parse::<QaBackend>().is_err());
    }
}
