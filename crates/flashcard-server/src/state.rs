//! Application State

use std::sync::Arc;

use flashcard_core::{FlashcardGenerator, MockQaProvider, QaProvider};
use flashcard_payments::{CheckoutProvider, IntaSendClient};
use flashcard_runtime::HuggingFaceProvider;

use crate::config::{AppConfig, QaBackend};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Flashcard generator over the configured QA provider
    pub generator: FlashcardGenerator,

    /// Checkout provider (IntaSend, or a stub in tests)
    pub checkout: Arc<dyn CheckoutProvider>,

    /// Immutable startup configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn QaProvider>,
        checkout: Arc<dyn CheckoutProvider>,
    ) -> Self {
        Self {
            generator: FlashcardGenerator::new(provider),
            checkout,
            config: Arc::new(config),
        }
    }

    /// Wire the real providers named by the configuration
    pub fn from_config(config: AppConfig) -> Self {
        let provider: Arc<dyn QaProvider> = match config.qa_backend {
            QaBackend::HuggingFace => {
                Arc::new(HuggingFaceProvider::from_config(config.huggingface.clone()))
            }
            QaBackend::Mock => Arc::new(MockQaProvider::new()),
        };
        let checkout = Arc::new(IntaSendClient::new(config.intasend.clone()));

        Self::new(config, provider, checkout)
    }
}
