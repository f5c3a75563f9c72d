//! # flashcard-runtime
//!
//! Question-answering providers for the flashcard generator.
//!
//! ## Providers
//!
//! - **Hugging Face** (default): hosted extractive QA inference
//!   (`deepset/roberta-base-squad2` unless configured otherwise)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flashcard_runtime::{HuggingFaceConfig, HuggingFaceProvider};
//!
//! let provider = HuggingFaceProvider::from_config(HuggingFaceConfig::from_env());
//! let generator = FlashcardGenerator::new(Arc::new(provider));
//! ```

#[cfg(feature = "huggingface")]
pub mod huggingface;

#[cfg(feature = "huggingface")]
pub use huggingface::{HuggingFaceConfig, HuggingFaceProvider};

// Re-export core types for convenience
pub use flashcard_core::{
    Flashcard, FlashcardError, FlashcardGenerator, MockQaProvider, QaAnswer, QaProvider, QaQuery,
    Result,
};
