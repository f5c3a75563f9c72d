//! # flashcard-core
//!
//! Turns pasted notes into question/answer flashcards by delegating each
//! text unit to a question-answering provider.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────┐   ". "    ┌─────────┐  per unit   ┌──────────────┐
//! │ Pasted text│──────────▶│  Units  │────────────▶│  QaProvider  │
//! └────────────┘   split   └─────────┘  in order   └──────┬───────┘
//!                                                         │
//!                          ┌──────────────────────────────▼───────┐
//!                          │ Flashcard { question, answer } × N   │
//!                          └──────────────────────────────────────┘
//! ```
//!
//! The `QaProvider` trait lets the generator run against Hugging Face, a
//! local mock, or any other extractive QA backend without code changes.

pub mod error;
pub mod flashcard;
pub mod generator;
pub mod provider;

pub use error::{FlashcardError, Result};
pub use flashcard::{requested_count, Flashcard, DEFAULT_CARD_COUNT};
pub use generator::{split_units, FlashcardGenerator, DEFAULT_PROMPT};
pub use provider::{MockQaProvider, MockReply, QaAnswer, QaProvider, QaQuery};
