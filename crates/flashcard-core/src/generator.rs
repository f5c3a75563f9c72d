//! Flashcard Generator
//!
//! Splits pasted text into units and asks the QA provider for the main point
//! of each one, strictly in input order.

use std::sync::Arc;

use crate::error::{FlashcardError, Result};
use crate::flashcard::Flashcard;
use crate::provider::{QaProvider, QaQuery};

/// Question asked of every unit
pub const DEFAULT_PROMPT: &str = "What is the main point?";

/// Literal unit separator. Deliberately naive: abbreviations, decimals and
/// other punctuation are not treated specially.
const UNIT_SEPARATOR: &str = ". ";

/// Characters of the unit kept in a synthesized question
const QUESTION_PREVIEW_CHARS: usize = 50;

const NOT_FOUND_ANSWER: &str = "Not found";
const PROVIDER_ERROR_ANSWER: &str = "Error from QA provider";
const REQUEST_ERROR_ANSWER: &str = "Error processing request";

/// Split text into units on the literal `". "` separator
pub fn split_units(text: &str) -> Vec<&str> {
    text.split(UNIT_SEPARATOR).collect()
}

/// Generates flashcards through a [`QaProvider`]
#[derive(Clone)]
pub struct FlashcardGenerator {
    provider: Arc<dyn QaProvider>,
}

impl FlashcardGenerator {
    pub fn new(provider: Arc<dyn QaProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn QaProvider> {
        &self.provider
    }

    /// Build up to `count` flashcards from `text`.
    ///
    /// Returns exactly `min(count, split_units(text).len())` cards in input
    /// order. A failing unit becomes a placeholder card; it never aborts the
    /// batch. Only empty text is an error.
    pub async fn generate(&self, text: &str, count: usize) -> Result<Vec<Flashcard>> {
        if text.trim().is_empty() {
            return Err(FlashcardError::InvalidInput("No text provided".into()));
        }

        let units = split_units(text);
        let take = count.min(units.len());
        let mut cards = Vec::with_capacity(take);

        for (index, unit) in units.into_iter().take(take).enumerate() {
            cards.push(self.card_for(index, unit).await);
        }

        tracing::info!(
            provider = self.provider.name(),
            requested = count,
            generated = cards.len(),
            "Generated flashcards"
        );

        Ok(cards)
    }

    async fn card_for(&self, index: usize, unit: &str) -> Flashcard {
        let query = QaQuery::new(DEFAULT_PROMPT, unit);
        let trimmed = unit.trim();

        match self.provider.answer(&query).await {
            Ok(reply) => Flashcard::new(
                summary_question(index, trimmed),
                reply.answer.unwrap_or_else(|| NOT_FOUND_ANSWER.into()),
            ),
            Err(e) if e.is_upstream_http() => {
                tracing::warn!(unit = index + 1, "QA provider rejected unit: {}", e);
                Flashcard::new(trimmed, PROVIDER_ERROR_ANSWER)
            }
            Err(e) => {
                tracing::warn!(unit = index + 1, "QA request failed: {}", e);
                Flashcard::new(trimmed, REQUEST_ERROR_ANSWER)
            }
        }
    }
}

/// `Q{n}: {first 50 chars}?`
fn summary_question(index: usize, trimmed_unit: &str) -> String {
    let preview: String = trimmed_unit.chars().take(QUESTION_PREVIEW_CHARS).collect();
    format!("Q{}: {}?", index + 1, preview)
}
