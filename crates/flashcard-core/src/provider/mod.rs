//! Question-Answering Provider Strategy
//!
//! Defines the interface the generator uses to ask "what is the main point
//! of this text?" without knowing which backend answers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flashcard_core::{QaProvider, QaQuery};
//!
//! let provider = HuggingFaceProvider::from_config(config);
//! let answer = provider
//!     .answer(&QaQuery::new("What is the main point?", "Rust is fast"))
//!     .await?;
//! ```

mod mock;

pub use mock::{MockQaProvider, MockReply};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Extractive QA input: find the answer to `question` inside `context`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaQuery {
    pub question: String,
    pub context: String,
}

impl QaQuery {
    pub fn new(question: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: context.into(),
        }
    }
}

/// Extractive QA output
///
/// Every field is optional; providers answering `{}` are valid and simply
/// yield no answer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QaAnswer {
    /// The extracted span
    pub answer: Option<String>,

    /// Model confidence
    pub score: Option<f64>,

    /// Character offset of the span start in the context
    pub start: Option<u64>,

    /// Character offset of the span end in the context
    pub end: Option<u64>,
}

impl QaAnswer {
    pub fn text(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            ..Default::default()
        }
    }

    /// Read a provider reply field by field.
    ///
    /// A field with an unexpected type is treated as absent, so a reply whose
    /// `answer` is not a string has no answer rather than failing to decode.
    pub fn from_reply(reply: &Value) -> Self {
        Self {
            answer: reply.get("answer").and_then(Value::as_str).map(str::to_owned),
            score: reply.get("score").and_then(Value::as_f64),
            start: reply.get("start").and_then(Value::as_u64),
            end: reply.get("end").and_then(Value::as_u64),
        }
    }
}

/// Strategy trait for QA backends
///
/// Implementations report a non-2xx reply as `FlashcardError::UpstreamHttp`
/// and any failure to complete the call as `UpstreamUnavailable`; the
/// generator degrades each differently.
#[async_trait]
pub trait QaProvider: Send + Sync {
    /// Answer a single question against a single context
    async fn answer(&self, query: &QaQuery) -> Result<QaAnswer>;

    /// Provider name for logs and health output
    fn name(&self) -> &str;

    /// Whether credentials are present (absent ones surface as provider-side
    /// authorization failures, never as startup errors)
    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reply_fields_are_read() {
        let answer = QaAnswer::from_reply(&json!({
            "score": 0.91, "start": 0, "end": 4, "answer": "Rust"
        }));
        assert_eq!(answer.answer.as_deref(), Some("Rust"));
        assert_eq!(answer.score, Some(0.91));
        assert_eq!(answer.start, Some(0));
        assert_eq!(answer.end, Some(4));
    }

    #[test]
    fn test_non_string_answer_is_absent() {
        let answer = QaAnswer::from_reply(&json!({"answer": 42, "score": 0.5}));
        assert_eq!(answer.answer, None);
        assert_eq!(answer.score, Some(0.5));
    }

    #[test]
    fn test_odd_offsets_keep_the_answer() {
        let answer = QaAnswer::from_reply(&json!({"answer": "ok", "start": -1, "end": "x"}));
        assert_eq!(answer.answer.as_deref(), Some("ok"));
        assert_eq!(answer.start, None);
        assert_eq!(answer.end, None);
    }

    #[test]
    fn test_non_object_reply_has_no_answer() {
        assert_eq!(QaAnswer::from_reply(&json!("loading")), QaAnswer::default());
        assert_eq!(QaAnswer::from_reply(&Value::Null), QaAnswer::default());
    }
}
