//! Mock QA Provider
//!
//! For tests and offline demos. Echoes the context back as the answer unless
//! a scripted rule matches. Only a provider built with
//! [`MockQaProvider::recording`] keeps a log of the queries it receives.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{QaAnswer, QaProvider, QaQuery};
use crate::error::{FlashcardError, Result};

/// Scripted reply for contexts containing a given needle
#[derive(Clone, Debug)]
pub enum MockReply {
    /// Answer with this text
    Answer(String),
    /// Reply `{}`
    NoAnswer,
    /// Reply with a non-2xx status
    HttpError(u16),
    /// Fail as if the network dropped
    Unavailable,
}

/// Mock provider with per-context scripted replies
#[derive(Default)]
pub struct MockQaProvider {
    rules: Vec<(String, MockReply)>,
    calls: Option<Mutex<Vec<QaQuery>>>,
}

impl MockQaProvider {
    /// Stateless provider, safe to serve for the life of the process
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that records every query, for assertions in tests
    pub fn recording() -> Self {
        Self {
            calls: Some(Mutex::new(Vec::new())),
            ..Self::default()
        }
    }

    /// Reply with `reply` whenever the context contains `needle`.
    /// Rules are checked in insertion order.
    #[must_use]
    pub fn on(mut self, needle: impl Into<String>, reply: MockReply) -> Self {
        self.rules.push((needle.into(), reply));
        self
    }

    /// Queries received so far, in call order. Always empty unless built
    /// with [`MockQaProvider::recording`].
    pub async fn calls(&self) -> Vec<QaQuery> {
        match &self.calls {
            Some(calls) => calls.lock().await.clone(),
            None => Vec::new(),
        }
    }

    fn reply_for(&self, context: &str) -> Option<&MockReply> {
        self.rules
            .iter()
            .find(|(needle, _)| context.contains(needle.as_str()))
            .map(|(_, reply)| reply)
    }
}

#[async_trait]
impl QaProvider for MockQaProvider {
    async fn answer(&self, query: &QaQuery) -> Result<QaAnswer> {
        if let Some(calls) = &self.calls {
            calls.lock().await.push(query.clone());
        }

        match self.reply_for(&query.context) {
            Some(MockReply::Answer(text)) => Ok(QaAnswer::text(text.clone())),
            Some(MockReply::NoAnswer) => Ok(QaAnswer::default()),
            Some(MockReply::HttpError(status)) => Err(FlashcardError::UpstreamHttp {
                status: *status,
                body: "mock provider error".into(),
            }),
            Some(MockReply::Unavailable) => Err(FlashcardError::UpstreamUnavailable(
                "mock provider unreachable".into(),
            )),
            None => Ok(QaAnswer::text(query.context.trim())),
        }
    }

    fn name(&self) -> &str {
        "MockQA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echoes_context() {
        let provider = MockQaProvider::new();
        let answer = provider
            .answer(&QaQuery::new("What is the main point?", "  Rust is fast "))
            .await
            .unwrap();
        assert_eq!(answer.answer.as_deref(), Some("Rust is fast"));
    }

    #[tokio::test]
    async fn test_mock_rules_and_call_log() {
        let provider = MockQaProvider::recording()
            .on("down", MockReply::Unavailable)
            .on("teapot", MockReply::HttpError(418));

        assert!(matches!(
            provider.answer(&QaQuery::new("q", "network is down")).await,
            Err(FlashcardError::UpstreamUnavailable(_))
        ));
        assert!(matches!(
            provider.answer(&QaQuery::new("q", "a teapot")).await,
            Err(FlashcardError::UpstreamHttp { status: 418, .. })
        ));

        let calls = provider.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].context, "a teapot");
    }

    #[tokio::test]
    async fn test_plain_mock_keeps_no_history() {
        let provider = MockQaProvider::new().on("down", MockReply::Unavailable);

        for i in 0..1_000 {
            let context = format!("unit {i}");
            provider.answer(&QaQuery::new("q", context)).await.unwrap();
        }
        let _ = provider.answer(&QaQuery::new("q", "network is down")).await;

        assert!(provider.calls.is_none());
        assert!(provider.calls().await.is_empty());
    }
}
