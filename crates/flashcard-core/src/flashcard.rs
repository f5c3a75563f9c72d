//! Flashcard Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of cards produced when the client does not ask for a specific count
pub const DEFAULT_CARD_COUNT: usize = 5;

/// A question/answer pair shown to the user, revealed on click
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Interpret the client-supplied card count.
///
/// Absent or `null` means [`DEFAULT_CARD_COUNT`]. Positive integers (or
/// strings holding one) are taken as-is, positive fractions are truncated.
/// Everything else, including zero, negatives and non-numeric values,
/// yields zero cards.
pub fn requested_count(raw: Option<&Value>) -> usize {
    match raw {
        None | Some(Value::Null) => DEFAULT_CARD_COUNT,
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_u64() {
                usize::try_from(v).unwrap_or(usize::MAX)
            } else {
                n.as_f64().map_or(0, truncate_positive)
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>()
                .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
                .or_else(|_| s.parse::<f64>().map(truncate_positive))
                .unwrap_or(0)
        }
        Some(_) => 0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_positive(v: f64) -> usize {
    if v.is_finite() && v >= 1.0 {
        v.trunc() as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_count_defaults() {
        assert_eq!(requested_count(None), 5);
        assert_eq!(requested_count(Some(&Value::Null)), 5);
    }

    #[test]
    fn test_positive_counts() {
        assert_eq!(requested_count(Some(&json!(3))), 3);
        assert_eq!(requested_count(Some(&json!("7"))), 7);
        assert_eq!(requested_count(Some(&json!(2.9))), 2);
    }

    #[test]
    fn test_non_positive_or_garbage_counts_yield_zero() {
        assert_eq!(requested_count(Some(&json!(0))), 0);
        assert_eq!(requested_count(Some(&json!(-4))), 0);
        assert_eq!(requested_count(Some(&json!(0.5))), 0);
        assert_eq!(requested_count(Some(&json!("lots"))), 0);
        assert_eq!(requested_count(Some(&json!(true))), 0);
        assert_eq!(requested_count(Some(&json!([1, 2]))), 0);
    }

    #[test]
    fn test_flashcard_serializes_flat() {
        let card = Flashcard::new("Q1: Rust?", "A language");
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value, json!({"question": "Q1: Rust?", "answer": "A language"}));
    }
}
