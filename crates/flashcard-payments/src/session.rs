//! Checkout Session Normalization
//!
//! Providers nest the hosted-page URL differently. Knowledge of where to look
//! lives here and nowhere else.

use serde_json::Value;

/// Locations probed for the redirect URL, in order
const REDIRECT_POINTERS: [&str; 4] = ["/url", "/checkout_url", "/data/url", "/data/checkout_url"];

/// Field added to the relayed provider body
const REDIRECT_FIELD: &str = "redirect_url";

/// Result of creating a checkout session
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutSession {
    /// URL to send the user to, when the provider gave one
    pub redirect_url: Option<String>,

    /// Provider response body, untouched
    pub raw: Value,
}

impl CheckoutSession {
    pub fn from_provider(raw: Value) -> Self {
        Self {
            redirect_url: redirect_url_from(&raw),
            raw,
        }
    }

    /// Provider body with the normalized `redirect_url` added alongside the
    /// provider's own fields. Existing fields are never overwritten.
    pub fn into_client_body(self) -> Value {
        match (self.raw, self.redirect_url) {
            (Value::Object(mut map), Some(url)) => {
                map.entry(REDIRECT_FIELD).or_insert(Value::String(url));
                Value::Object(map)
            }
            (raw, _) => raw,
        }
    }
}

/// Find the hosted checkout URL in a provider response
pub fn redirect_url_from(raw: &Value) -> Option<String> {
    REDIRECT_POINTERS
        .iter()
        .find_map(|pointer| raw.pointer(pointer).and_then(Value::as_str))
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redirect_url_locations() {
        assert_eq!(
            redirect_url_from(&json!({"id": "X", "url": "https://pay/1"})).as_deref(),
            Some("https://pay/1")
        );
        assert_eq!(
            redirect_url_from(&json!({"data": {"checkout_url": "https://pay/2"}})).as_deref(),
            Some("https://pay/2")
        );
        assert_eq!(redirect_url_from(&json!({"url": 12})), None);
        assert_eq!(redirect_url_from(&json!({"id": "X"})), None);
        assert_eq!(redirect_url_from(&json!(["https://pay/3"])), None);
    }

    #[test]
    fn test_client_body_keeps_provider_fields() {
        let session = CheckoutSession::from_provider(json!({
            "id": "CHK1",
            "url": "https://pay/CHK1",
            "signature": "abc",
        }));

        assert_eq!(
            session.into_client_body(),
            json!({
                "id": "CHK1",
                "url": "https://pay/CHK1",
                "signature": "abc",
                "redirect_url": "https://pay/CHK1",
            })
        );
    }

    #[test]
    fn test_client_body_without_url_is_verbatim() {
        let raw = json!({"id": "CHK2", "state": "PENDING"});
        let session = CheckoutSession::from_provider(raw.clone());
        assert!(session.redirect_url.is_none());
        assert_eq!(session.into_client_body(), raw);
    }
}
