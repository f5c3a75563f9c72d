//! IntaSend Checkout Integration
//!
//! Creates a hosted checkout session and hands back the redirect URL.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PaymentError, Result};
use crate::session::CheckoutSession;

/// IntaSend hosted checkout endpoint
pub const DEFAULT_CHECKOUT_URL: &str = "https://payment.intasend.com/api/v1/checkout/";

/// Currency used when the client does not name one
pub const DEFAULT_CURRENCY: &str = "KES";

/// Checkout provider trait (Strategy pattern)
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a hosted checkout session. Single call, no retry.
    async fn create_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutSession>;

    /// Currency applied when the client omits one
    fn default_currency(&self) -> &str;

    /// Provider name
    fn name(&self) -> &str;

    /// Whether both keys are present
    fn is_configured(&self) -> bool;
}

/// Request to create a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Amount in major currency units (`50.00` KES, not cents)
    pub amount: Decimal,

    /// ISO currency code
    pub currency: String,

    /// Where the provider sends the user after paying
    pub success_url: String,

    /// Where the provider sends the user after cancelling
    pub cancel_url: String,
}

/// Parse a client-supplied amount given as a JSON number or decimal string.
///
/// Missing, unparsable and non-positive amounts are rejected.
pub fn parse_amount(raw: Option<&Value>) -> Result<Decimal> {
    let raw = match raw {
        None | Some(Value::Null) => {
            return Err(PaymentError::InvalidAmount("amount is required".into()));
        }
        Some(v) => v,
    };

    let amount: Decimal = serde_json::from_value(raw.clone())
        .map_err(|e| PaymentError::InvalidAmount(format!("{raw}: {e}")))?;

    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!("{amount} is not positive")));
    }

    Ok(amount)
}

/// IntaSend configuration
#[derive(Clone, Debug)]
pub struct IntaSendConfig {
    /// Checkout endpoint
    pub checkout_url: String,

    /// Publishable key embedded in the payload
    pub publishable_key: Option<String>,

    /// Secret key sent as a bearer credential
    pub secret_key: Option<String>,

    /// Currency applied when the client omits one
    pub default_currency: String,
}

impl Default for IntaSendConfig {
    fn default() -> Self {
        Self {
            checkout_url: DEFAULT_CHECKOUT_URL.into(),
            publishable_key: None,
            secret_key: None,
            default_currency: DEFAULT_CURRENCY.into(),
        }
    }
}

impl IntaSendConfig {
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            checkout_url: non_empty("INTASEND_CHECKOUT_URL")
                .unwrap_or_else(|| DEFAULT_CHECKOUT_URL.into()),
            publishable_key: non_empty("INTASEND_PUBLISHABLE_KEY"),
            secret_key: non_empty("INTASEND_SECRET_KEY"),
            default_currency: non_empty("CHECKOUT_CURRENCY")
                .unwrap_or_else(|| DEFAULT_CURRENCY.into()),
        }
    }
}

/// Body sent to IntaSend
#[derive(Serialize)]
struct IntaSendCheckoutPayload<'a> {
    public_key: Option<&'a str>,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    currency: &'a str,
    redirect_url: &'a str,
    cancel_url: &'a str,
}

/// IntaSend client
pub struct IntaSendClient {
    client: reqwest::Client,
    config: IntaSendConfig,
}

impl IntaSendClient {
    pub fn new(config: IntaSendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn payload<'a>(&'a self, request: &'a CheckoutRequest) -> IntaSendCheckoutPayload<'a> {
        IntaSendCheckoutPayload {
            public_key: self.config.publishable_key.as_deref(),
            amount: request.amount,
            currency: &request.currency,
            redirect_url: &request.success_url,
            cancel_url: &request.cancel_url,
        }
    }
}

#[async_trait]
impl CheckoutProvider for IntaSendClient {
    async fn create_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
        let mut call = self
            .client
            .post(&self.config.checkout_url)
            .json(&self.payload(request));

        if let Some(ref secret) = self.config.secret_key {
            call = call.bearer_auth(secret);
        }

        let response = call
            .send()
            .await
            .map_err(|e| PaymentError::Unavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Unavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(PaymentError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let raw: Value =
            serde_json::from_str(&body).map_err(|e| PaymentError::Parse(e.to_string()))?;
        let session = CheckoutSession::from_provider(raw);

        if session.redirect_url.is_none() {
            tracing::warn!("IntaSend checkout response has no recognizable redirect URL");
        }

        Ok(session)
    }

    fn default_currency(&self) -> &str {
        &self.config.default_currency
    }

    fn name(&self) -> &str {
        "IntaSend"
    }

    fn is_configured(&self) -> bool {
        self.config.publishable_key.is_some() && self.config.secret_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use rust_decimal_macros::dec;
    use serde_json::json;

    /// Serve a fake IntaSend API on an ephemeral port
    async fn fake_intasend() -> String {
        async fn checkout(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, String) {
            let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
            if bearer != Some("Bearer ISSecretKey_test") {
                return (StatusCode::UNAUTHORIZED, r#"{"detail":"Invalid token"}"#.into());
            }
            if body["amount"].as_f64().unwrap_or_default() > 1_000_000.0 {
                return (StatusCode::BAD_REQUEST, r#"{"errors":[{"code":"amount_too_large"}]}"#.into());
            }
            let reply = json!({
                "id": "CHK-1",
                "url": "https://payment.intasend.com/checkout/CHK-1/express/",
                "echo": body,
            });
            (StatusCode::OK, reply.to_string())
        }

        let app = Router::new()
            .route("/api/v1/checkout/", post(checkout))
            .route("/garbled/", post(|| async { "<html>oops</html>" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    fn client(checkout_url: String) -> IntaSendClient {
        IntaSendClient::new(IntaSendConfig {
            checkout_url,
            publishable_key: Some("ISPubKey_test".into()),
            secret_key: Some("ISSecretKey_test".into()),
            ..Default::default()
        })
    }

    fn request(amount: Decimal) -> CheckoutRequest {
        CheckoutRequest {
            amount,
            currency: "KES".into(),
            success_url: "http://localhost:3000/success".into(),
            cancel_url: "http://localhost:3000/cancel".into(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Some(&json!("50.00"))).unwrap(), dec!(50.00));
        assert_eq!(parse_amount(Some(&json!(999))).unwrap(), dec!(999));
        assert_eq!(parse_amount(Some(&json!(12.5))).unwrap(), dec!(12.5));

        for bad in [json!(0), json!(-3), json!("abc"), json!(true), Value::Null] {
            assert!(matches!(
                parse_amount(Some(&bad)),
                Err(PaymentError::InvalidAmount(_))
            ));
        }
        assert!(parse_amount(None).is_err());
    }

    #[test]
    fn test_payload_shape() {
        let client = client(DEFAULT_CHECKOUT_URL.into());
        let request = request(dec!(50.00));
        let payload = serde_json::to_value(client.payload(&request)).unwrap();

        assert_eq!(
            payload,
            json!({
                "public_key": "ISPubKey_test",
                "amount": 50.0,
                "currency": "KES",
                "redirect_url": "http://localhost:3000/success",
                "cancel_url": "http://localhost:3000/cancel",
            })
        );
    }

    #[test]
    fn test_configuration_flags() {
        assert!(!IntaSendClient::new(IntaSendConfig::default()).is_configured());
        assert!(client(DEFAULT_CHECKOUT_URL.into()).is_configured());
        assert_eq!(IntaSendConfig::default().default_currency, "KES");
    }

    #[tokio::test]
    async fn test_successful_checkout_relays_body() {
        let base = fake_intasend().await;
        let session = client(format!("{base}/api/v1/checkout/"))
            .create_checkout(&request(dec!(50.00)))
            .await
            .unwrap();

        assert_eq!(
            session.redirect_url.as_deref(),
            Some("https://payment.intasend.com/checkout/CHK-1/express/")
        );
        assert_eq!(session.raw["id"], "CHK-1");
        assert_eq!(session.raw["echo"]["public_key"], "ISPubKey_test");
    }

    #[tokio::test]
    async fn test_provider_rejection_keeps_status_and_body() {
        let base = fake_intasend().await;
        let err = client(format!("{base}/api/v1/checkout/"))
            .create_checkout(&request(dec!(5000000)))
            .await
            .unwrap_err();

        match err {
            PaymentError::Provider { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"errors":[{"code":"amount_too_large"}]}"#);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_secret_is_provider_rejection() {
        let base = fake_intasend().await;
        let client = IntaSendClient::new(IntaSendConfig {
            checkout_url: format!("{base}/api/v1/checkout/"),
            ..Default::default()
        });

        let err = client.create_checkout(&request(dec!(50))).await.unwrap_err();
        assert!(matches!(err, PaymentError::Provider { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_non_json_success_is_parse_error() {
        let base = fake_intasend().await;
        let err = client(format!("{base}/garbled/"))
            .create_checkout(&request(dec!(50)))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/api/v1/checkout/"))
            .create_checkout(&request(dec!(50)))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Unavailable(_)));
    }
}
