//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Instrument;

use flashcard_core::{requested_count, Flashcard, FlashcardError};
use flashcard_payments::{parse_amount, CheckoutRequest, PaymentError};

use crate::state::AppState;

const NO_TEXT: &str = "No text provided";

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub qa_provider: String,
    pub qa_configured: bool,
    pub payments_configured: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Card count; kept loose so odd values degrade instead of failing
    #[serde(default)]
    pub n: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub success_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: error.into() }))
}

fn bad_json(rejection: &JsonRejection) -> ApiError {
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn payment_error(err: &PaymentError) -> ApiError {
    let status = match err {
        PaymentError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
        PaymentError::Provider { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        PaymentError::Unavailable(_) | PaymentError::Parse(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, err.client_message())
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.generator.provider();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        qa_provider: provider.name().to_string(),
        qa_configured: provider.is_configured(),
        payments_configured: state.checkout.is_configured(),
    })
}

/// Turn pasted text into flashcards
pub async fn generate_flashcards(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| bad_json(&e))?;

    let text = payload.text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, NO_TEXT));
    }

    let count = requested_count(payload.n.as_ref());
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("generate_flashcards", %request_id, count);

    let flashcards = state
        .generator
        .generate(&text, count)
        .instrument(span)
        .await
        .map_err(|e| match e {
            FlashcardError::InvalidInput(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            other => {
                tracing::error!(%request_id, "Flashcard generation failed: {}", other);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        })?;

    Ok(Json(GenerateResponse { flashcards }))
}

/// Start a premium checkout and relay the provider's session
pub async fn create_checkout(
    State(state): State<AppState>,
    payload: Result<Json<CreateCheckoutRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(|e| bad_json(&e))?;

    let amount = parse_amount(payload.amount.as_ref()).map_err(|e| {
        tracing::warn!("Rejected checkout: {}", e);
        payment_error(&e)
    })?;

    let request = CheckoutRequest {
        amount,
        currency: payload
            .currency
            .unwrap_or_else(|| state.checkout.default_currency().to_string()),
        success_url: payload
            .success_url
            .unwrap_or_else(|| state.config.page_url("success")),
        cancel_url: payload
            .cancel_url
            .unwrap_or_else(|| state.config.page_url("cancel")),
    };

    let session = state.checkout.create_checkout(&request).await.map_err(|e| {
        tracing::error!(provider = state.checkout.name(), "Checkout error: {}", e);
        payment_error(&e)
    })?;

    tracing::info!(
        provider = state.checkout.name(),
        amount = %request.amount,
        currency = %request.currency,
        redirect = session.redirect_url.is_some(),
        "Checkout session created"
    );

    Ok(Json(session.into_client_body()))
}

/// Landing page after a completed payment
pub async fn payment_success() -> Html<&'static str> {
    Html("✅ Payment Successful! Premium unlocked.")
}

/// Landing page after an abandoned payment
pub async fn payment_cancelled() -> Html<&'static str> {
    Html("❌ Payment Cancelled. Try again.")
}
