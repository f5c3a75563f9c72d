//! API Client

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Premium upgrade price, in major units of [`PREMIUM_CURRENCY`]
const PREMIUM_AMOUNT: &str = "50.00";
const PREMIUM_CURRENCY: &str = "KES";

/// Flashcard as returned by the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Page origin; reqwest on WASM needs absolute URLs
fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

fn error_from(data: &Value, fallback: &str) -> String {
    data["error"].as_str().unwrap_or(fallback).to_string()
}

/// Ask the server to turn notes into up to `count` flashcards
pub async fn generate_flashcards(text: &str, count: u32) -> Result<Vec<Flashcard>, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({
        "text": text,
        "n": count,
    });

    let response = client
        .post(format!("{}/generate_flashcards", origin()))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let ok = response.status().is_success();
    let data: Value = response.json().await.unwrap_or_default();

    if ok {
        serde_json::from_value(data["flashcards"].clone()).map_err(|e| e.to_string())
    } else {
        Err(error_from(&data, "Failed to generate flashcards"))
    }
}

/// Create a premium checkout session and return the URL to redirect to
pub async fn create_checkout() -> Result<String, String> {
    let client = reqwest::Client::new();
    let origin = origin();

    let body = serde_json::json!({
        "amount": PREMIUM_AMOUNT,
        "currency": PREMIUM_CURRENCY,
        "success_url": format!("{}/success", origin),
        "cancel_url": format!("{}/cancel", origin),
    });

    let response = client
        .post(format!("{}/create_checkout", origin))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let ok = response.status().is_success();
    let data: Value = response.json().await.unwrap_or_default();

    match data["redirect_url"].as_str() {
        Some(url) if ok => Ok(url.to_string()),
        _ => Err(error_from(&data, "No checkout URL returned")),
    }
}

/// Send the browser to `url`
pub fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}
