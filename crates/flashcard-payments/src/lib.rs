//! # flashcard-payments
//!
//! Premium upgrade checkout for the flashcard app.
//!
//! ## Hosted checkout flow
//!
//! ```text
//! ┌─────────────┐  POST /create_checkout  ┌──────────────────┐     ┌─────────────┐
//! │  Flashcards │────────────────────────▶│  IntaSend hosted │────▶│  /success   │
//! │  (premium)  │     redirect_url        │  checkout page   │     │  /cancel    │
//! └─────────────┘                         └──────────────────┘     └─────────────┘
//! ```
//!
//! Only session creation and redirect are handled here. There is no payment
//! state on our side: no reconciliation, refunds or webhooks.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flashcard_payments::{CheckoutProvider, CheckoutRequest, IntaSendClient, IntaSendConfig};
//!
//! let client = IntaSendClient::new(IntaSendConfig::from_env());
//! let session = client.create_checkout(&CheckoutRequest {
//!     amount: dec!(50.00),
//!     currency: "KES".into(),
//!     success_url: "https://example.com/success".into(),
//!     cancel_url: "https://example.com/cancel".into(),
//! }).await?;
//!
//! // Redirect user to: session.redirect_url
//! ```

mod checkout;
mod error;
mod session;

pub use checkout::{
    parse_amount, CheckoutProvider, CheckoutRequest, IntaSendClient, IntaSendConfig,
    DEFAULT_CHECKOUT_URL, DEFAULT_CURRENCY,
};
pub use error::{PaymentError, Result};
pub use session::{redirect_url_from, CheckoutSession};
