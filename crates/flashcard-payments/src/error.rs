//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Amount missing, unparsable or not positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Checkout provider answered with a non-2xx status
    #[error("Checkout provider returned HTTP {status}")]
    Provider { status: u16, body: String },

    /// Checkout provider could not be reached
    #[error("Checkout provider unavailable: {0}")]
    Unavailable(String),

    /// Checkout provider answered 2xx with a body that is not JSON
    #[error("Checkout response parse error: {0}")]
    Parse(String),
}

impl PaymentError {
    /// Message shown to the client
    ///
    /// Provider rejections are relayed verbatim so the browser sees exactly
    /// what the provider said.
    pub fn client_message(&self) -> String {
        match self {
            PaymentError::InvalidAmount(_) => "Invalid amount".into(),
            PaymentError::Provider { body, .. } => body.clone(),
            PaymentError::Unavailable(msg) | PaymentError::Parse(msg) => msg.clone(),
        }
    }
}
