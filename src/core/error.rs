/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The validation variants are deterministic rejections of caller input:
/// the same inputs always produce the same outcome, so none of them is
/// retriable. Callers surface them as user-facing rejections.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A field on the submitted payload is malformed
    #[error("Invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    /// Another coupon owned by the same merchant already uses this code
    #[error("Coupon code '{code}' has already been taken")]
    DuplicateCode { code: String },

    /// The merchant already owns the maximum number of active coupons
    #[error("This merchant already has {limit} active coupons")]
    ActiveLimitExceeded { limit: u32 },

    /// The coupon is referenced by at least one pending invoice
    #[error("Cannot deactivate coupon with pending invoices")]
    PendingInvoiceBlocksDeactivation,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        AppError::InvalidField {
            field,
            message: message.into(),
        }
    }

    pub fn duplicate_code(code: impl Into<String>) -> Self {
        AppError::DuplicateCode { code: code.into() }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    /// True for every validation-rejection kind (as opposed to lookup or
    /// configuration failures).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidField { .. }
                | AppError::DuplicateCode { .. }
                | AppError::ActiveLimitExceeded { .. }
                | AppError::PendingInvoiceBlocksDeactivation
        )
    }
}
