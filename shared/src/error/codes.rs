//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Cart errors
//! - 5xxx: Promo errors
//! - 6xxx: Catalog errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 4xxx: Cart ====================
    /// Line item not found in cart
    CartItemNotFound = 4001,
    /// Cart is empty
    CartEmpty = 4002,
    /// Quantity out of allowed range
    InvalidQuantity = 4003,
    /// Size is not offered by the dish
    InvalidSize = 4004,
    /// Addon is not offered by the dish
    InvalidAddon = 4005,

    // ==================== 5xxx: Promo ====================
    /// Promo code does not exist or is inactive
    PromoNotFound = 5001,
    /// Order subtotal below the promo minimum
    PromoMinimumNotMet = 5002,
    /// No item in the cart is eligible for the promo
    PromoNotApplicable = 5003,
    /// A promo code is already applied to the cart
    PromoAlreadyApplied = 5004,

    // ==================== 6xxx: Catalog ====================
    /// Catalog could not be loaded
    CatalogLoadFailed = 6003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",

            // Cart
            ErrorCode::CartItemNotFound => "Cart item not found",
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::InvalidQuantity => "Invalid quantity",
            ErrorCode::InvalidSize => "Size is not available for this dish",
            ErrorCode::InvalidAddon => "Addon is not available for this dish",

            // Promo
            ErrorCode::PromoNotFound => "Promo code not found",
            ErrorCode::PromoMinimumNotMet => "Minimum order amount not reached",
            ErrorCode::PromoNotApplicable => "Promo code is not applicable to items in order",
            ErrorCode::PromoAlreadyApplied => "A promo code is already applied",

            // Catalog
            ErrorCode::CatalogLoadFailed => "Catalog could not be loaded",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),

            // Cart
            4001 => Ok(ErrorCode::CartItemNotFound),
            4002 => Ok(ErrorCode::CartEmpty),
            4003 => Ok(ErrorCode::InvalidQuantity),
            4004 => Ok(ErrorCode::InvalidSize),
            4005 => Ok(ErrorCode::InvalidAddon),

            // Promo
            5001 => Ok(ErrorCode::PromoNotFound),
            5002 => Ok(ErrorCode::PromoMinimumNotMet),
            5003 => Ok(ErrorCode::PromoNotApplicable),
            5004 => Ok(ErrorCode::PromoAlreadyApplied),

            // Catalog
            6003 => Ok(ErrorCode::CatalogLoadFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
