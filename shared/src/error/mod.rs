//! Unified error system for the storefront
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Cart errors
//! - 5xxx: Promo errors
//! - 6xxx: Catalog errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::CartEmpty);
//! assert_eq!(err.code.code(), 4002);
//!
//! let err = AppError::validation("username must not be blank")
//!     .with_detail("field", "username");
//! assert!(err.details.is_some());
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
