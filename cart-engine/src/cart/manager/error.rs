use crate::pricing::PromoRejection;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Cart errors
///
/// Every variant leaves the cart exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("User is not authenticated")]
    NotAuthenticated,

    #[error("Cart item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Size {size_id} is not available for dish {dish_id}")]
    InvalidSize { dish_id: String, size_id: String },

    #[error("Addon {addon_id} is not available for dish {dish_id}")]
    InvalidAddon { dish_id: String, addon_id: String },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("{0}")]
    Promo(#[from] PromoRejection),
}

impl CartError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotAuthenticated => ErrorCode::NotAuthenticated,
            Self::ItemNotFound(_) => ErrorCode::CartItemNotFound,
            Self::InvalidQuantity(_) => ErrorCode::InvalidQuantity,
            Self::InvalidSize { .. } => ErrorCode::InvalidSize,
            Self::InvalidAddon { .. } => ErrorCode::InvalidAddon,
            Self::EmptyCart => ErrorCode::CartEmpty,
            Self::Promo(rejection) => rejection.code(),
        }
    }

    /// Whether the caller should send the user to the login flow
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::Promo(rejection) => rejection.into(),
            CartError::NotAuthenticated => AppError::new(ErrorCode::NotAuthenticated),
            CartError::EmptyCart => AppError::new(ErrorCode::CartEmpty),
            CartError::ItemNotFound(id) => AppError::with_message(
                ErrorCode::CartItemNotFound,
                format!("Cart item not found: {}", id),
            )
            .with_detail("line_item_id", id),
            CartError::InvalidQuantity(quantity) => AppError::with_message(
                ErrorCode::InvalidQuantity,
                format!("Invalid quantity: {}", quantity),
            )
            .with_detail("quantity", quantity),
            other => AppError::with_message(other.code(), other.to_string()),
        }
    }
}

pub type CartResult<T> = Result<T, CartError>;
