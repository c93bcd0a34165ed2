//! Promo Validation Engine
//!
//! Checks a submitted code against the catalog promo definitions and the
//! current cart contents. Steps short-circuit on the first failure:
//!
//! 1. active promo with a case-insensitive code match
//! 2. minimum order amount against the items subtotal
//! 3. category restriction: at least one eligible line item
//! 4. discount: fixed amount, or a percentage of the eligible items
//!    (restricted) / the whole subtotal (unrestricted), rounded half-up
//!
//! The "already applied" check belongs to the caller and runs before lookup.

use super::money::{round_whole, to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::cart::LineItem;
use shared::error::{AppError, ErrorCode};
use shared::models::{DiscountType, PromoCode};
use thiserror::Error;

/// Why a promo code was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PromoRejection {
    #[error("Promo code not found")]
    NotFound,

    #[error("Minimum order amount for this code is {minimum}")]
    MinimumNotMet { minimum: f64 },

    #[error("Promo code is not applicable to items in order")]
    NotApplicable,

    #[error("A promo code is already applied")]
    AlreadyApplied,
}

impl PromoRejection {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound => ErrorCode::PromoNotFound,
            Self::MinimumNotMet { .. } => ErrorCode::PromoMinimumNotMet,
            Self::NotApplicable => ErrorCode::PromoNotApplicable,
            Self::AlreadyApplied => ErrorCode::PromoAlreadyApplied,
        }
    }
}

impl From<PromoRejection> for AppError {
    fn from(rejection: PromoRejection) -> Self {
        let err = AppError::with_message(rejection.code(), rejection.to_string());
        match rejection {
            PromoRejection::MinimumNotMet { minimum } => err.with_detail("minimum", minimum),
            _ => err,
        }
    }
}

/// Find an active promo whose code matches case-insensitively
pub fn find_active_promo<'a>(code: &str, promos: &'a [PromoCode]) -> Option<&'a PromoCode> {
    promos.iter().find(|p| p.is_active && p.matches(code))
}

/// Validate a promo code and compute the discount it grants
pub fn validate_promo(
    code: &str,
    promos: &[PromoCode],
    items: &[LineItem],
    subtotal: f64,
) -> Result<f64, PromoRejection> {
    let promo = find_active_promo(code, promos).ok_or(PromoRejection::NotFound)?;

    if let Some(minimum) = promo.min_order_amount
        && to_decimal(subtotal) < to_decimal(minimum)
    {
        return Err(PromoRejection::MinimumNotMet { minimum });
    }

    let eligible_total = match promo.category_restriction() {
        Some(categories) => {
            let eligible: Vec<&LineItem> = items
                .iter()
                .filter(|item| categories.iter().any(|c| *c == item.dish.category))
                .collect();
            if eligible.is_empty() {
                return Err(PromoRejection::NotApplicable);
            }
            eligible
                .iter()
                .map(|item| to_decimal(item.total_price))
                .sum::<Decimal>()
        }
        None => to_decimal(subtotal),
    };

    let discount = match promo.discount_type {
        DiscountType::Fixed => to_decimal(promo.discount),
        DiscountType::Percentage => {
            round_whole(eligible_total * to_decimal(promo.discount) / Decimal::ONE_HUNDRED)
        }
    };

    Ok(to_f64(discount))
}
