use super::*;
use crate::pricing::PromoRejection;

#[test]
fn test_apply_fixed_promo() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 2);

    let discount = manager.apply_promo("WELCOME20").unwrap();

    assert_eq!(discount, 20.0);
    let cart = manager.cart();
    assert_eq!(cart.discount, 20.0);
    assert_eq!(cart.promo_code.as_deref(), Some("WELCOME20"));
    assert_eq!(cart.total, 900.0 + 150.0 - 20.0);
}

#[test]
fn test_promo_code_is_case_insensitive() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 1);

    manager.apply_promo("  welcome20 ").unwrap();

    // Stored under the catalog spelling
    assert_eq!(manager.cart().promo_code.as_deref(), Some("WELCOME20"));
}

#[test]
fn test_category_promo_discounts_eligible_items_only() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 1);
    add_plain(&mut manager, "cheeseburger", 1);

    // 15% of the 450 Italian part = 67.5, rounded half-up
    let discount = manager.apply_promo("PIZZA15").unwrap();

    assert_eq!(discount, 68.0);
    assert_eq!(manager.cart().total, 450.0 + 380.0 + 300.0 - 68.0);
}

#[test]
fn test_category_promo_without_eligible_items() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "cheeseburger", 2);
    let before = manager.cart().clone();

    let err = manager.apply_promo("PIZZA15").unwrap_err();

    assert_eq!(err, CartError::Promo(PromoRejection::NotApplicable));
    assert_eq!(manager.cart(), &before);
}

#[test]
fn test_promo_minimum_not_met() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "tiramisu", 1);

    let err = manager.apply_promo("WELCOME20").unwrap_err();

    assert_eq!(
        err,
        CartError::Promo(PromoRejection::MinimumNotMet { minimum: 300.0 })
    );
    assert_eq!(err.code(), ErrorCode::PromoMinimumNotMet);
    assert_eq!(manager.cart().discount, 0.0);
    assert_eq!(manager.cart().promo_code, None);
}

#[test]
fn test_unknown_and_inactive_promo_rejected() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 3);

    assert_eq!(
        manager.apply_promo("NOPE"),
        Err(CartError::Promo(PromoRejection::NotFound))
    );
    assert_eq!(
        manager.apply_promo("SUMMER10"),
        Err(CartError::Promo(PromoRejection::NotFound))
    );
    assert_eq!(manager.cart().promo_code, None);
}

#[test]
fn test_second_promo_rejected() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 2);
    manager.apply_promo("WELCOME20").unwrap();
    let before = manager.cart().clone();

    let err = manager.apply_promo("PIZZA15").unwrap_err();

    assert_eq!(err, CartError::Promo(PromoRejection::AlreadyApplied));
    assert_eq!(manager.cart(), &before);
    assert_eq!(manager.cart().promo_code.as_deref(), Some("WELCOME20"));
}

#[test]
fn test_remove_promo() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 2);
    manager.apply_promo("PIZZA15").unwrap();
    assert_eq!(manager.cart().discount, 135.0);

    manager.remove_promo();

    assert_eq!(manager.cart().discount, 0.0);
    assert_eq!(manager.cart().promo_code, None);
    assert_eq!(manager.cart().total, 1050.0);

    // A different code can now be applied
    assert_eq!(manager.apply_promo("WELCOME20").unwrap(), 20.0);
}

#[test]
fn test_discount_kept_when_items_change() {
    let mut manager = create_test_manager();
    let key = add_plain(&mut manager, "margherita", 2);
    manager.apply_promo("PIZZA15").unwrap();

    manager.update_item(&key, 4).unwrap();

    assert_eq!(manager.cart().discount, 135.0);
    assert_eq!(manager.cart().total, 1800.0 + 150.0 - 135.0);
}

#[test]
fn test_promo_survives_empty_cart() {
    let mut manager = create_test_manager();
    let key = add_plain(&mut manager, "margherita", 1);
    manager.apply_promo("WELCOME20").unwrap();

    manager.remove_item(&key).unwrap();

    let cart = manager.cart();
    assert!(cart.items.is_empty());
    assert_eq!(cart.promo_code.as_deref(), Some("WELCOME20"));
    assert_eq!(cart.delivery_fee, 0.0);
    assert_eq!(cart.total, -20.0);
}

#[test]
fn test_promo_outcome_as_response() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "tiramisu", 1);

    let response = shared::cart::PromoApplyResponse::from(manager.apply_promo("WELCOME20"));
    assert!(!response.success);
    assert_eq!(response.discount, None);
    assert!(response.error.unwrap().contains("300"));

    add_plain(&mut manager, "margherita", 1);
    let response = shared::cart::PromoApplyResponse::from(manager.apply_promo("WELCOME20"));
    assert!(response.success);
    assert_eq!(response.discount, Some(20.0));
}
