use super::*;

#[test]
fn test_checkout_returns_receipt_and_clears_cart() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 2);
    manager.apply_promo("WELCOME20").unwrap();

    let receipt = manager.checkout().unwrap();

    assert_eq!(receipt.customer, "tester");
    assert_eq!(receipt.items.len(), 1);
    assert_eq!(receipt.subtotal, 900.0);
    assert_eq!(receipt.delivery_fee, 150.0);
    assert_eq!(receipt.discount, 20.0);
    assert_eq!(receipt.promo_code.as_deref(), Some("WELCOME20"));
    assert_eq!(receipt.total, 1030.0);
    assert_eq!(receipt.fulfillment_mode, FulfillmentMode::Delivery);
    assert!(receipt.order_id > 0);

    assert_eq!(manager.cart(), &CartSnapshot::new());
}

#[test]
fn test_pickup_checkout_skips_delivery_fee() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 1);
    add_plain(&mut manager, "cheeseburger", 1);
    manager.set_fulfillment_mode(FulfillmentMode::Pickup);

    let receipt = manager.checkout().unwrap();

    assert_eq!(receipt.fulfillment_mode, FulfillmentMode::Pickup);
    assert_eq!(receipt.delivery_fee, 0.0);
    assert_eq!(receipt.total, 830.0);
    // Mode is a preference, it survives checkout
    assert_eq!(manager.fulfillment_mode(), FulfillmentMode::Pickup);
}

#[test]
fn test_checkout_empty_cart_rejected() {
    let mut manager = create_test_manager();

    let err = manager.checkout().unwrap_err();

    assert_eq!(err, CartError::EmptyCart);
    assert_eq!(err.code(), ErrorCode::CartEmpty);
}

#[test]
fn test_checkout_requires_login() {
    let mut manager = create_test_manager();
    add_plain(&mut manager, "margherita", 1);
    manager.session().logout();
    let before = manager.cart().clone();

    let err = manager.checkout().unwrap_err();

    assert_eq!(err, CartError::NotAuthenticated);
    assert_eq!(manager.cart(), &before);
}

#[test]
fn test_checkout_error_maps_to_app_error() {
    let mut manager = create_signed_out_manager();

    let app_err: AppError = manager.checkout().unwrap_err().into();
    assert_eq!(app_err.code, ErrorCode::NotAuthenticated);
}
