// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Checkout totals, step validation, and order placement.

use crate::error::ApiError;
use crate::store::Store;
use gleam_store::Action;
use gleam_store_domain::Product;
use gleam_store_remote::{
    NewOrder, NewOrderItem, ORDER_STATUS_PLACED, PaymentMethod, ShippingAddress, ShippingMethod,
};
use tracing::info;

/// Standard shipping cost in cents.
pub const STANDARD_SHIPPING_CENTS: u64 = 599;

/// Express shipping cost in cents.
pub const EXPRESS_SHIPPING_CENTS: u64 = 1299;

/// Flat demo tax rate, percent of the subtotal.
pub const TAX_RATE_PERCENT: u64 = 24;

/// The four checkout steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Contact and shipping address.
    Information,
    /// Shipping method.
    Shipping,
    /// Payment method and card details.
    Payment,
    /// Final review.
    Review,
}

/// The checkout form as filled in by the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    /// Contact email.
    pub email: String,
    /// Recipient first name.
    pub first: String,
    /// Recipient last name.
    pub last: String,
    /// Street address.
    pub addr: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal: String,
    /// Country.
    pub country: String,
    /// Selected shipping method.
    pub shipping: ShippingMethod,
    /// Selected payment method.
    pub payment: PaymentMethod,
    /// Card number, spaces allowed.
    pub card_number: String,
    /// Card expiry, e.g. `12/27`.
    pub card_expiry: String,
    /// Card verification code.
    pub card_cvc: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            first: String::new(),
            last: String::new(),
            addr: String::new(),
            city: String::new(),
            postal: String::new(),
            country: String::from("Finland"),
            shipping: ShippingMethod::default(),
            payment: PaymentMethod::default(),
            card_number: String::new(),
            card_expiry: String::new(),
            card_cvc: String::new(),
        }
    }
}

/// Order money breakdown, all in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Cart subtotal.
    pub subtotal_cents: u64,
    /// Shipping cost for the selected method.
    pub shipping_cents: u64,
    /// Flat-rate tax on the subtotal, rounded half-up.
    pub tax_cents: u64,
    /// Grand total.
    pub total_cents: u64,
}

impl OrderTotals {
    /// Computes the breakdown for a subtotal and shipping method.
    #[must_use]
    pub const fn compute(subtotal_cents: u64, shipping: ShippingMethod) -> Self {
        let shipping_cents: u64 = match shipping {
            ShippingMethod::Standard => STANDARD_SHIPPING_CENTS,
            ShippingMethod::Express => EXPRESS_SHIPPING_CENTS,
        };
        let tax_cents: u64 = (subtotal_cents * TAX_RATE_PERCENT + 50) / 100;
        Self {
            subtotal_cents,
            shipping_cents,
            tax_cents,
            total_cents: subtotal_cents + shipping_cents + tax_cents,
        }
    }
}

/// Checks whether a checkout step is complete enough to continue.
///
/// Every step requires a non-empty cart. The information step requires
/// contact and address fields; the payment step requires card details
/// unless Klarna is selected. Incompleteness is a local validation
/// concern, surfaced by the caller as a notice, never an error.
#[must_use]
pub fn can_continue(form: &CheckoutForm, step: CheckoutStep, cart_items: usize) -> bool {
    if cart_items == 0 {
        return false;
    }
    match step {
        CheckoutStep::Information => {
            form.email.contains('@')
                && !form.first.trim().is_empty()
                && !form.last.trim().is_empty()
                && !form.addr.trim().is_empty()
                && !form.city.trim().is_empty()
                && !form.postal.trim().is_empty()
        }
        CheckoutStep::Shipping | CheckoutStep::Review => true,
        CheckoutStep::Payment => match form.payment {
            PaymentMethod::Klarna => true,
            PaymentMethod::Card => {
                form.card_number.replace(' ', "").chars().count() >= 12
                    && form.card_expiry.trim().chars().count() >= 4
                    && form.card_cvc.trim().chars().count() >= 3
            }
        },
    }
}

impl Store {
    /// Places an order from the current cart.
    ///
    /// An empty cart is a silent no-op. A guest gets a sign-in notice
    /// (orders are saved against an account). On success the order and
    /// its line items are inserted remotely, the cart is cleared, and a
    /// confirmation notice carries a prefix of the order id. Any remote
    /// failure leaves the cart intact and surfaces the backend's message.
    ///
    /// Guarding against double submission while a placement is in flight
    /// is the caller's responsibility.
    pub fn place_order(&mut self, form: &CheckoutForm) {
        match self.try_place_order(form) {
            Ok(order_id) => {
                let prefix: String = order_id.chars().take(8).collect();
                self.toast(format!("Order saved ✅ (id: {prefix}…)"));
            }
            Err(ApiError::EmptyCart) => {}
            Err(ApiError::NotSignedIn) => {
                self.toast("Please sign in to save your order to the backend.");
            }
            Err(err) => self.toast(err.to_string()),
        }
    }

    fn try_place_order(&mut self, form: &CheckoutForm) -> Result<String, ApiError> {
        // Cart lines joined against the catalog; unknown ids drop out the
        // same way they are skipped in the subtotal
        let lines: Vec<(Product, u32)> = self
            .state()
            .cart
            .iter()
            .filter_map(|(id, qty)| self.state().find_product(id).map(|p| (p.clone(), *qty)))
            .collect();
        if lines.is_empty() {
            return Err(ApiError::EmptyCart);
        }
        let user = self.state().user.clone().ok_or(ApiError::NotSignedIn)?;

        let totals: OrderTotals =
            OrderTotals::compute(self.state().cart_subtotal_cents(), form.shipping);
        let order: NewOrder = NewOrder {
            user_id: user.id.clone(),
            email: form.email.trim().to_string(),
            shipping_address: ShippingAddress {
                first: form.first.clone(),
                last: form.last.clone(),
                addr: form.addr.clone(),
                city: form.city.clone(),
                postal: form.postal.clone(),
                country: form.country.clone(),
            },
            shipping_method: form.shipping,
            payment_method: form.payment,
            subtotal_cents: totals.subtotal_cents,
            shipping_cents: totals.shipping_cents,
            tax_cents: totals.tax_cents,
            total_cents: totals.total_cents,
            status: String::from(ORDER_STATUS_PLACED),
        };

        let order_id: String = self.remote().insert_order(order)?;
        let items: Vec<NewOrderItem> = lines
            .into_iter()
            .map(|(product, qty)| NewOrderItem {
                order_id: order_id.clone(),
                product_id: product.id.clone(),
                product_name: product.name,
                unit_price_cents: product.price_cents,
                qty,
            })
            .collect();
        self.remote().insert_order_items(items)?;

        info!("Placed order {order_id} for {}", user.id);
        self.dispatch(Action::CartClear);
        Ok(order_id)
    }
}
