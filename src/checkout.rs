//! Checkout Flow
//!
//! Cart → Checkout → Message. Guards: the cart must be non-empty to enter
//! checkout, and every required field must be filled to confirm.

use crate::cart::CartState;
use crate::error::{ShopError, ShopResult};
use crate::popup::{Modal, PopupState};

pub const EMPTY_CART_TEXT: &str = "Your cart is empty. Add at least one product to continue.";
pub const MISSING_FIELDS_TEXT: &str = "Fill in all required fields before continuing.";

/// Required checkout inputs, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutField {
    FirstName,
    LastName,
    Address,
    PostalCode,
    Phone,
    Email,
}

impl CheckoutField {
    pub const REQUIRED: [CheckoutField; 6] = [
        CheckoutField::FirstName,
        CheckoutField::LastName,
        CheckoutField::Address,
        CheckoutField::PostalCode,
        CheckoutField::Phone,
        CheckoutField::Email,
    ];

    /// DOM id of the input
    pub fn input_id(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "first-name",
            CheckoutField::LastName => "last-name",
            CheckoutField::Address => "address1",
            CheckoutField::PostalCode => "postcode",
            CheckoutField::Phone => "phone",
            CheckoutField::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::FirstName => "First name",
            CheckoutField::LastName => "Last name",
            CheckoutField::Address => "Address",
            CheckoutField::PostalCode => "Postal code",
            CheckoutField::Phone => "Phone",
            CheckoutField::Email => "Email",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            CheckoutField::Phone => "tel",
            CheckoutField::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    invalid: Vec<CheckoutField>,
}

impl CheckoutForm {
    pub fn value(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FirstName => &self.first_name,
            CheckoutField::LastName => &self.last_name,
            CheckoutField::Address => &self.address,
            CheckoutField::PostalCode => &self.postal_code,
            CheckoutField::Phone => &self.phone,
            CheckoutField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: CheckoutField, value: String) {
        let slot = match field {
            CheckoutField::FirstName => &mut self.first_name,
            CheckoutField::LastName => &mut self.last_name,
            CheckoutField::Address => &mut self.address,
            CheckoutField::PostalCode => &mut self.postal_code,
            CheckoutField::Phone => &mut self.phone,
            CheckoutField::Email => &mut self.email,
        };
        *slot = value;
    }

    pub fn is_invalid(&self, field: CheckoutField) -> bool {
        self.invalid.contains(&field)
    }

    /// Re-marks invalid fields; returns the missing ones
    pub fn validate(&mut self) -> Result<(), Vec<CheckoutField>> {
        self.invalid = CheckoutField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect();
        if self.invalid.is_empty() {
            Ok(())
        } else {
            Err(self.invalid.clone())
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Summary of a confirmed order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub first_name: String,
    pub total_items: u32,
    pub total_price: f64,
}

fn success_text(first_name: &str) -> String {
    let greeting = if first_name.is_empty() {
        String::new()
    } else {
        format!(", {}", first_name)
    };
    format!(
        "Your order was placed successfully{}.\nWe will contact you soon using the details you provided.",
        greeting
    )
}

/// Cart popup's checkout button
pub fn begin_checkout(cart: &CartState, popups: &mut PopupState) -> ShopResult<()> {
    if cart.is_empty() {
        popups.show_error(EMPTY_CART_TEXT);
        return Err(ShopError::Validation(EMPTY_CART_TEXT.to_string()));
    }
    popups.open(Modal::Checkout);
    Ok(())
}

/// Checkout popup's confirm button. The cart is only cleared on success.
pub fn confirm_order(
    cart: &mut CartState,
    form: &mut CheckoutForm,
    popups: &mut PopupState,
) -> ShopResult<OrderReceipt> {
    if let Err(missing) = form.validate() {
        popups.show_error(MISSING_FIELDS_TEXT);
        let names: Vec<&str> = missing.iter().map(|f| f.input_id()).collect();
        return Err(ShopError::Validation(format!("missing {}", names.join(", "))));
    }

    let receipt = OrderReceipt {
        first_name: form.first_name.trim().to_string(),
        total_items: cart.total_items(),
        total_price: cart.total_price(),
    };

    cart.clear();
    form.reset();
    popups.show_success(&success_text(&receipt.first_name));
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::popup::MessageKind;

    fn cart_with_p1_twice() -> CartState {
        let p1 = Product {
            id: "p1".to_string(),
            name: "Lavender candle".to_string(),
            category: "candles".to_string(),
            price: 10.0,
            image: "img/p1.jpg".to_string(),
            description: String::new(),
        };
        let mut cart = CartState::new();
        cart.add_item(&p1);
        cart.add_item(&p1);
        cart
    }

    fn filled_form() -> CheckoutForm {
        let mut form = CheckoutForm::default();
        form.set(CheckoutField::FirstName, "Maria".to_string());
        form.set(CheckoutField::LastName, "Papadopoulou".to_string());
        form.set(CheckoutField::Address, "Ermou 12".to_string());
        form.set(CheckoutField::PostalCode, "10563".to_string());
        form.set(CheckoutField::Phone, "2100000000".to_string());
        form.set(CheckoutField::Email, "maria@example.com".to_string());
        form
    }

    #[test]
    fn test_empty_cart_shows_error() {
        let cart = CartState::new();
        let mut popups = PopupState::new();
        popups.open(Modal::Cart);

        let result = begin_checkout(&cart, &mut popups);

        assert!(matches!(result, Err(ShopError::Validation(_))));
        assert!(popups.is_open(Modal::Message));
        assert_eq!(popups.message().kind, MessageKind::Error);
        assert_eq!(popups.message().text, EMPTY_CART_TEXT);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_non_empty_cart_opens_checkout() {
        let cart = cart_with_p1_twice();
        let mut popups = PopupState::new();
        popups.open(Modal::Cart);

        assert!(begin_checkout(&cart, &mut popups).is_ok());
        assert!(popups.is_open(Modal::Checkout));
        assert!(!popups.is_open(Modal::Cart));
    }

    #[test]
    fn test_missing_email_keeps_cart() {
        let mut cart = cart_with_p1_twice();
        let mut form = filled_form();
        form.set(CheckoutField::Email, "   ".to_string());
        let mut popups = PopupState::new();
        popups.open(Modal::Checkout);

        let result = confirm_order(&mut cart, &mut form, &mut popups);

        assert!(result.is_err());
        assert!(form.is_invalid(CheckoutField::Email));
        assert!(!form.is_invalid(CheckoutField::FirstName));
        assert_eq!(popups.message().kind, MessageKind::Error);
        assert!(popups.is_open(Modal::Message));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(form.first_name, "Maria");
    }

    #[test]
    fn test_fixing_field_clears_invalid_mark() {
        let mut form = filled_form();
        form.set(CheckoutField::Phone, String::new());
        assert_eq!(form.validate(), Err(vec![CheckoutField::Phone]));
        form.set(CheckoutField::Phone, "2100000000".to_string());
        assert_eq!(form.validate(), Ok(()));
        assert!(!form.is_invalid(CheckoutField::Phone));
    }

    #[test]
    fn test_valid_checkout_clears_cart() {
        let mut cart = cart_with_p1_twice();
        let mut form = filled_form();
        let mut popups = PopupState::new();
        popups.open(Modal::Checkout);

        let receipt = confirm_order(&mut cart, &mut form, &mut popups).unwrap();

        assert_eq!(receipt.total_items, 2);
        assert_eq!(receipt.total_price, 20.0);
        assert!(cart.items().is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
        assert_eq!(form, CheckoutForm::default());
        assert!(popups.is_open(Modal::Message));
        assert_eq!(popups.message().kind, MessageKind::Success);
        assert!(popups.message().text.contains("Maria"));
    }
}
