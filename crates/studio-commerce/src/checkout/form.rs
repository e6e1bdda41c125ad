//! Checkout form and validation.

use serde::{Deserialize, Serialize};

/// How the customer intends to pay.
///
/// Card details are collected but never charged; payment is simulated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Card {
        number: String,
        expiry: String,
        cvv: String,
        name_on_card: String,
    },
    Invoice,
    Paypal,
}

/// The checkout form as the customer filled it in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
    /// Free-text description of the engagement.
    pub project_details: String,
    pub preferred_start_date: Option<String>,
    pub payment_method: PaymentMethod,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            company: None,
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: "US".to_string(),
            phone: String::new(),
            project_details: String::new(),
            preferred_start_date: None,
            payment_method: PaymentMethod::Card {
                number: String::new(),
                expiry: String::new(),
                cvv: String::new(),
                name_on_card: String::new(),
            },
        }
    }
}

/// A field-level validation message for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl CheckoutForm {
    /// Validate the form; an empty result means it can be submitted.
    ///
    /// Validation never touches cart state.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        require(&mut errors, &self.email, "email", "Email is required");
        require(
            &mut errors,
            &self.first_name,
            "first_name",
            "First name is required",
        );
        require(
            &mut errors,
            &self.last_name,
            "last_name",
            "Last name is required",
        );
        require(&mut errors, &self.address, "address", "Address is required");
        require(&mut errors, &self.city, "city", "City is required");
        require(&mut errors, &self.state, "state", "State is required");
        require(&mut errors, &self.zip, "zip", "Zip code is required");
        require(
            &mut errors,
            &self.phone,
            "phone",
            "Phone number is required",
        );
        require(
            &mut errors,
            &self.project_details,
            "project_details",
            "Project details are required",
        );

        if let PaymentMethod::Card {
            number,
            expiry,
            cvv,
            name_on_card,
        } = &self.payment_method
        {
            require(&mut errors, number, "card_number", "Card number is required");
            require(&mut errors, expiry, "expiry", "Expiry date is required");
            require(&mut errors, cvv, "cvv", "CVV is required");
            require(
                &mut errors,
                name_on_card,
                "name_on_card",
                "Name on card is required",
            );
        }

        errors
    }
}

fn require(errors: &mut Vec<FieldError>, value: &str, field: &'static str, message: &'static str) {
    if value.trim().is_empty() {
        errors.push(FieldError { field, message });
    }
}
