//! Checkout form.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::CheckoutError;

/// How the customer pays on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    /// Credit card
    CreditCard,

    /// Debit card
    DebitCard,

    /// Cash
    Money,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::CreditCard => "credit card",
            Self::DebitCard => "debit card",
            Self::Money => "cash",
        })
    }
}

/// Validated delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// CEP.
    pub postal_code: String,
    /// Street name.
    pub street: String,
    /// House or building number.
    pub number: String,
    /// Apartment, block or similar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// Neighbourhood.
    pub district: String,
    /// City name.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
}

/// A form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// CEP.
    PostalCode,
    /// Street name.
    Street,
    /// House number.
    Number,
    /// Neighbourhood.
    District,
    /// City name.
    City,
    /// State code.
    State,
    /// Payment method selection.
    PaymentMethod,
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::PostalCode => "postal code",
            Self::Street => "street",
            Self::Number => "number",
            Self::District => "district",
            Self::City => "city",
            Self::State => "state",
            Self::PaymentMethod => "payment method",
        })
    }
}

/// Raw checkout input, as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    /// CEP, required.
    pub postal_code: String,
    /// Street name, required.
    pub street: String,
    /// House number, required.
    pub number: String,
    /// Optional complement.
    #[serde(default)]
    pub complement: Option<String>,
    /// Neighbourhood, required.
    pub district: String,
    /// City, required.
    pub city: String,
    /// State code, required.
    pub state: String,
    /// Selected payment method, required.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutForm {
    /// Check every required field and return the cleaned-up address and payment method.
    ///
    /// All fields except the complement must be non-blank. Values are trimmed
    /// and a blank complement is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidForm`] listing every missing field.
    pub fn validate(&self) -> Result<(ShippingAddress, PaymentMethod), CheckoutError> {
        let mut missing = Vec::new();

        let mut required = |field: FormField, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                missing.push(field);
            }
            value.to_string()
        };

        let address = ShippingAddress {
            postal_code: required(FormField::PostalCode, &self.postal_code),
            street: required(FormField::Street, &self.street),
            number: required(FormField::Number, &self.number),
            complement: self
                .complement
                .as_deref()
                .map(str::trim)
                .filter(|complement| !complement.is_empty())
                .map(str::to_string),
            district: required(FormField::District, &self.district),
            city: required(FormField::City, &self.city),
            state: required(FormField::State, &self.state),
        };

        let Some(payment_method) = self.payment_method else {
            missing.push(FormField::PaymentMethod);
            return Err(CheckoutError::InvalidForm(missing));
        };

        if !missing.is_empty() {
            return Err(CheckoutError::InvalidForm(missing));
        }

        Ok((address, payment_method))
    }
}
