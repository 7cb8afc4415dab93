//! The payment form shown during onboarding: input formatting, field-level
//! validation, and the price quote.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::Money;

/// Sales tax applied to every subscription checkout, in basis points.
pub const TAX_BASIS_POINTS: u64 = 800;

static EMAIL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static regex"));
static EXPIRY_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("static regex"));

// ─── Form ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
  Email,
  CardNumber,
  ExpiryDate,
  Cvv,
  CardholderName,
  BillingAddress,
  City,
  ZipCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentForm {
  pub email:           String,
  pub card_number:     String,
  pub expiry_date:     String,
  pub cvv:             String,
  pub cardholder_name: String,
  pub billing_address: String,
  pub city:            String,
  pub zip_code:        String,
}

impl PaymentForm {
  /// Store `value` into `field`, normalising it the way the form inputs do.
  pub fn set(&mut self, field: Field, value: &str) {
    match field {
      Field::Email => self.email = value.to_owned(),
      Field::CardNumber => self.card_number = format_card_number(value),
      Field::ExpiryDate => self.expiry_date = format_expiry(value),
      Field::Cvv => self.cvv = format_cvv(value),
      Field::CardholderName => self.cardholder_name = value.to_owned(),
      Field::BillingAddress => self.billing_address = value.to_owned(),
      Field::City => self.city = value.to_owned(),
      Field::ZipCode => self.zip_code = value.to_owned(),
    }
  }

  /// Check every field and report each failure with its message.
  pub fn validate(&self) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if self.email.is_empty() {
      errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&self.email) {
      errors.insert(Field::Email, "Please enter a valid email address");
    }

    let digits: String =
      self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
      errors.insert(Field::CardNumber, "Please enter a valid 16-digit card number");
    }

    if !EXPIRY_RE.is_match(&self.expiry_date) {
      errors.insert(Field::ExpiryDate, "Please enter expiry date in MM/YY format");
    }

    if self.cvv.len() != 3 || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
      errors.insert(Field::Cvv, "Please enter a valid 3-digit CVV");
    }

    let required = [
      (Field::CardholderName, &self.cardholder_name, "Cardholder name is required"),
      (Field::BillingAddress, &self.billing_address, "Billing address is required"),
      (Field::City, &self.city, "City is required"),
      (Field::ZipCode, &self.zip_code, "ZIP code is required"),
    ];
    for (field, value, message) in required {
      if value.trim().is_empty() {
        errors.insert(field, message);
      }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
  }

  /// The last four card digits, for receipts.
  pub fn card_last4(&self) -> String {
    let digits: Vec<char> =
      self.card_number.chars().filter(char::is_ascii_digit).collect();
    digits[digits.len().saturating_sub(4)..].iter().collect()
  }
}

/// Field-level validation failures, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
  fn insert(&mut self, field: Field, message: &str) {
    self.0.insert(field, message.to_owned());
  }

  pub fn get(&self, field: Field) -> Option<&str> {
    self.0.get(&field).map(String::as_str)
  }

  pub fn contains(&self, field: Field) -> bool { self.0.contains_key(&field) }

  /// Drop the error for `field`, as editing the field does.
  pub fn clear(&mut self, field: Field) { self.0.remove(&field); }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
    self.0.iter().map(|(f, m)| (*f, m.as_str()))
  }
}

// ─── Input formatting ────────────────────────────────────────────────────────

fn digits_only(value: &str) -> String {
  value.chars().filter(char::is_ascii_digit).collect()
}

/// Digits grouped in fours: `4242424242424242` → `4242 4242 4242 4242`.
pub fn format_card_number(value: &str) -> String {
  let digits = digits_only(value);
  let mut out = String::with_capacity(19);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && i % 4 == 0 {
      out.push(' ');
    }
    out.push(ch);
  }
  out.chars().take(19).collect()
}

/// `1226` → `12/26`. Fewer than four digits are left unslashed.
pub fn format_expiry(value: &str) -> String {
  let digits = digits_only(value);
  if digits.len() >= 4 {
    format!("{}/{}", &digits[..2], &digits[2..4])
  } else {
    digits
  }
}

pub fn format_cvv(value: &str) -> String {
  digits_only(value).chars().take(3).collect()
}

// ─── Quote ───────────────────────────────────────────────────────────────────

/// What the fan is charged for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
  pub subtotal: Money,
  pub tax:      Money,
  pub total:    Money,
}

impl Quote {
  /// Subtotal plus [`TAX_BASIS_POINTS`] tax, rounded half-up to the cent.
  pub fn for_price(subtotal: Money) -> Self {
    let tax = subtotal.percent(TAX_BASIS_POINTS);
    Self { subtotal, tax, total: subtotal + tax }
  }
}
