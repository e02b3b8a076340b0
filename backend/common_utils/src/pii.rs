//! Personal Identifiable Information protection.

use std::{convert::AsRef, fmt, ops, str::FromStr};

use common_enums::CountryAlpha2;
use error_stack::ResultExt;
use hyperswitch_masking::{ExposeInterface, Secret, Strategy, WithType};
use serde::Deserialize;

use crate::{
    errors::{self, ValidationError},
    validation::{validate_email, validate_phone_number},
};

/// Strategy for masking Email
#[derive(Debug, Copy, Clone, Deserialize)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((a, b)) => write!(f, "{}@{}", "*".repeat(a.len()), b),
            None => WithType::fmt(val, f),
        }
    }
}

/// Email address
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct Email(Secret<String, EmailStrategy>);

impl ExposeInterface<Secret<String, EmailStrategy>> for Email {
    fn expose(self) -> Secret<String, EmailStrategy> {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = error_stack::Report<errors::ParsingError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).change_context(errors::ParsingError::EmailParsingError)
    }
}

impl ops::Deref for Email {
    type Target = Secret<String, EmailStrategy>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Email {
    type Err = error_stack::Report<ValidationError>;
    fn from_str(email: &str) -> Result<Self, Self::Err> {
        let email = email.trim();
        validate_email(email)?;
        Ok(Self(Secret::new(email.to_string())))
    }
}

/// Strategy for masking a PhoneNumber
#[derive(Debug, Copy, Clone)]
pub enum PhoneNumberStrategy {}

impl<T> Strategy<T> for PhoneNumberStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        let visible_from = val_str.len().saturating_sub(4);

        // masks everything but the last 4 digits
        match (val_str.get(..visible_from), val_str.get(visible_from..)) {
            (Some(masked), Some(visible)) if !masked.is_empty() => {
                write!(f, "{}{}", "*".repeat(masked.chars().count()), visible)
            }
            _ => WithType::fmt(val, f),
        }
    }
}

/// Phone Number
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct PhoneNumber(Secret<String, PhoneNumberStrategy>);

impl PhoneNumber {
    /// Parses a phone number, resolving national formats against the given billing country.
    pub fn parse_with_region(
        phone_number: &str,
        region: Option<CountryAlpha2>,
    ) -> Result<Self, error_stack::Report<ValidationError>> {
        let phone_number = phone_number.trim();
        validate_phone_number(phone_number, region)?;
        Ok(Self(Secret::new(phone_number.to_string())))
    }
}

impl FromStr for PhoneNumber {
    type Err = error_stack::Report<ValidationError>;

    fn from_str(phone_number: &str) -> Result<Self, Self::Err> {
        Self::parse_with_region(phone_number, None)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = error_stack::Report<errors::ParsingError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value).change_context(errors::ParsingError::PhoneNumberParsingError)
    }
}

impl ops::Deref for PhoneNumber {
    type Target = Secret<String, PhoneNumberStrategy>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ExposeInterface<Secret<String, PhoneNumberStrategy>> for PhoneNumber {
    fn expose(self) -> Secret<String, PhoneNumberStrategy> {
        self.0
    }
}
