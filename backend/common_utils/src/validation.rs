//! Custom validations for contact details.

use std::sync::LazyLock;

use common_enums::CountryAlpha2;
use error_stack::report;
use regex::Regex;

use crate::{
    consts::EMAIL_MAX_LENGTH,
    errors::{CustomResult, ValidationError},
    fp_utils::when,
};

/// Validates a given phone number using the [phonenumber] crate.
///
/// Numbers in international format are accepted as-is; national numbers are resolved against
/// `region` when it is known.
pub fn validate_phone_number(
    phone_number: &str,
    region: Option<CountryAlpha2>,
) -> CustomResult<(), ValidationError> {
    let region = region
        .and_then(|country| country.to_string().parse::<phonenumber::country::Id>().ok());

    let parsed = phonenumber::parse(region, phone_number).map_err(|error| {
        report!(ValidationError::InvalidValue {
            message: format!("Could not parse phone number because: {error:?}"),
        })
    })?;

    when(!phonenumber::is_valid(&parsed), || {
        Err(report!(ValidationError::InvalidValue {
            message: "Phone number is not a valid number for its region".into(),
        }))
    })
}

/// Performs a simple validation against a provided email address.
pub fn validate_email(email: &str) -> CustomResult<(), ValidationError> {
    static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
        Regex::new(
            r"^(?i)[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
        )
        .map_err(|error| tracing::error!(?error, "email regex failed to compile"))
        .ok()
    });
    let email_regex = EMAIL_REGEX.as_ref().ok_or_else(|| {
        report!(ValidationError::InvalidValue {
            message: "Invalid regex expression".into()
        })
    })?;

    if email.is_empty() || email.chars().count() > EMAIL_MAX_LENGTH {
        return Err(report!(ValidationError::InvalidValue {
            message: "Email address is either empty or exceeds maximum allowed length".into()
        }));
    }

    if !email_regex.is_match(email) {
        return Err(report!(ValidationError::InvalidValue {
            message: "Invalid email address format".into()
        }));
    }

    Ok(())
}
