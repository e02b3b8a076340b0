use common_enums::{CountryAlpha2, Subdivision};
use common_utils::{
    errors::{CustomResult, ValidationError},
    id_type::BillingAddressId,
    Email, PhoneNumber,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Serialize;

use crate::{errors::NormalizationError, utils::missing_billing_field};

/// Billing details as reported by a gateway, before any validation.
///
/// Gateway transformers fill this in from their own schema; empty strings should already be
/// mapped to `None`.
#[derive(Clone, Debug, Default)]
pub struct BillingDetailsInput {
    pub name: Option<Secret<String>>,
    pub email: Option<Secret<String>>,
    pub phone: Option<Secret<String>>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<Secret<String>>,
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub state: Option<String>,
}

/// Which contact details must be present on a billing address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactRequirements {
    pub require_email: bool,
    pub require_phone: bool,
}

/// A full name split into its first and last components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullName {
    pub first_name: Secret<String>,
    pub last_name: Secret<String>,
}

impl FullName {
    /// Splits on the first whitespace character: everything before it is the first name,
    /// everything after it (further spaces included) is the last name.
    pub fn split(full_name: &str) -> CustomResult<Self, ValidationError> {
        let (first_name, last_name) = full_name
            .trim()
            .split_once(char::is_whitespace)
            .map(|(first_name, last_name)| (first_name, last_name.trim_start()))
            .filter(|(first_name, last_name)| !first_name.is_empty() && !last_name.is_empty())
            .ok_or_else(|| {
                report!(ValidationError::InvalidValue {
                    message: "full name must contain a first and a last name".to_string(),
                })
            })?;

        Ok(Self {
            first_name: Secret::new(first_name.to_string()),
            last_name: Secret::new(last_name.to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BillingAddress {
    pub id: BillingAddressId,
    pub first_name: Secret<String>,
    pub last_name: Secret<String>,
    pub city: String,
    pub country: CountryAlpha2,
    pub postal_code: Secret<String>,
    pub email: Option<Email>,
    pub phone: Option<PhoneNumber>,
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub state: Option<Subdivision>,
}

impl BillingAddress {
    /// Validates gateway billing details into a billing address carrying the given id.
    pub fn try_from_details(
        id: BillingAddressId,
        details: BillingDetailsInput,
        requirements: ContactRequirements,
    ) -> CustomResult<Self, NormalizationError> {
        let name = details
            .name
            .ok_or_else(missing_billing_field("billing_details.name"))?;
        let FullName {
            first_name,
            last_name,
        } = FullName::split(name.peek()).change_context(
            NormalizationError::IncompleteBillingDetails {
                field_name: "billing_details.name",
            },
        )?;

        let city = details
            .city
            .ok_or_else(missing_billing_field("billing_details.address.city"))?;
        let country = details
            .country
            .ok_or_else(missing_billing_field("billing_details.address.country"))?;
        let postal_code = details
            .postal_code
            .ok_or_else(missing_billing_field("billing_details.address.postal_code"))?;

        let country = CountryAlpha2::from_code(&country).change_context(
            NormalizationError::InvalidRegionCode {
                field_name: "billing_details.address.country",
            },
        )?;
        let state = details
            .state
            .map(|state| country.parse_subdivision(&state))
            .transpose()
            .change_context(NormalizationError::InvalidRegionCode {
                field_name: "billing_details.address.state",
            })?;

        let email = match details.email {
            Some(email) => Some(email.peek().parse::<Email>().change_context(
                NormalizationError::InvalidContactInfo {
                    field_name: "billing_details.email",
                },
            )?),
            None if requirements.require_email => {
                return Err(missing_billing_field("billing_details.email")());
            }
            None => None,
        };
        let phone = match details.phone {
            Some(phone) => Some(
                PhoneNumber::parse_with_region(phone.peek(), Some(country)).change_context(
                    NormalizationError::InvalidContactInfo {
                        field_name: "billing_details.phone",
                    },
                )?,
            ),
            None if requirements.require_phone => {
                return Err(missing_billing_field("billing_details.phone")());
            }
            None => None,
        };

        Ok(Self {
            id,
            first_name,
            last_name,
            city: city.trim().to_string(),
            country,
            postal_code,
            email,
            phone,
            line1: details.line1,
            line2: details.line2,
            state,
        })
    }

    /// Compares every field except the generated identifier.
    pub fn same_details_as(&self, other: &Self) -> bool {
        Self {
            id: other.id,
            ..self.clone()
        } == *other
    }
}
