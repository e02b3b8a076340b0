//! Common ID types

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{fp_utils::when, CustomResult, ValidationError};

/// An identifier assigned by an upstream system, kept verbatim apart from surrounding whitespace
#[derive(Debug, PartialEq, Hash, Serialize, Clone, Eq)]
pub(crate) struct ReferenceId(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("identifier must not be blank")]
/// The error type for a blank reference id
pub struct BlankReferenceIdError;

impl<'de> Deserialize<'de> for ReferenceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let deserialized_string = String::deserialize(deserializer)?;
        Self::from(deserialized_string.into()).map_err(serde::de::Error::custom)
    }
}

impl ReferenceId {
    /// Creates a new reference id from string, rejecting blank input
    pub fn from(input_string: Cow<'static, str>) -> Result<Self, BlankReferenceIdError> {
        let trimmed_input_string = input_string.trim();
        when(trimmed_input_string.is_empty(), || Err(BlankReferenceIdError))?;

        Ok(Self(trimmed_input_string.to_string()))
    }
}

crate::id_type!(
    PaymentMethodId,
    "A type for payment_method_id as assigned by the upstream gateway"
);
crate::impl_id_type_methods!(PaymentMethodId, "payment_method_id");

// This is to display the `PaymentMethodId` as PaymentMethodId(pm_abcd)
crate::impl_debug_id_type!(PaymentMethodId);
crate::impl_try_from_cow_str_id_type!(PaymentMethodId, "payment_method_id");

impl PaymentMethodId {
    /// Wrap a string inside PaymentMethodId
    pub fn wrap(payment_method_id: String) -> CustomResult<Self, ValidationError> {
        Self::try_from(Cow::from(payment_method_id))
    }
}

impl FromStr for PaymentMethodId {
    type Err = error_stack::Report<ValidationError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cow_string = Cow::Owned(s.to_string());
        Self::try_from(cow_string)
    }
}

impl fmt::Display for PaymentMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_string_repr())
    }
}

crate::uuid_id_type!(
    GatewayAccountId,
    "The merchant account under which a payment method was created at the gateway",
    "gateway_account_id"
);

crate::uuid_id_type!(
    BillingAddressId,
    "A locally generated identifier for a normalized billing address"
);

impl BillingAddressId {
    /// Generate a fresh billing address id from the given generator.
    pub fn generate(generator: &dyn IdGenerator) -> Self {
        Self::new(generator.generate_uuid())
    }
}

/// An interface to generate object identifiers.
pub trait IdGenerator: Send + Sync {
    /// Generates a new, unique identifier.
    fn generate_uuid(&self) -> uuid::Uuid;
}

/// Generates time-ordered UUIDv7 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn generate_uuid(&self) -> uuid::Uuid {
        uuid::Uuid::now_v7()
    }
}
