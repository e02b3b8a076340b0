/// Reasons a payment-method record cannot be normalized.
///
/// Each accessor fails with exactly one of these at the first violated precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NormalizationError {
    #[error("Payment method record does not carry an identifier")]
    MissingIdentifier,
    #[error("Billing details are incomplete: {field_name} is missing or unusable")]
    IncompleteBillingDetails { field_name: &'static str },
    #[error("Unrecognized region code in {field_name}")]
    InvalidRegionCode { field_name: &'static str },
    #[error("Malformed contact information in {field_name}")]
    InvalidContactInfo { field_name: &'static str },
    #[error("Unsupported payment instrument type `{instrument_type}`")]
    UnsupportedInstrumentType { instrument_type: String },
    #[error("Instrument details are incomplete: {field_name} is missing or invalid")]
    IncompleteInstrumentDetails { field_name: &'static str },
}

impl NormalizationError {
    /// Stable, PII-free name of the error kind, for logs and metrics labels.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_snake_case() {
        assert_eq!(NormalizationError::MissingIdentifier.kind(), "missing_identifier");
        assert_eq!(
            NormalizationError::UnsupportedInstrumentType {
                instrument_type: "sepa_debit".to_string()
            }
            .kind(),
            "unsupported_instrument_type"
        );
    }

    #[test]
    fn messages_name_the_field_but_not_its_value() {
        let error = NormalizationError::InvalidContactInfo {
            field_name: "billing_details.email",
        };
        assert_eq!(
            error.to_string(),
            "Malformed contact information in billing_details.email"
        );
    }
}
