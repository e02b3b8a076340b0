use crate::errors::NormalizationError;

/// Trait for converting a gateway's own representation into a domain input type
pub trait ForeignFrom<F>: Sized {
    fn foreign_from(from: F) -> Self;
}

pub fn missing_billing_field(
    field_name: &'static str,
) -> Box<dyn Fn() -> error_stack::Report<NormalizationError> + 'static> {
    Box::new(move || NormalizationError::IncompleteBillingDetails { field_name }.into())
}

pub fn missing_instrument_field(
    field_name: &'static str,
) -> Box<dyn Fn() -> error_stack::Report<NormalizationError> + 'static> {
    Box::new(move || NormalizationError::IncompleteInstrumentDetails { field_name }.into())
}

/// Maps empty and whitespace-only strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
