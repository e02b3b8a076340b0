use common_enums::Gateway;
use common_utils::{
    id_type::{GatewayAccountId, PaymentMethodId},
    CustomResult,
};
use domain_types::{
    billing_address::BillingAddress, errors::NormalizationError, payment_source::PaymentSource,
};
use serde_json::{Map, Value};

/// Read-only view over a payment method received from an upstream gateway.
///
/// Every accessor is independent of the others: a failure in one of them never prevents the
/// remaining ones from succeeding.
pub trait PaymentMethodView {
    /// Which upstream gateway produced the record.
    fn gateway(&self) -> Gateway;

    /// Whether the upstream record carries a non-empty identifier.
    fn is_valid(&self) -> bool;

    fn id(&self) -> CustomResult<PaymentMethodId, NormalizationError>;

    /// The account supplied by the caller, never derived from gateway data.
    fn gateway_account_id(&self) -> GatewayAccountId;

    /// The upstream record exactly as received.
    fn raw_data(&self) -> Map<String, Value>;

    /// Builds the billing address. Every call generates a fresh address identifier.
    fn billing_address(&self) -> CustomResult<BillingAddress, NormalizationError>;

    fn source(&self) -> CustomResult<PaymentSource, NormalizationError>;
}
