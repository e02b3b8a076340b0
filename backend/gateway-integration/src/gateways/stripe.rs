pub mod test;
pub mod transformers;

use common_enums::Gateway;
use common_utils::{
    errors::CustomResult,
    id_type::{BillingAddressId, GatewayAccountId, PaymentMethodId},
};
use domain_types::{
    billing_address::{BillingAddress, BillingDetailsInput},
    errors::NormalizationError,
    payment_source::{CardDetailsInput, CreditCard, PaymentSource},
    upstream::UpstreamRecord,
    utils::{missing_instrument_field, ForeignFrom},
};
use error_stack::{report, ResultExt};
use interfaces::PaymentMethodView;
use serde_json::{Map, Value};

use self::transformers::{StripeBillingDetails, StripeCard};
use crate::{logger, types::NormalizationContext};

/// A Stripe `PaymentMethod` object viewed through the normalized domain types.
#[derive(Clone, Debug)]
pub struct StripePaymentMethod {
    account_id: GatewayAccountId,
    record: UpstreamRecord,
    context: NormalizationContext,
}

impl StripePaymentMethod {
    pub fn new(
        account_id: GatewayAccountId,
        record: UpstreamRecord,
        context: NormalizationContext,
    ) -> Self {
        Self {
            account_id,
            record,
            context,
        }
    }

    fn upstream_id(&self) -> Option<&str> {
        self.record.get_str(&[transformers::ID])
    }

    // `is_valid` and `id` both go through here so they always agree
    fn payment_method_id(&self) -> Option<PaymentMethodId> {
        self.upstream_id()
            .and_then(|id| PaymentMethodId::wrap(id.to_string()).ok())
    }

    fn log_failure<T>(
        &self,
        accessor: &'static str,
        result: CustomResult<T, NormalizationError>,
    ) -> CustomResult<T, NormalizationError> {
        if let Err(error) = &result {
            logger::warn!(
                gateway = %Gateway::Stripe,
                accessor,
                error_kind = error.current_context().kind(),
                account_id = %self.account_id,
                payment_method_id = self.upstream_id(),
                "payment method field could not be normalized"
            );
        }
        result
    }

    fn build_billing_address(&self) -> CustomResult<BillingAddress, NormalizationError> {
        let details = self
            .record
            .parse_object::<StripeBillingDetails>(transformers::BILLING_DETAILS)
            .change_context(NormalizationError::IncompleteBillingDetails {
                field_name: transformers::BILLING_DETAILS,
            })?
            .unwrap_or_default();

        BillingAddress::try_from_details(
            BillingAddressId::generate(self.context.id_generator.as_ref()),
            BillingDetailsInput::foreign_from(details),
            self.context.contact,
        )
    }

    fn build_source(&self) -> CustomResult<PaymentSource, NormalizationError> {
        match self.record.get_str(&[transformers::PAYMENT_METHOD_TYPE]) {
            Some("card") => {
                let card = self
                    .record
                    .parse_object::<StripeCard>(transformers::CARD)
                    .change_context(NormalizationError::IncompleteInstrumentDetails {
                        field_name: transformers::CARD,
                    })?
                    .ok_or_else(missing_instrument_field(transformers::CARD))?;

                CreditCard::try_from_details(
                    CardDetailsInput::foreign_from(card),
                    &self.context.card_policy,
                )
                .map(PaymentSource::CreditCard)
            }
            other => Err(report!(NormalizationError::UnsupportedInstrumentType {
                instrument_type: other.unwrap_or_default().to_string(),
            })),
        }
    }
}

impl PaymentMethodView for StripePaymentMethod {
    fn gateway(&self) -> Gateway {
        Gateway::Stripe
    }

    fn is_valid(&self) -> bool {
        self.payment_method_id().is_some()
    }

    fn id(&self) -> CustomResult<PaymentMethodId, NormalizationError> {
        let id = self
            .payment_method_id()
            .ok_or_else(|| report!(NormalizationError::MissingIdentifier));
        self.log_failure("id", id)
    }

    fn gateway_account_id(&self) -> GatewayAccountId {
        self.account_id
    }

    fn raw_data(&self) -> Map<String, Value> {
        self.record.as_map().clone()
    }

    fn billing_address(&self) -> CustomResult<BillingAddress, NormalizationError> {
        self.log_failure("billing_address", self.build_billing_address())
    }

    fn source(&self) -> CustomResult<PaymentSource, NormalizationError> {
        self.log_failure("source", self.build_source())
    }
}
