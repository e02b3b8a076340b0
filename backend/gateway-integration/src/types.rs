use std::{fmt, sync::Arc};

use common_enums::Gateway;
use common_utils::{
    errors::{CustomResult, ParsingError},
    id_type::{GatewayAccountId, PaymentMethodId},
    IdGenerator,
};
use domain_types::{
    billing_address::{BillingAddress, ContactRequirements},
    errors::NormalizationError,
    payment_source::{CardPolicy, PaymentSource},
    upstream::UpstreamRecord,
};
use interfaces::PaymentMethodView;
use serde_json::{Map, Value};

use crate::gateways::StripePaymentMethod;

/// A raw payment-method record tagged with the gateway that produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum UpstreamPaymentMethod {
    Stripe(UpstreamRecord),
}

impl UpstreamPaymentMethod {
    pub fn from_json(gateway: Gateway, value: Value) -> CustomResult<Self, ParsingError> {
        let record = UpstreamRecord::try_from(value)?;
        Ok(match gateway {
            Gateway::Stripe => Self::Stripe(record),
        })
    }

    pub fn gateway(&self) -> Gateway {
        match self {
            Self::Stripe(_) => Gateway::Stripe,
        }
    }
}

/// Everything a gateway view needs besides the record itself.
#[derive(Clone)]
pub struct NormalizationContext {
    pub card_policy: CardPolicy,
    pub contact: ContactRequirements,
    pub id_generator: Arc<dyn IdGenerator>,
}

impl fmt::Debug for NormalizationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizationContext")
            .field("card_policy", &self.card_policy)
            .field("contact", &self.contact)
            .finish_non_exhaustive()
    }
}

/// The normalized view over an upstream payment method.
#[derive(Clone, Debug)]
pub enum NormalizedPaymentMethod {
    Stripe(StripePaymentMethod),
}

impl NormalizedPaymentMethod {
    fn view(&self) -> &dyn PaymentMethodView {
        match self {
            Self::Stripe(payment_method) => payment_method,
        }
    }
}

impl PaymentMethodView for NormalizedPaymentMethod {
    fn gateway(&self) -> Gateway {
        self.view().gateway()
    }

    fn is_valid(&self) -> bool {
        self.view().is_valid()
    }

    fn id(&self) -> CustomResult<PaymentMethodId, NormalizationError> {
        self.view().id()
    }

    fn gateway_account_id(&self) -> GatewayAccountId {
        self.view().gateway_account_id()
    }

    fn raw_data(&self) -> Map<String, Value> {
        self.view().raw_data()
    }

    fn billing_address(&self) -> CustomResult<BillingAddress, NormalizationError> {
        self.view().billing_address()
    }

    fn source(&self) -> CustomResult<PaymentSource, NormalizationError> {
        self.view().source()
    }
}
