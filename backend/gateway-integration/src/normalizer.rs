use std::sync::Arc;

use common_utils::{id_type::GatewayAccountId, IdGenerator, UuidV7Generator};

use crate::{
    configs::Config,
    gateways::StripePaymentMethod,
    logger,
    types::{NormalizationContext, NormalizedPaymentMethod, UpstreamPaymentMethod},
};

/// Converts upstream payment-method records into normalized views.
///
/// Holds only immutable settings and the identifier generator, so a single instance can be
/// shared across threads.
#[derive(Clone, Debug)]
pub struct Normalizer {
    context: NormalizationContext,
}

impl Normalizer {
    pub fn new(config: &Config) -> Self {
        Self::with_id_generator(config, Arc::new(UuidV7Generator))
    }

    pub fn with_id_generator(config: &Config, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            context: NormalizationContext {
                card_policy: config.card.policy(),
                contact: config.contact.into(),
                id_generator,
            },
        }
    }

    /// Wraps the upstream record in its gateway's view. This never fails: problems with the
    /// record surface from the view accessor that needs the offending data.
    #[logger::instrument(skip_all, fields(gateway = %upstream.gateway(), account_id = %account_id))]
    pub fn normalize(
        &self,
        account_id: GatewayAccountId,
        upstream: UpstreamPaymentMethod,
    ) -> NormalizedPaymentMethod {
        logger::debug!("normalizing upstream payment method");
        match upstream {
            UpstreamPaymentMethod::Stripe(record) => NormalizedPaymentMethod::Stripe(
                StripePaymentMethod::new(account_id, record, self.context.clone()),
            ),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
