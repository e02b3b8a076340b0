use cards::{
    CardExpiration, CardHolderName, CardLastFour, CardSecurityCode, MaskedCardNumber,
};
use common_enums::CardNetwork;
use common_utils::errors::CustomResult;
use error_stack::{report, ResultExt};
use serde::Serialize;

use crate::{errors::NormalizationError, utils::missing_instrument_field};

/// The funding instrument behind a payment method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentSource {
    CreditCard(CreditCard),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreditCard {
    pub number: MaskedCardNumber,
    pub expiration: CardExpiration,
    pub holder: CardHolderName,
    pub cvc: CardSecurityCode,
}

/// Card details as reported by a gateway, before any validation.
///
/// Holds no full card number and no security code.
#[derive(Clone, Debug, Default)]
pub struct CardDetailsInput {
    pub last4: Option<String>,
    pub network: Option<CardNetwork>,
    pub exp_month: Option<u8>,
    pub exp_year: Option<u16>,
    pub holder_name: Option<String>,
}

/// How card details are turned into a [`CreditCard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPolicy {
    pub masked_bin: String,
    pub reject_expired: bool,
}

impl Default for CardPolicy {
    fn default() -> Self {
        Self {
            masked_bin: common_utils::consts::DEFAULT_MASKED_BIN.to_string(),
            reject_expired: true,
        }
    }
}

impl CreditCard {
    pub fn try_from_details(
        details: CardDetailsInput,
        policy: &CardPolicy,
    ) -> CustomResult<Self, NormalizationError> {
        let last4 = details
            .last4
            .ok_or_else(missing_instrument_field("card.last4"))?;
        let network = details
            .network
            .ok_or_else(missing_instrument_field("card.brand"))?;
        let exp_month = details
            .exp_month
            .ok_or_else(missing_instrument_field("card.exp_month"))?;
        let exp_year = details
            .exp_year
            .ok_or_else(missing_instrument_field("card.exp_year"))?;

        let last_four = CardLastFour::try_from(last4.as_str()).change_context(
            NormalizationError::IncompleteInstrumentDetails {
                field_name: "card.last4",
            },
        )?;
        let number = MaskedCardNumber::new(&policy.masked_bin, last_four, network).change_context(
            NormalizationError::IncompleteInstrumentDetails {
                field_name: "card.last4",
            },
        )?;

        let expiration = CardExpiration::new(exp_month, exp_year).change_context(
            NormalizationError::IncompleteInstrumentDetails {
                field_name: "card.exp_month",
            },
        )?;
        if policy.reject_expired {
            let expired = expiration.is_expired().change_context(
                NormalizationError::IncompleteInstrumentDetails {
                    field_name: "card.exp_year",
                },
            )?;
            if expired {
                return Err(report!(NormalizationError::IncompleteInstrumentDetails {
                    field_name: "card.exp_year",
                })
                .attach_printable("card has expired"));
            }
        }

        Ok(Self {
            number,
            expiration,
            holder: CardHolderName::new(details.holder_name),
            cvc: CardSecurityCode::withheld(),
        })
    }
}
