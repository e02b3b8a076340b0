use common_enums::CardNetwork;
use domain_types::{
    billing_address::BillingDetailsInput,
    payment_source::CardDetailsInput,
    utils::{non_blank, ForeignFrom},
};
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Deserialize;

pub const ID: &str = "id";
pub const BILLING_DETAILS: &str = "billing_details";
pub const PAYMENT_METHOD_TYPE: &str = "type";
pub const CARD: &str = "card";

// Stripe sends `""` and `null` interchangeably for unset fields
fn non_blank_secret(value: Option<Secret<String>>) -> Option<Secret<String>> {
    value.filter(|value| !value.peek().trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct StripeBillingDetails {
    pub name: Option<Secret<String>>,
    pub email: Option<Secret<String>>,
    pub phone: Option<Secret<String>>,
    pub address: Option<StripeAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StripeAddress {
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<Secret<String>>,
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub state: Option<String>,
}

/// The card sub-object of a Stripe payment method.
///
/// Stripe never returns a full number or a CVC here, and any such field in the record is
/// ignored rather than deserialized.
#[derive(Debug, Deserialize)]
pub struct StripeCard {
    pub last4: Option<String>,
    pub brand: Option<StripeCardBrand>,
    pub exp_month: Option<u8>,
    pub exp_year: Option<u16>,
    pub name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripeCardBrand {
    Amex,
    CartesBancaires,
    Diners,
    Discover,
    EftposAu,
    Interac,
    Jcb,
    Mastercard,
    Unionpay,
    Visa,
    #[serde(other)]
    Unknown,
}

impl From<StripeCardBrand> for CardNetwork {
    fn from(brand: StripeCardBrand) -> Self {
        match brand {
            StripeCardBrand::Amex => Self::AmericanExpress,
            StripeCardBrand::CartesBancaires => Self::CartesBancaires,
            StripeCardBrand::Diners => Self::DinersClub,
            StripeCardBrand::Discover => Self::Discover,
            StripeCardBrand::EftposAu => Self::Eftpos,
            StripeCardBrand::Interac => Self::Interac,
            StripeCardBrand::Jcb => Self::Jcb,
            StripeCardBrand::Mastercard => Self::Mastercard,
            StripeCardBrand::Unionpay => Self::UnionPay,
            StripeCardBrand::Visa => Self::Visa,
            StripeCardBrand::Unknown => Self::Unknown,
        }
    }
}

impl ForeignFrom<StripeBillingDetails> for BillingDetailsInput {
    fn foreign_from(details: StripeBillingDetails) -> Self {
        let address = details.address.unwrap_or_default();
        Self {
            name: non_blank_secret(details.name),
            email: non_blank_secret(details.email),
            phone: non_blank_secret(details.phone),
            city: non_blank(address.city),
            country: non_blank(address.country),
            postal_code: non_blank_secret(address.postal_code),
            line1: non_blank_secret(address.line1),
            line2: non_blank_secret(address.line2),
            state: non_blank(address.state),
        }
    }
}

impl ForeignFrom<StripeCard> for CardDetailsInput {
    fn foreign_from(card: StripeCard) -> Self {
        Self {
            last4: non_blank(card.last4),
            network: card.brand.map(CardNetwork::from),
            exp_month: card.exp_month,
            exp_year: card.exp_year,
            holder_name: non_blank(card.name),
        }
    }
}
