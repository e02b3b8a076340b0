use std::fmt;

use common_enums::CardNetwork;
use common_utils::{
    consts::{CARD_BIN_LENGTH, CARD_LAST_FOUR_LENGTH, MIN_CARD_EXPIRATION_YEAR},
    date_time,
    errors::{CustomResult, ValidationError},
    fp_utils::when,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{PeekInterface, Secret, StrongSecret};
use serde::{Deserialize, Serialize};
use time::{util::days_in_year_month, Date, Duration, Month, PrimitiveDateTime, Time};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardExpirationMonth(StrongSecret<u8>);

impl CardExpirationMonth {
    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek())
    }
}

impl TryFrom<u8> for CardExpirationMonth {
    type Error = error_stack::Report<ValidationError>;

    fn try_from(month: u8) -> Result<Self, Self::Error> {
        when(!(1..=12).contains(&month), || {
            Err(report!(ValidationError::InvalidValue {
                message: "invalid card expiration month".to_string()
            }))
        })?;
        Ok(Self(StrongSecret::new(month)))
    }
}

impl<'de> Deserialize<'de> for CardExpirationMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let month = u8::deserialize(deserializer)?;
        Self::try_from(month).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardExpirationYear(StrongSecret<u16>);

impl CardExpirationYear {
    pub fn four_digits(&self) -> String {
        self.0.peek().to_string()
    }

    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek() % 100)
    }
}

impl TryFrom<u16> for CardExpirationYear {
    type Error = error_stack::Report<ValidationError>;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        when(!(MIN_CARD_EXPIRATION_YEAR..=9999).contains(&year), || {
            Err(report!(ValidationError::InvalidValue {
                message: "invalid card expiration year".to_string()
            }))
        })?;
        Ok(Self(StrongSecret::new(year)))
    }
}

impl<'de> Deserialize<'de> for CardExpirationYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let year = u16::deserialize(deserializer)?;
        Self::try_from(year).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardExpiration {
    pub month: CardExpirationMonth,
    pub year: CardExpirationYear,
}

impl CardExpiration {
    pub fn new(month: u8, year: u16) -> CustomResult<Self, ValidationError> {
        Ok(Self {
            month: CardExpirationMonth::try_from(month)?,
            year: CardExpirationYear::try_from(year)?,
        })
    }

    /// Last instant at which the card is still usable, in UTC.
    ///
    /// A card expires at the end of the last day of its expiration month. One day is added on
    /// top to cover the largest offset between UTC and the card holder's local time zone.
    pub fn expires_at(&self) -> CustomResult<PrimitiveDateTime, ValidationError> {
        let invalid_date = || ValidationError::InvalidValue {
            message: "card expiration is not a calendar date".to_string(),
        };
        let year = i32::from(*self.year.0.peek());
        let month = Month::try_from(*self.month.0.peek()).change_context_lazy(invalid_date)?;
        let expiration_day = days_in_year_month(year, month);
        let expiration_date =
            Date::from_calendar_date(year, month, expiration_day).change_context_lazy(invalid_date)?;

        Ok(PrimitiveDateTime::new(expiration_date, Time::MIDNIGHT).saturating_add(Duration::days(1)))
    }

    pub fn is_expired_at(&self, now: PrimitiveDateTime) -> CustomResult<bool, ValidationError> {
        Ok(now > self.expires_at()?)
    }

    pub fn is_expired(&self) -> CustomResult<bool, ValidationError> {
        self.is_expired_at(date_time::now())
    }

    pub fn get_month(&self) -> &CardExpirationMonth {
        &self.month
    }

    pub fn get_year(&self) -> &CardExpirationYear {
        &self.year
    }
}

impl PeekInterface<StrongSecret<u8>> for CardExpirationMonth {
    fn peek(&self) -> &StrongSecret<u8> {
        &self.0
    }
}

impl PeekInterface<StrongSecret<u16>> for CardExpirationYear {
    fn peek(&self) -> &StrongSecret<u16> {
        &self.0
    }
}

/// The trailing four digits of a card number, the only digits a gateway discloses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CardLastFour(String);

impl CardLastFour {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CardLastFour {
    type Error = error_stack::Report<ValidationError>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        when(
            value.len() != CARD_LAST_FOUR_LENGTH || !value.bytes().all(|b| b.is_ascii_digit()),
            || {
                Err(report!(ValidationError::InvalidValue {
                    message: format!("card last four must be {CARD_LAST_FOUR_LENGTH} digits"),
                }))
            },
        )?;
        Ok(Self(value.to_string()))
    }
}

impl fmt::Display for CardLastFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card number of which only the last four digits and the network are known.
///
/// The BIN is replaced by a digit-free placeholder so that no part of the PAN beyond the last
/// four digits can ever be stored here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaskedCardNumber {
    masked_bin: String,
    last_four: CardLastFour,
    network: CardNetwork,
}

impl MaskedCardNumber {
    pub fn new(
        masked_bin: &str,
        last_four: CardLastFour,
        network: CardNetwork,
    ) -> CustomResult<Self, ValidationError> {
        validate_masked_bin(masked_bin)?;
        Ok(Self {
            masked_bin: masked_bin.to_string(),
            last_four,
            network,
        })
    }

    pub fn masked_bin(&self) -> &str {
        &self.masked_bin
    }

    pub fn last_four(&self) -> &CardLastFour {
        &self.last_four
    }

    pub fn network(&self) -> CardNetwork {
        self.network
    }
}

impl fmt::Display for MaskedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.masked_bin, self.last_four)
    }
}

/// Checks that a BIN placeholder fits in the BIN and discloses no digits.
pub fn validate_masked_bin(masked_bin: &str) -> CustomResult<(), ValidationError> {
    when(
        masked_bin.is_empty()
            || masked_bin.chars().count() > CARD_BIN_LENGTH
            || masked_bin.chars().any(|c| c.is_ascii_digit()),
        || {
            Err(report!(ValidationError::InvalidValue {
                message: format!(
                    "masked BIN must be 1 to {CARD_BIN_LENGTH} non-digit characters"
                ),
            }))
        },
    )
}

/// The name printed on the card; empty when the gateway does not report one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardHolderName(Secret<String>);

impl CardHolderName {
    pub fn new(name: Option<String>) -> Self {
        Self(Secret::new(
            name.map(|name| name.trim().to_string()).unwrap_or_default(),
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.0.peek().is_empty()
    }
}

impl PeekInterface<Secret<String>> for CardHolderName {
    fn peek(&self) -> &Secret<String> {
        &self.0
    }
}

/// Placeholder for the card security code.
///
/// A security code may never be stored after authorization, so this type has no way of holding
/// one. It serializes as `null`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CardSecurityCode {
    _withheld: (),
}

impl CardSecurityCode {
    pub const fn withheld() -> Self {
        Self { _withheld: () }
    }
}

impl fmt::Debug for CardSecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CardSecurityCode(withheld)")
    }
}

impl Serialize for CardSecurityCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_none()
    }
}
