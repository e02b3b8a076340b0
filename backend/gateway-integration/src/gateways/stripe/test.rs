#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    };

    use common_enums::{CardNetwork, CountryAlpha2, Gateway, Subdivision, UsStatesAbbreviation};
    use common_utils::{id_type::GatewayAccountId, IdGenerator};
    use domain_types::{errors::NormalizationError, payment_source::PaymentSource};
    use hyperswitch_masking::PeekInterface;
    use interfaces::PaymentMethodView;
    use serde_json::{json, Value};

    use crate::{
        configs::Config, normalizer::Normalizer, types::NormalizedPaymentMethod,
        UpstreamPaymentMethod,
    };

    /// Hands out UUIDs counting up from one.
    #[derive(Default)]
    struct SequentialIdGenerator(AtomicU64);

    impl IdGenerator for SequentialIdGenerator {
        fn generate_uuid(&self) -> uuid::Uuid {
            let next = self.0.fetch_add(1, Ordering::SeqCst) + 1;
            uuid::Uuid::from_u128(u128::from(next))
        }
    }

    fn account_id() -> GatewayAccountId {
        GatewayAccountId::new(uuid::Uuid::from_u128(0xacc0))
    }

    fn card_payment_method() -> Value {
        json!({
            "id": "pm_1NxGz2LkdIwHu7ixY8PqYvVd",
            "object": "payment_method",
            "billing_details": {
                "name": "Jane Doe",
                "email": "jane.doe@example.com",
                "phone": "+14155552671",
                "address": {
                    "city": "San Francisco",
                    "country": "US",
                    "postal_code": "94103",
                    "line1": "510 Townsend St",
                    "line2": null,
                    "state": "CA"
                }
            },
            "type": "card",
            "card": {
                "last4": "4242",
                "brand": "visa",
                "exp_month": 12,
                "exp_year": 2030,
                "funding": "credit"
            }
        })
    }

    fn normalize_with(normalizer: &Normalizer, raw: Value) -> NormalizedPaymentMethod {
        let upstream = UpstreamPaymentMethod::from_json(Gateway::Stripe, raw).unwrap();
        normalizer.normalize(account_id(), upstream)
    }

    fn normalize(raw: Value) -> NormalizedPaymentMethod {
        normalize_with(&Normalizer::default(), raw)
    }

    /// Sets the field at `pointer`, adding it when the parent object lacks it.
    fn with(mut raw: Value, pointer: &str, value: Value) -> Value {
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        raw.pointer_mut(parent)
            .and_then(Value::as_object_mut)
            .unwrap()
            .insert(key.to_string(), value);
        raw
    }

    mod identifiers {
        use super::*;

        #[test]
        fn valid_records_expose_their_identifiers() {
            let payment_method = normalize(card_payment_method());

            assert!(payment_method.is_valid());
            assert_eq!(payment_method.gateway(), Gateway::Stripe);
            assert_eq!(
                payment_method.id().unwrap().get_string_repr(),
                "pm_1NxGz2LkdIwHu7ixY8PqYvVd"
            );
            assert_eq!(payment_method.gateway_account_id(), account_id());
        }

        #[test]
        fn records_without_an_identifier_are_invalid() {
            for id in [Value::Null, json!(""), json!("   ")] {
                let payment_method = normalize(with(card_payment_method(), "/id", id));

                assert!(!payment_method.is_valid());
                assert_eq!(
                    payment_method.id().unwrap_err().current_context(),
                    &NormalizationError::MissingIdentifier
                );
            }

            let mut raw = card_payment_method();
            raw.as_object_mut().unwrap().remove("id");
            let payment_method = normalize(raw);
            assert!(!payment_method.is_valid());
            assert!(payment_method.id().is_err());
        }

        #[test]
        fn present_identifiers_always_convert() {
            for id in ["pm.123".to_string(), "pm 123".to_string(), "p".repeat(300)] {
                let payment_method = normalize(with(card_payment_method(), "/id", json!(id)));

                assert!(payment_method.is_valid());
                assert_eq!(payment_method.id().unwrap().get_string_repr(), id);
            }
        }

        #[test]
        fn non_string_identifiers_are_absent() {
            for id in [json!(123), json!({ "id": "pm_123" }), json!(["pm_123"])] {
                let payment_method = normalize(with(card_payment_method(), "/id", id));

                assert!(!payment_method.is_valid());
                assert_eq!(
                    payment_method.id().unwrap_err().current_context(),
                    &NormalizationError::MissingIdentifier
                );
            }
        }
    }

    mod billing_address {
        use super::*;

        #[test]
        fn builds_the_billing_address() {
            let address = normalize(card_payment_method()).billing_address().unwrap();

            assert_eq!(address.first_name.peek(), "Jane");
            assert_eq!(address.last_name.peek(), "Doe");
            assert_eq!(address.city, "San Francisco");
            assert_eq!(address.country, CountryAlpha2::US);
            assert_eq!(address.postal_code.peek(), "94103");
            assert_eq!(address.email.unwrap().peek(), "jane.doe@example.com");
            assert_eq!(address.phone.unwrap().peek(), "+14155552671");
            assert_eq!(address.line1.unwrap().peek(), "510 Townsend St");
            assert!(address.line2.is_none());
            assert_eq!(
                address.state,
                Some(Subdivision::Us(UsStatesAbbreviation::CA))
            );
        }

        #[test]
        fn multi_part_names_keep_the_rest_as_last_name() {
            let raw = with(
                card_payment_method(),
                "/billing_details/name",
                json!("Mary Anne Smith"),
            );
            let address = normalize(raw).billing_address().unwrap();

            assert_eq!(address.first_name.peek(), "Mary");
            assert_eq!(address.last_name.peek(), "Anne Smith");
        }

        #[test]
        fn single_token_names_are_incomplete() {
            let raw = with(card_payment_method(), "/billing_details/name", json!("Cher"));
            let error = normalize(raw).billing_address().unwrap_err();

            assert_eq!(
                error.current_context(),
                &NormalizationError::IncompleteBillingDetails {
                    field_name: "billing_details.name"
                }
            );
        }

        #[test]
        fn missing_billing_details_are_incomplete() {
            for raw in [
                with(card_payment_method(), "/billing_details", Value::Null),
                with(card_payment_method(), "/billing_details/address", Value::Null),
                with(
                    card_payment_method(),
                    "/billing_details/address/postal_code",
                    json!(""),
                ),
                with(card_payment_method(), "/billing_details", json!("Jane Doe")),
            ] {
                let error = normalize(raw).billing_address().unwrap_err();
                assert_eq!(error.current_context().kind(), "incomplete_billing_details");
            }
        }

        #[test]
        fn unknown_region_codes_are_rejected() {
            for (pointer, value) in [
                ("/billing_details/address/country", "ZZ"),
                ("/billing_details/address/state", "XX"),
            ] {
                let raw = with(card_payment_method(), pointer, json!(value));
                let error = normalize(raw).billing_address().unwrap_err();
                assert_eq!(error.current_context().kind(), "invalid_region_code");
            }
        }

        #[test]
        fn foreign_addresses_keep_free_form_states() {
            let raw = with(
                card_payment_method(),
                "/billing_details/address",
                json!({
                    "city": "Paris",
                    "country": "FR",
                    "postal_code": "75001",
                    "line1": "1 Rue de Rivoli",
                    "state": "Île-de-France"
                }),
            );
            let raw = with(raw, "/billing_details/phone", json!("+33 1 42 68 53 00"));
            let address = normalize(raw).billing_address().unwrap();

            assert_eq!(address.country, CountryAlpha2::FR);
            assert_eq!(
                address.state,
                Some(Subdivision::Other("Île-de-France".to_string()))
            );
        }

        #[test]
        fn malformed_contact_details_are_rejected() {
            for (pointer, value) in [
                ("/billing_details/email", "jane.doe"),
                ("/billing_details/phone", "call me maybe"),
            ] {
                let raw = with(card_payment_method(), pointer, json!(value));
                let error = normalize(raw).billing_address().unwrap_err();
                assert_eq!(error.current_context().kind(), "invalid_contact_info");
            }
        }

        #[test]
        fn contact_details_are_optional_unless_required() {
            let raw = with(card_payment_method(), "/billing_details/email", json!(""));
            let raw = with(raw, "/billing_details/phone", Value::Null);
            let address = normalize(raw.clone()).billing_address().unwrap();
            assert!(address.email.is_none());
            assert!(address.phone.is_none());

            let config = Config::from_toml_str("[contact]\nrequire_phone = true").unwrap();
            let error = normalize_with(&Normalizer::new(&config), raw)
                .billing_address()
                .unwrap_err();
            assert_eq!(
                error.current_context(),
                &NormalizationError::IncompleteBillingDetails {
                    field_name: "billing_details.phone"
                }
            );
        }

        #[test]
        fn normalizing_twice_differs_only_in_the_generated_id() {
            let first = normalize(card_payment_method()).billing_address().unwrap();
            let second = normalize(card_payment_method()).billing_address().unwrap();

            assert_ne!(first.id, second.id);
            assert!(first.same_details_as(&second));
        }

        #[test]
        fn generated_ids_come_from_the_injected_generator() {
            let ids = |generator: Arc<dyn IdGenerator>| {
                let normalizer = Normalizer::with_id_generator(&Config::default(), generator);
                let payment_method = normalize_with(&normalizer, card_payment_method());
                [
                    payment_method.billing_address().unwrap().id,
                    payment_method.billing_address().unwrap().id,
                ]
            };

            let first = ids(Arc::new(SequentialIdGenerator::default()));
            let second = ids(Arc::new(SequentialIdGenerator::default()));

            assert_eq!(first, second);
            assert_eq!(first[0].get_uuid(), uuid::Uuid::from_u128(1));
            assert_eq!(first[1].get_uuid(), uuid::Uuid::from_u128(2));
        }
    }

    mod source {
        use super::*;

        #[test]
        fn card_records_become_masked_credit_cards() {
            let PaymentSource::CreditCard(card) =
                normalize(card_payment_method()).source().unwrap();

            assert_eq!(card.number.masked_bin(), "******");
            assert_eq!(card.number.last_four().as_str(), "4242");
            assert_eq!(card.number.network(), CardNetwork::Visa);
            assert_eq!(card.expiration.get_month().two_digits(), "12");
            assert_eq!(card.expiration.get_year().four_digits(), "2030");
            assert!(card.holder.is_empty());
        }

        #[test]
        fn full_card_numbers_and_cvcs_are_never_exposed() {
            let raw = with(
                card_payment_method(),
                "/card",
                json!({
                    "last4": "4242",
                    "brand": "visa",
                    "exp_month": 12,
                    "exp_year": 2030,
                    "number": "4242424242424242",
                    "cvc": "314"
                }),
            );
            let source = normalize(raw).source().unwrap();

            let serialized = serde_json::to_string(&source).unwrap();
            let debugged = format!("{source:?}");
            for output in [serialized, debugged] {
                assert!(!output.contains("4242424242424242"));
                assert!(!output.contains("314"));
            }
        }

        #[test]
        fn the_holder_name_is_taken_from_the_card() {
            let raw = with(card_payment_method(), "/card/name", json!("Jane Q Doe"));
            let PaymentSource::CreditCard(card) = normalize(raw).source().unwrap();
            assert_eq!(card.holder.peek().peek(), "Jane Q Doe");
        }

        #[test]
        fn the_masked_bin_placeholder_is_configurable() {
            let config = Config::from_toml_str("[card]\nmasked_bin_placeholder = \"XXXXXX\"")
                .unwrap();
            let PaymentSource::CreditCard(card) =
                normalize_with(&Normalizer::new(&config), card_payment_method())
                    .source()
                    .unwrap();
            assert_eq!(card.number.to_string(), "XXXXXX4242");
        }

        #[test]
        fn other_instrument_types_are_unsupported() {
            let raw = with(card_payment_method(), "/type", json!("sepa_debit"));
            let error = normalize(raw).source().unwrap_err();

            assert_eq!(
                error.current_context(),
                &NormalizationError::UnsupportedInstrumentType {
                    instrument_type: "sepa_debit".to_string()
                }
            );
        }

        #[test]
        fn card_records_without_card_details_are_incomplete() {
            for raw in [
                with(card_payment_method(), "/card", Value::Null),
                with(card_payment_method(), "/card/last4", Value::Null),
                with(card_payment_method(), "/card/brand", Value::Null),
                with(card_payment_method(), "/card/exp_month", json!(13)),
                with(card_payment_method(), "/card/exp_year", json!(2001)),
                with(card_payment_method(), "/card/exp_month", json!("twelve")),
            ] {
                let error = normalize(raw).source().unwrap_err();
                assert_eq!(
                    error.current_context().kind(),
                    "incomplete_instrument_details"
                );
            }
        }

        #[test]
        fn expired_cards_are_accepted_when_configured() {
            let raw = with(card_payment_method(), "/card/exp_year", json!(2001));
            let config = Config::from_toml_str("[card]\nreject_expired = false").unwrap();

            assert!(normalize_with(&Normalizer::new(&config), raw).source().is_ok());
        }
    }

    mod raw_data {
        use super::*;

        #[test]
        fn raw_data_round_trips_even_when_other_accessors_fail() {
            let raw = with(card_payment_method(), "/billing_details/name", json!("Cher"));
            let raw = with(raw, "/type", json!("sepa_debit"));
            let payment_method = normalize(raw.clone());

            assert!(payment_method.billing_address().is_err());
            assert!(payment_method.source().is_err());
            assert_eq!(Value::Object(payment_method.raw_data()), raw);
        }
    }
}
