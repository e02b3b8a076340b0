use std::path::PathBuf;

use common_utils::consts;
use domain_types::{billing_address::ContactRequirements, payment_source::CardPolicy};

use crate::logger::config::Log;

#[derive(Clone, serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub card: Card,
    pub contact: Contact,
    pub log: Log,
}

#[derive(Clone, serde::Deserialize, Debug)]
#[serde(default)]
pub struct Card {
    /// Reject cards whose expiry month has already ended.
    pub reject_expired: bool,
    /// Stands in for the first six digits of every card number.
    pub masked_bin_placeholder: String,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            reject_expired: true,
            masked_bin_placeholder: consts::DEFAULT_MASKED_BIN.to_string(),
        }
    }
}

impl Card {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        cards::validate_masked_bin(&self.masked_bin_placeholder).map_err(|error| {
            config::ConfigError::Message(format!(
                "Invalid card.masked_bin_placeholder '{}': {}",
                self.masked_bin_placeholder,
                error.current_context()
            ))
        })
    }

    pub fn policy(&self) -> CardPolicy {
        CardPolicy {
            masked_bin: self.masked_bin_placeholder.clone(),
            reject_expired: self.reject_expired,
        }
    }
}

#[derive(Clone, Copy, serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct Contact {
    pub require_email: bool,
    pub require_phone: bool,
}

impl From<Contact> for ContactRequirements {
    fn from(contact: Contact) -> Self {
        Self {
            require_email: contact.require_email,
            require_phone: contact.require_phone,
        }
    }
}

impl Config {
    /// Build the configuration from the given TOML file. Without a path, or when the file does
    /// not exist, every setting keeps its default.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(config_path) = explicit_config_path {
            builder = builder.add_source(
                config::File::from(config_path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }
        Self::build(builder)
    }

    /// Build the configuration from TOML source text.
    pub fn from_toml_str(contents: &str) -> Result<Self, config::ConfigError> {
        Self::build(
            config::Config::builder()
                .add_source(config::File::from_str(contents, config::FileFormat::Toml)),
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let config = builder.build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize normalization configuration: {error}");
            error.into_inner()
        })?;

        config.card.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::logger::config::LogFormat;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = Config::new_with_config_path(None).unwrap();
        assert!(config.card.reject_expired);
        assert_eq!(config.card.masked_bin_placeholder, "******");
        assert!(!config.contact.require_email);
        assert!(!config.contact.require_phone);
        assert!(!config.log.console.enabled);
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let config =
            Config::new_with_config_path(Some(PathBuf::from("does/not/exist.toml"))).unwrap();
        assert!(config.card.reject_expired);
    }

    #[test]
    fn settings_are_read_from_toml() {
        let config = Config::from_toml_str(
            r#"
            [card]
            reject_expired = false
            masked_bin_placeholder = "XXXXXX"

            [contact]
            require_email = true

            [log.console]
            enabled = true
            level = "INFO"
            log_format = "json"
            "#,
        )
        .unwrap();

        assert!(!config.card.reject_expired);
        assert_eq!(config.card.policy().masked_bin, "XXXXXX");
        assert!(config.contact.require_email);
        assert!(!config.contact.require_phone);
        assert!(config.log.console.enabled);
        assert_eq!(config.log.console.level.into_level(), tracing::Level::INFO);
        assert_eq!(config.log.console.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_placeholders_are_rejected() {
        for placeholder in ["1234**", "*******", ""] {
            let toml = format!("[card]\nmasked_bin_placeholder = \"{placeholder}\"");
            assert!(Config::from_toml_str(&toml).is_err(), "{placeholder}");
        }
    }

    #[test]
    fn unknown_log_levels_are_rejected() {
        assert!(Config::from_toml_str("[log.console]\nlevel = \"LOUD\"").is_err());
    }
}
