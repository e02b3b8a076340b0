//! Consolidated constants for the normalization crates

// =============================================================================
// Contact Validation Constants
// =============================================================================

/// Maximum length of an email address (64 local part + @ + 255 domain)
pub const EMAIL_MAX_LENGTH: usize = 320;

// =============================================================================
// Card Constants
// =============================================================================

/// Number of trailing card digits a gateway may disclose
pub const CARD_LAST_FOUR_LENGTH: usize = 4;
/// Number of leading card digits (the BIN) that are always masked
pub const CARD_BIN_LENGTH: usize = 6;
/// Placeholder used in place of the undisclosed BIN
pub const DEFAULT_MASKED_BIN: &str = "******";
/// Card networks stopped issuing expiry years before this one
pub const MIN_CARD_EXPIRATION_YEAR: u16 = 1997;
