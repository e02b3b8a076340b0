pub mod stripe;
pub use self::stripe::StripePaymentMethod;
