pub mod configs;
pub mod gateways;
pub mod logger;
pub mod normalizer;
pub mod types;

pub use normalizer::Normalizer;
pub use types::{NormalizedPaymentMethod, UpstreamPaymentMethod};
