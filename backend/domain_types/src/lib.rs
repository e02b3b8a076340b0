pub mod billing_address;
pub mod errors;
pub mod payment_source;
pub mod upstream;
pub mod utils;
