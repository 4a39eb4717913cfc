pub mod gateway_config;
pub mod payment_request;

pub use gateway_config::GatewayEnvironment;
pub use payment_request::{Customer, PaymentLine, PaymentRequest, PostalAddress};
