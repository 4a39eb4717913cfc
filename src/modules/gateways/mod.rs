pub mod models;
pub mod services;

pub use models::{Customer, GatewayEnvironment, PaymentLine, PaymentRequest, PostalAddress};
pub use services::{HmacSigner, Signer};
