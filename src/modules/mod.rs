pub mod gateways;
pub mod orders;
pub mod responses;
