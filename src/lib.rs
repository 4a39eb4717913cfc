//! Rabo OmniKassa 2.0 order messages
//!
//! Builds, signs and parses the messages exchanged with the OmniKassa REST
//! API. Transport is left to the caller.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Currency, Money, Result, SignatureFields};
pub use modules::gateways;
pub use modules::orders;
pub use modules::responses;
