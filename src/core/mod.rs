pub mod currency;
pub mod error;
pub mod money;
pub mod telemetry;
pub mod timezone;
pub mod traits;

pub use currency::Currency;
pub use error::{AppError, Result};
pub use money::Money;
pub use traits::SignatureFields;
