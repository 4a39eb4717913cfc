pub mod signer;

pub use signer::{HmacSigner, Signer};
