use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::core::{AppError, Result};

type HmacSha512 = Hmac<Sha512>;

/// Turns a canonical signature field sequence into a signature and back
pub trait Signer: Send + Sync {
    /// Sign the given fields, returning the lower-case hex signature
    fn sign(&self, fields: &[String]) -> String;

    /// Check a received signature against the given fields
    fn verify(&self, fields: &[String], signature: &str) -> bool;
}

/// HMAC-SHA512 signer keyed with the merchant's signing key
///
/// The gateway hands out the signing key base64 encoded. Fields are joined
/// with `,` before hashing.
#[derive(Clone)]
pub struct HmacSigner {
    key: Vec<u8>,
}

impl HmacSigner {
    /// Create a signer from the base64 signing key shown in the merchant dashboard
    pub fn new(signing_key: &str) -> Result<Self> {
        let key = STANDARD
            .decode(signing_key.trim())
            .map_err(|e| AppError::configuration(format!("Invalid signing key: {}", e)))?;

        if key.is_empty() {
            return Err(AppError::configuration("Signing key cannot be empty"));
        }

        Ok(Self { key })
    }

    fn mac(&self, fields: &[String]) -> HmacSha512 {
        let mut mac =
            HmacSha512::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(fields.join(",").as_bytes());
        mac
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner").field("key", &"<redacted>").finish()
    }
}

impl Signer for HmacSigner {
    fn sign(&self, fields: &[String]) -> String {
        hex::encode(self.mac(fields).finalize().into_bytes())
    }

    fn verify(&self, fields: &[String], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            tracing::warn!("Received signature is not valid hex");
            return false;
        };

        // verify_slice compares in constant time
        self.mac(fields).verify_slice(&expected).is_ok()
    }
}
