use crate::core::{AppError, Result, SignatureFields};
use crate::modules::gateways::Signer;

/// Check the signature a gateway message arrived with
pub fn verify_message(
    signer: &dyn Signer,
    message: &impl SignatureFields,
    signature: &str,
    kind: &str,
) -> Result<()> {
    if signer.verify(&message.signature_fields(), signature) {
        return Ok(());
    }

    tracing::warn!(kind, "Signature mismatch on gateway message");

    Err(AppError::signature(format!(
        "Signature of {} does not match its contents",
        kind
    )))
}
