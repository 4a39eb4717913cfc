pub mod signature_fields;

pub use signature_fields::SignatureFields;
