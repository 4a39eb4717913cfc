/// Value objects that contribute to a message signature.
///
/// Implementors push their values in the exact order the gateway expects.
/// Composite messages call into their parts, so the order is always spelled
/// out in code and never derived from map iteration.
pub trait SignatureFields {
    /// Append this value's fields to `fields`
    fn append_signature_fields(&self, fields: &mut Vec<String>);

    /// Collect this value's fields into a fresh sequence
    fn signature_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        self.append_signature_fields(&mut fields);
        fields
    }
}

/// Absent optional values sign as an empty string
pub(crate) fn optional_field(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
