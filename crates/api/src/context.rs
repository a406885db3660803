use uuid::Uuid;

/// Correlation id for one HTTP request.
///
/// Taken from the caller's `x-request-id` header when present, otherwise
/// minted here. Stored in request extensions and echoed on the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

/// Longest caller-supplied id we are willing to echo back.
pub const MAX_REQUEST_ID_LEN: usize = 128;

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Accept a caller-supplied id if it is non-blank, short and printable ASCII.
    pub fn from_header(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let acceptable = !raw.is_empty()
            && raw.len() <= MAX_REQUEST_ID_LEN
            && raw.bytes().all(|b| b.is_ascii_graphic());
        acceptable.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_uuids() {
        let id = RequestId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, RequestId::generate());
    }

    #[test]
    fn header_value_is_trimmed_and_kept() {
        let id = RequestId::from_header("  abc-123 ").unwrap();
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn unusable_header_values_are_refused() {
        assert!(RequestId::from_header("   ").is_none());
        assert!(RequestId::from_header("has space").is_none());
        assert!(RequestId::from_header(&"a".repeat(MAX_REQUEST_ID_LEN + 1)).is_none());
    }
}
