use sha1::{Digest, Sha1};
use url::form_urlencoded;

/// Hashed device fingerprint sent as the `hid` parameter.
///
/// The identifier is form-encoded before hashing, matching the wire format
/// the attribution endpoint expects. A missing identifier hashes the empty
/// string rather than failing, so the report still carries a stable `hid`.
pub fn hashed_device_id(device_id: Option<&str>) -> String {
    let encoded = device_id.map(url_encode).unwrap_or_default();
    let digest = Sha1::digest(encoded.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn url_encode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_value() {
        // SHA-1("12345")
        assert_eq!(
            hashed_device_id(Some("12345")),
            "8cb2237d0679ca88db6464eac60da96345513964"
        );
    }

    #[test]
    fn test_missing_id_hashes_empty_string() {
        // SHA-1("")
        let empty = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
        assert_eq!(hashed_device_id(None), empty);
        assert_eq!(hashed_device_id(Some("")), empty);
    }

    #[test]
    fn test_id_is_encoded_before_hashing() {
        // "a b" encodes to "a+b", so the digest is over the encoded form
        assert_eq!(hashed_device_id(Some("a b")), hash_of("a+b"));
        assert_ne!(hashed_device_id(Some("a b")), hash_of("a b"));
    }

    fn hash_of(input: &str) -> String {
        Sha1::digest(input.as_bytes())
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}
