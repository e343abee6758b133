use sha2::{Digest, Sha256};

use crate::domain::value_objects::Fingerprint;

/// Compute a SHA-256 fingerprint of an uploaded export.
///
/// The hash covers the raw file bytes, so two uploads of the same file give
/// the same fingerprint even though each run gets a fresh report id.
pub fn fingerprint(bytes: &[u8]) -> Fingerprint {
    let hash = Sha256::digest(bytes);
    Fingerprint(format!("{:x}", hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_same_fingerprint() {
        assert_eq!(fingerprint(b"order export"), fingerprint(b"order export"));
    }

    #[test]
    fn different_bytes_different_fingerprint() {
        assert_ne!(fingerprint(b"order export"), fingerprint(b"order export 2"));
    }

    #[test]
    fn empty_input_is_well_defined() {
        assert_eq!(
            fingerprint(b"").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
