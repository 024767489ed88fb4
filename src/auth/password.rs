use sha2::{Digest, Sha256};

/// Deterministic one-way digest of a plaintext password. The digest is what
/// gets stored; plaintext never reaches the database.
pub fn hash(plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plain.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare a plaintext candidate against a stored digest.
pub fn verify(plain: &str, digest: &str) -> bool {
    hash(plain) == digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash("pw1"), hash("pw1"));
        assert_eq!(hash(""), hash(""));
    }

    #[test]
    fn hash_never_equals_input() {
        for plain in ["pw1", "correct-horse-battery-staple", "x"] {
            assert_ne!(hash(plain), plain);
        }
    }

    #[test]
    fn distinct_inputs_produce_distinct_digests() {
        assert_ne!(hash("pw1"), hash("pw2"));
    }

    #[test]
    fn verify_roundtrip() {
        let digest = hash("s3cret");
        assert!(verify("s3cret", &digest));
        assert!(!verify("wrong", &digest));
    }
}
