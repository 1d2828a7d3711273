use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

/// A single block in the hash chain. Immutable once created; carries no
/// payload beyond the fields that link it to its predecessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC); opaque to validation
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Create the genesis block: index 1, proof 1, sentinel previous hash.
    pub fn genesis() -> Self {
        Self::new(1, GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string())
    }

    pub fn new(index: u64, proof: u64, previous_hash: String) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp(),
            proof,
            previous_hash,
        }
    }

    /// Canonical serialization fed to the link hash: a compact JSON object
    /// with keys in sorted order and no embedded whitespace. Any two
    /// implementations must produce these exact bytes or their digests
    /// diverge.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        // serde_json::Value objects are backed by a BTreeMap, so keys come
        // out alphabetically; to_string emits the compact form.
        let value = serde_json::json!({
            "index": self.index,
            "timestamp": self.timestamp,
            "proof": self.proof,
            "previous_hash": self.previous_hash,
        });
        serde_json::to_string(&value)
            .expect("block fields serialize to JSON")
            .into_bytes()
    }

    /// SHA-256 over the canonical serialization, lowercase hex.
    pub fn hash(&self) -> String {
        let digest = Sha256::digest(self.canonical_bytes());
        hex::encode(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::Block;

    #[test]
    fn genesis_carries_the_sentinel_fields() {
        let b = Block::genesis();
        assert_eq!(b.index, 1);
        assert_eq!(b.proof, 1);
        assert_eq!(b.previous_hash, "0");
    }

    #[test]
    fn canonical_bytes_sort_keys_without_whitespace() {
        let mut b = Block::genesis();
        b.timestamp = 1_614_556_800;
        let encoded = String::from_utf8(b.canonical_bytes()).unwrap();
        assert_eq!(
            encoded,
            r#"{"index":1,"previous_hash":"0","proof":1,"timestamp":1614556800}"#
        );
    }

    #[test]
    fn hash_depends_only_on_field_values() {
        let a = Block::genesis();
        let b = Block {
            index: a.index,
            timestamp: a.timestamp,
            proof: a.proof,
            previous_hash: a.previous_hash.clone(),
        };
        assert_eq!(a.hash(), b.hash());

        let mut c = b.clone();
        c.proof += 1;
        assert_ne!(a.hash(), c.hash());
    }

    #[test]
    fn hash_is_lowercase_hex_of_sha256() {
        let h = Block::genesis().hash();
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
