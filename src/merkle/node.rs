use sha2::{Digest, Sha256};

/// SHA-256 of a string's UTF-8 bytes, lowercase hex.
pub fn hash(val: &str) -> String {
    hex::encode(Sha256::digest(val.as_bytes()))
}

/// Double SHA-256: the first digest is hex-encoded before being hashed
/// again. Hardens leaf and branch values against length-extension.
pub fn fullhash(val: &str) -> String {
    hash(&hash(val))
}

/// One node of a Merkle tree. A leaf owns no children and carries the
/// double-hash of its input value; an internal node owns both children and
/// carries the double-hash of their concatenated values.
#[derive(Debug, Clone)]
pub struct MerkleNode {
    pub left: Option<Box<MerkleNode>>,
    pub right: Option<Box<MerkleNode>>,
    pub value: String,
}

impl MerkleNode {
    pub fn leaf(input: &str) -> Self {
        Self {
            left: None,
            right: None,
            value: fullhash(input),
        }
    }

    /// Combine two subtrees under a new parent, taking ownership of both.
    pub fn parent(left: MerkleNode, right: MerkleNode) -> Self {
        let value = fullhash(&format!("{}{}", left.value, right.value));
        Self {
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            value,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{MerkleNode, fullhash, hash};

    #[test]
    fn fullhash_is_hash_of_hex_encoded_hash() {
        assert_eq!(fullhash("Hello"), hash(&hash("Hello")));
        assert_ne!(fullhash("Hello"), hash("Hello"));
    }

    #[test]
    fn leaf_holds_fullhash_of_its_input() {
        let leaf = MerkleNode::leaf("Hello");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.value, fullhash("Hello"));
    }

    #[test]
    fn parent_hashes_concatenated_child_values() {
        let left = MerkleNode::leaf("a");
        let right = MerkleNode::leaf("b");
        let expected = fullhash(&format!("{}{}", left.value, right.value));

        let parent = MerkleNode::parent(left, right);
        assert!(!parent.is_leaf());
        assert_eq!(parent.value, expected);
    }
}
