pub mod node;
pub mod tree;

pub use node::MerkleNode;
pub use tree::MerkleTree;

use thiserror::Error;

/// Malformed input to the tree builder, distinct from any hash outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MerkleError {
    #[error("cannot build a merkle tree from an empty value list")]
    EmptyValues,
}
