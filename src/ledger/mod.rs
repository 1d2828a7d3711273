pub mod block;
pub mod model;
pub mod pow;

pub use block::Block;
pub use model::HashChain;

use thiserror::Error;

/// Hex prefix a puzzle digest must exhibit to be accepted.
/// Fixed by the chain contract; not a tunable difficulty.
pub const DIFFICULTY_PREFIX: &str = "00000";

/// Proof carried by the genesis block.
pub const GENESIS_PROOF: u64 = 1;

/// Sentinel `previous_hash` of the genesis block (not a real digest).
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Malformed input to the ledger, distinct from "the chain is invalid".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("cannot validate an empty chain; a chain holds at least its genesis block")]
    EmptyChain,
}
