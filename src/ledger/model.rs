use log::debug;

use super::{Block, LedgerError, pow};

/// Append-only proof-of-work hash chain. Blocks are only ever added through
/// [`HashChain::mine`]; the chain never shrinks or reorders.
#[derive(Debug)]
pub struct HashChain {
    pub chain: Vec<Block>,
}

impl HashChain {
    /// Initialize a new chain with its genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
        }
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always holds at least the genesis block")
    }

    /// Solve the puzzle against the tip, link to it by hash, and append the
    /// resulting block. Solving runs to completion; the appended block
    /// satisfies the chain invariant against its predecessor by construction.
    pub fn mine(&mut self) -> &Block {
        let previous = self.last_block();
        let proof = pow::solve(previous.proof);
        let previous_hash = previous.hash();
        debug!(
            "MINER - solved puzzle for block #{} (proof={})",
            self.chain.len() + 1,
            proof
        );

        let block = Block::new(self.chain.len() as u64 + 1, proof, previous_hash);
        self.chain.push(block);
        self.last_block()
    }

    /// Validate this chain's linkage and proofs.
    pub fn is_valid(&self) -> bool {
        validate(&self.chain).expect("chain always holds at least the genesis block")
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl Default for HashChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk a chain from its second block onward, checking that every block
/// links to the hash of its predecessor and that its proof solves the
/// puzzle posed by the predecessor's proof.
///
/// Returns `Ok(false)` on the first failing block. An empty slice is a
/// malformed input, not an invalid chain, and yields an error instead.
pub fn validate(chain: &[Block]) -> Result<bool, LedgerError> {
    if chain.is_empty() {
        return Err(LedgerError::EmptyChain);
    }

    for window in chain.windows(2) {
        let (previous, block) = (&window[0], &window[1]);
        if block.previous_hash != previous.hash() {
            return Ok(false);
        }
        if !pow::puzzle_satisfied(block.proof, previous.proof) {
            return Ok(false);
        }
    }
    Ok(true)
}
