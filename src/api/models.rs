use crate::ledger::{Block, HashChain};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Shared application state with the in-memory hash chain. Constructed
/// explicitly in `main` and injected into handlers; the mutex serializes
/// appends so at most one mutation is in flight.
pub struct AppState {
    pub ledger: Mutex<HashChain>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            ledger: Mutex::new(HashChain::new()),
        }
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub timestamp: i64,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- Merkle API Models ---------- */

#[derive(Deserialize)]
pub struct MerkleRequest {
    pub values: Vec<String>,
}

#[derive(Serialize)]
pub struct MerkleResponse {
    pub root_hash: String,
    pub leaf_count: usize,
}
