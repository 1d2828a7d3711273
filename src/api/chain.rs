use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, ChainResponse, MineResponse, ValidateResponse};

/// Get the full chain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: ledger.len(),
        chain: &ledger.chain,
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the whole chain.
#[get("/chain/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ValidateResponse {
        valid: ledger.is_valid(),
        length: ledger.len(),
    };
    HttpResponse::Ok().json(resp)
}

/// Mine one block: solve the puzzle against the tip and append the result.
/// Holds the ledger lock for the duration of the search, so concurrent mine
/// requests are applied one at a time.
#[post("/chain/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    let block = ledger.mine();

    info!(
        "MINER - sealed block #{} (proof={}, previous_hash={})",
        block.index, block.proof, block.previous_hash
    );

    HttpResponse::Ok().json(MineResponse {
        message: "A block is MINED",
        index: block.index,
        timestamp: block.timestamp,
        proof: block.proof,
        previous_hash: block.previous_hash.clone(),
    })
}
