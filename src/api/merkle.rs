use actix_web::{HttpResponse, Responder, post, web};
use log::debug;

use super::models::{MerkleRequest, MerkleResponse};
use crate::merkle::MerkleTree;

/// Build a Merkle tree over the posted values and return its root hash.
/// The tree is not retained; it commits to the values and nothing else.
#[post("/merkle/root/")]
pub async fn merkle_root(body: web::Json<MerkleRequest>) -> impl Responder {
    let tree = match MerkleTree::build(&body.values) {
        Ok(tree) => tree,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    debug!(
        "MERKLE - built tree over {} values, root={}",
        body.values.len(),
        tree.root_hash()
    );

    HttpResponse::Ok().json(MerkleResponse {
        root_hash: tree.root_hash().to_string(),
        leaf_count: body.values.len(),
    })
}
