use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, ChainResponse, MineResponse, ValidateResponse};
use crate::blockchain::{BLOCK_REWARD, pow, validate};

/// Get the full chain. This is also what peers fetch during
/// reconciliation.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        length: ledger.len(),
        chain: ledger.chain(),
    })
}

/// Validate the local chain. An invalid chain is reported, not raised:
/// the boolean maps to the HTTP status here and nowhere deeper.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let valid = validate::is_chain_valid(ledger.chain());
    let resp = ValidateResponse {
        valid,
        length: ledger.len(),
    };
    if valid {
        HttpResponse::Ok().json(resp)
    } else {
        HttpResponse::InternalServerError().json(resp)
    }
}

/// Mine a new block:
/// - solve the puzzle against the previous block's proof
/// - stage the producer credit (node identity -> beneficiary) after
///   any user transactions already waiting
/// - append the block, flushing the whole pending pool into it
///
/// The ledger lock is held throughout, so a concurrently staged
/// transaction can never be lost or double-included across the flush.
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");

    let previous_proof = ledger.last_block().proof;
    let proof = pow::solve(previous_proof);
    let previous_hash = validate::canonical_hash(ledger.last_block());

    ledger.stage_transaction(
        state.node_id.clone(),
        state.beneficiary.clone(),
        BLOCK_REWARD,
    );
    let block = ledger.create_block(proof, previous_hash);

    info!(
        "MINER - sealed block #{} (proof={}, txs={})",
        block.index,
        block.proof,
        block.transactions.len()
    );

    HttpResponse::Ok().json(MineResponse {
        index: block.index,
        timestamp: block.timestamp,
        proof: block.proof,
        previous_hash: block.previous_hash.clone(),
        transactions: block.transactions.clone(),
    })
}
