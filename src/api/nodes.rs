use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{AppState, ConnectNodesRequest, NodesResponse, ReconcileResponse};
use crate::node::Synchronizer;

/// Register a batch of peer addresses. Each is reduced to its network
/// authority before being stored; duplicates collapse silently.
#[post("/nodes/")]
pub async fn connect_nodes(
    state: web::Data<AppState>,
    body: web::Json<ConnectNodesRequest>,
) -> impl Responder {
    let nodes = match body.into_inner().nodes {
        Some(nodes) if !nodes.is_empty() => nodes,
        _ => return HttpResponse::BadRequest().body("nodes are empty"),
    };

    let mut peers = state.peers.lock().expect("mutex poisoned");
    for address in &nodes {
        match peers.add(address) {
            Ok(authority) => debug!("registered peer {authority}"),
            Err(err) => {
                warn!("POST /nodes/ - rejected: {err}");
                return HttpResponse::BadRequest().body(err.to_string());
            }
        }
    }

    HttpResponse::Created().json(NodesResponse {
        total_nodes: peers.authorities(),
    })
}

/// List the currently registered peer authorities.
#[get("/nodes/")]
pub async fn list_nodes(state: web::Data<AppState>) -> impl Responder {
    let peers = state.peers.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(NodesResponse {
        total_nodes: peers.authorities(),
    })
}

/// Run longest-chain reconciliation against every registered peer and
/// report the resulting chain either way.
#[post("/reconcile/")]
pub async fn reconcile(state: web::Data<AppState>) -> impl Responder {
    // Work on a snapshot of the registry so no lock is held while
    // peers are being fetched.
    let registry = state.peers.lock().expect("mutex poisoned").clone();

    let sync = Synchronizer::new(state.peer_client.clone());
    let replaced = sync.reconcile(&state.ledger, &registry).await;

    let ledger = state.ledger.lock().expect("mutex poisoned");
    info!(
        "reconcile finished (peers={}, replaced={replaced}, length={})",
        registry.len(),
        ledger.len()
    );

    HttpResponse::Ok().json(ReconcileResponse {
        replaced,
        length: ledger.len(),
        chain: ledger.snapshot(),
    })
}
