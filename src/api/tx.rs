use actix_web::{HttpResponse, Responder, post, web};
use log::{debug, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse};

/// Stage a transaction for the next mined block. All three fields are
/// required; nothing else about them is checked.
#[post("/tx/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let NewTxRequest {
        sender,
        receiver,
        amount,
    } = body.into_inner();

    let (Some(sender), Some(receiver), Some(amount)) = (sender, receiver, amount) else {
        warn!("POST /tx/ - rejected: missing sender, receiver or amount");
        return HttpResponse::BadRequest().body("sender, receiver and amount are required");
    };

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.stage_transaction(sender, receiver, amount)
    };
    debug!("POST /tx/ - staged for block #{index}");

    HttpResponse::Created().json(NewTxResponse { index })
}
