//! HTTP interface over the ledger engine.
//!
//! * `POST /v1/accounts` with `{"accountId", "balance"}` creates an account.
//! * `GET /v1/accounts/{id}` returns `{"accountId", "balance"}`.
//! * `POST /transfer` with `{"accountFrom", "accountTo", "amount"}` moves funds.
//!
//! Every rejected request answers `400 Bad Request` with the failure message as
//! its body. There is no partial success.

use crate::application::engine::LedgerEngine;
use crate::domain::account::AccountId;
use crate::domain::transfer::TransferRequest;
use crate::error::LedgerError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_id: AccountId,
    pub balance: Decimal,
}

pub fn router(engine: Arc<LedgerEngine>) -> Router {
    Router::new()
        .route("/v1/accounts", post(create_account))
        .route("/v1/accounts/{id}", get(get_account))
        .route("/transfer", post(create_transfer))
        .with_state(engine)
}

/// Binds `addr` and serves the API until the process is stopped.
pub async fn serve(addr: SocketAddr, engine: Arc<LedgerEngine>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(engine)).await
}

async fn create_account(
    State(engine): State<Arc<LedgerEngine>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match engine
        .accounts()
        .open_account(request.account_id, request.balance)
        .await
    {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_account(
    State(engine): State<Arc<LedgerEngine>>,
    Path(id): Path<String>,
) -> Response {
    let id = match AccountId::new(id) {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };

    match engine.accounts().account(&id).await {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(err @ LedgerError::AccountNotFound(_)) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Err(err) => error_response(err),
    }
}

async fn create_transfer(
    State(engine): State<Arc<LedgerEngine>>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    tracing::info!(?request, "Initiating transfer");

    match engine.transfers().transfer(request).await {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(err) => error_response(err),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}

fn error_response(err: LedgerError) -> Response {
    if err.is_rejection() {
        bad_request(err.to_string())
    } else {
        tracing::error!(error = %err, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
    }
}
