use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Assurance {
    #[default]
    Normal,
    Strict,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub assurance: Assurance,
    pub balance: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    pub name: String,
    #[serde(default)]
    pub assurance: Assurance,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWallet {
    pub name: Option<String>,
    pub assurance: Option<Assurance>,
}

/// The backend's Either envelope: `{"Right": value}` or `{"Left": message}`.
#[derive(Debug, Serialize)]
pub enum Reply<T> {
    Right(T),
    Left(String),
}

/// Payload of operations that return nothing; serializes to `[]`.
pub type UnitReply = Vec<()>;

pub type Db = Arc<RwLock<HashMap<String, Wallet>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/wallets", get(list_wallets))
        .route("/api/wallets/new", post(new_wallet))
        .route(
            "/api/wallets/{id}",
            get(get_wallet).put(update_wallet).delete(delete_wallet),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Wallet ids are uuid v4 in simple form: 32 lowercase hex digits.
pub fn is_wallet_id(id: &str) -> bool {
    id.len() == 32 && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

fn check_id(id: &str) -> Result<(), StatusCode> {
    if is_wallet_id(id) {
        Ok(())
    } else {
        debug!(%id, "rejecting malformed wallet id");
        Err(StatusCode::BAD_REQUEST)
    }
}

fn not_found<T>(id: &str) -> Json<Reply<T>> {
    Json(Reply::Left(format!("Wallet not found: {id}")))
}

async fn list_wallets(State(db): State<Db>) -> Json<Reply<Vec<Wallet>>> {
    let wallets = db.read().await;
    Json(Reply::Right(wallets.values().cloned().collect()))
}

async fn new_wallet(State(db): State<Db>, Json(input): Json<NewWallet>) -> Json<Reply<Wallet>> {
    if input.name.trim().is_empty() {
        return Json(Reply::Left("Wallet name must not be empty".to_string()));
    }
    let wallet = Wallet {
        id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        assurance: input.assurance,
        balance: 0,
    };
    info!(id = %wallet.id, name = %wallet.name, "wallet created");
    db.write().await.insert(wallet.id.clone(), wallet.clone());
    Json(Reply::Right(wallet))
}

async fn get_wallet(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Reply<Wallet>>, StatusCode> {
    check_id(&id)?;
    let wallets = db.read().await;
    Ok(match wallets.get(&id) {
        Some(wallet) => Json(Reply::Right(wallet.clone())),
        None => not_found(&id),
    })
}

async fn update_wallet(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateWallet>,
) -> Result<Json<Reply<Wallet>>, StatusCode> {
    check_id(&id)?;
    let mut wallets = db.write().await;
    let Some(wallet) = wallets.get_mut(&id) else {
        return Ok(not_found(&id));
    };
    if let Some(name) = input.name {
        if name.trim().is_empty() {
            return Ok(Json(Reply::Left("Wallet name must not be empty".to_string())));
        }
        wallet.name = name;
    }
    if let Some(assurance) = input.assurance {
        wallet.assurance = assurance;
    }
    Ok(Json(Reply::Right(wallet.clone())))
}

async fn delete_wallet(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Reply<UnitReply>>, StatusCode> {
    check_id(&id)?;
    let mut wallets = db.write().await;
    Ok(match wallets.remove(&id) {
        Some(_) => {
            info!(%id, "wallet deleted");
            Json(Reply::Right(Vec::new()))
        }
        None => not_found(&id),
    })
}
