//! Championship data endpoints: public ranking and the signed-in user's
//! closed operations. Read-only GETs, same hydrate/ssr split as the auth
//! calls; SSR stubs report an error so pages render their failure state.

#![allow(clippy::unused_async)]

use serde::Deserialize;

/// One row of the championship ranking.
#[derive(Clone, Debug, Deserialize)]
pub struct RankingEntry {
    pub nickname: String,
    #[serde(rename = "user__username")]
    pub username: String,
    pub total_profit: f64,
    pub operation_count: u32,
}

/// Direction of a closed operation.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum OperationKind {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl OperationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// A single closed trading operation.
///
/// Decimal and datetime fields arrive as strings from the backend and are
/// kept that way; pages parse `profit` only to pick a display color.
#[derive(Clone, Debug, Deserialize)]
pub struct Operation {
    pub id: i64,
    pub position_id: i64,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub volume: String,
    pub open_time: String,
    pub open_price: String,
    pub close_time: String,
    pub close_price: String,
    pub profit: String,
    pub comment: String,
}

/// Fetch the public championship ranking from `GET /api/ranking/`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or the body
/// cannot be decoded.
pub async fn fetch_ranking() -> Result<Vec<RankingEntry>, String> {
    fetch_list("/ranking/").await
}

/// Fetch the current user's closed operations from `GET /api/operations/`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or the body
/// cannot be decoded.
pub async fn fetch_operations() -> Result<Vec<Operation>, String> {
    fetch_list("/operations/").await
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, String> {
    let url = format!("{}{endpoint}", super::api::API_BASE);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("API error: {}", resp.status()));
    }
    resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
}

#[cfg(not(feature = "hydrate"))]
async fn fetch_list<T: serde::de::DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, String> {
    let _ = endpoint;
    Err("not available on server".to_owned())
}
