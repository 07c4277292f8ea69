//! HTTP Command Wrappers
//!
//! Frontend bindings to the PantryFinder API, organized by domain. Every
//! call resolves to `Result<T, String>`; the error is ready to show inline.

mod pantry;
mod politician;
mod candidate;
mod geocode;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// API mount point; the frontend is served from the same origin
pub const API_BASE: &str = "/api";

pub fn api_url(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Message for a failed response: the server's `message`, else the status
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let resp = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

// Re-export all public items
pub use pantry::*;
pub use politician::*;
pub use candidate::*;
pub use geocode::*;
