//! Stateless HTTP request builder and response parser for the wallet API.
//!
//! # Design
//! `WalletClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Every `parse_*` goes through
//! `normalize::normalize`, so all operations share one classification of
//! transport, status, envelope and payload errors.

use serde::Serialize;

use crate::envelope::Unit;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::normalize::normalize;
use crate::types::{NewWallet, UpdateWallet, Wallet};

/// Synchronous, stateless client for the wallet API.
#[derive(Debug, Clone)]
pub struct WalletClient {
    base_url: String,
}

impl WalletClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_wallets(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/api/wallets")
    }

    pub fn build_get_wallet(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/api/wallets/{id}"))
    }

    pub fn build_new_wallet(&self, input: &NewWallet) -> Result<HttpRequest, ClientError> {
        self.json_request(HttpMethod::Post, "/api/wallets/new", input)
    }

    pub fn build_rename_wallet(&self, id: &str, input: &UpdateWallet) -> Result<HttpRequest, ClientError> {
        self.json_request(HttpMethod::Put, &format!("/api/wallets/{id}"), input)
    }

    pub fn build_delete_wallet(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/api/wallets/{id}"))
    }

    pub fn parse_list_wallets(&self, response: HttpResponse) -> Result<Vec<Wallet>, ClientError> {
        normalize(Ok(response))
    }

    pub fn parse_get_wallet(&self, response: HttpResponse) -> Result<Wallet, ClientError> {
        normalize(Ok(response))
    }

    pub fn parse_new_wallet(&self, response: HttpResponse) -> Result<Wallet, ClientError> {
        normalize(Ok(response))
    }

    pub fn parse_rename_wallet(&self, response: HttpResponse) -> Result<Wallet, ClientError> {
        normalize(Ok(response))
    }

    /// Deleting yields the unit value, `{}` when serialized.
    pub fn parse_delete_wallet(&self, response: HttpResponse) -> Result<Unit, ClientError> {
        normalize(Ok(response))
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        input: &B,
    ) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}
