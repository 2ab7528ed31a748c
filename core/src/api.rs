//! Blocking wallet API bound to a `Transport`.
//!
//! `WalletApi` chains `build_*`, `Transport::send` and the normalizer for
//! each operation. A call returns exactly one `Result`.

use crate::client::WalletClient;
use crate::envelope::Unit;
use crate::error::ClientError;
use crate::http::{HttpRequest, Transport};
use crate::normalize::normalize;
use crate::types::{NewWallet, UpdateWallet, Wallet};
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct WalletApi<T> {
    client: WalletClient,
    transport: T,
}

impl<T: Transport> WalletApi<T> {
    pub fn new(client: WalletClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &WalletClient {
        &self.client
    }

    pub fn list_wallets(&self) -> Result<Vec<Wallet>, ClientError> {
        self.call(self.client.build_list_wallets())
    }

    pub fn get_wallet(&self, id: &str) -> Result<Wallet, ClientError> {
        self.call(self.client.build_get_wallet(id))
    }

    pub fn new_wallet(&self, input: &NewWallet) -> Result<Wallet, ClientError> {
        self.call(self.client.build_new_wallet(input)?)
    }

    pub fn rename_wallet(&self, id: &str, input: &UpdateWallet) -> Result<Wallet, ClientError> {
        self.call(self.client.build_rename_wallet(id, input)?)
    }

    pub fn delete_wallet(&self, id: &str) -> Result<Unit, ClientError> {
        self.call(self.client.build_delete_wallet(id))
    }

    fn call<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ClientError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        normalize(self.transport.send(request))
    }
}
