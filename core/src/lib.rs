//! Wallet API client core with Either-envelope response normalization.
//!
//! # Overview
//! The backend answers every call with `{"Right": value}` or
//! `{"Left": message}`. This crate builds `HttpRequest` values, leaves the
//! round-trip to a caller-supplied `Transport`, and normalizes the outcome
//! into a decoded value or a `ClientError` (host-does-IO pattern).
//!
//! # Design
//! - `WalletClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`; `WalletApi` wires
//!   both to a `Transport` for callers that want one blocking call.
//! - `normalize` is the single choke point: transport failure, non-2xx
//!   status, malformed envelope and `Left` each map to one error variant.
//! - Operations without a payload return `Unit`, which serializes to `{}`.

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod normalize;
pub mod types;

pub use api::WalletApi;
pub use client::WalletClient;
pub use envelope::{Envelope, Unit};
pub use error::{ClientError, ErrorKind, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RawResponse, Transport};
pub use normalize::{decode_value, normalize, normalize_value};
pub use types::{Assurance, NewWallet, UpdateWallet, Wallet};
