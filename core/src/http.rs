//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and normalizes `HttpResponse` values; issuing the request is the
//! job of a `Transport`, which the caller supplies. A transport either hands
//! back whatever response the server sent (any status) or fails with a
//! `TransportError` when no response was obtained at all.

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// An absent body is represented by the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What a transport attempt settles into: a response, or no response at all.
pub type RawResponse = Result<HttpResponse, TransportError>;

/// Executes one `HttpRequest`.
///
/// Implementations must return non-2xx responses as `Ok` so the normalizer
/// sees the status; `Err` is reserved for failures where no HTTP response
/// exists. Retries and timeouts, if any, belong here.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> RawResponse;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> RawResponse {
        (**self).send(request)
    }
}
