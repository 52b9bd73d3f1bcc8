//! Network seam: one GET per search attempt.

use std::future::Future;

use crate::error::TransportError;

/// A completed HTTP exchange. `body` is only meaningful when the status is 2xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub status: u16,
    pub body: String,
}

impl SearchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: String::new() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues `GET {path_and_query}` against the search service.
///
/// No body and no custom headers are sent. Implementations return `Ok` for
/// any completed response, whatever its status; `Err` means no response
/// was obtained at all.
pub trait SearchTransport {
    fn get(
        &self,
        path_and_query: &str,
    ) -> impl Future<Output = Result<SearchResponse, TransportError>>;
}

impl<T: SearchTransport> SearchTransport for &T {
    fn get(
        &self,
        path_and_query: &str,
    ) -> impl Future<Output = Result<SearchResponse, TransportError>> {
        (**self).get(path_and_query)
    }
}
