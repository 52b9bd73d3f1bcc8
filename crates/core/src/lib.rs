//! searchbox — a client-side search controller.
//!
//! Binds a query input and one or more trigger controls to a single
//! asynchronous `GET /search?q=...` request, keeps the busy/idle UI state
//! consistent, and renders the returned markup into a results region.
//!
//! # Modules
//!
//! - [`controller`] — [`SearchController`], the request-lifecycle state machine
//! - [`view`] — the [`SearchView`] seam over the four UI roles, plus [`MemoryView`]
//! - [`transport`] — the [`SearchTransport`] seam over the network
//! - [`query`] — query trimming and URI-component encoding
//! - [`config`] — `searchbox.toml` loading
//! - [`error`] — error taxonomy

pub mod config;
pub mod controller;
pub mod error;
pub mod query;
pub mod transport;
pub mod view;

pub use config::{load_search_config, SearchConfig};
pub use controller::{Phase, SearchController, SearchOutcome, SUBMIT_KEY};
pub use error::{ConfigError, SearchError, TransportError};
pub use transport::{SearchResponse, SearchTransport};
pub use view::{MemoryView, SearchView, ViewEvent};
