//! HTTP request execution.
//!
//! [`RequestExecutor`] is the only component that talks to the network. It
//! resolves routes against the configured base URL, attaches the bearer token,
//! enforces the per-call timeout, applies the (opt-in) retry policy and maps
//! every failure into [`RequestError`]. The wire itself sits behind the
//! [`Transport`] trait; [`CurlTransport`] is the production implementation.

mod error;
mod executor;
mod request;
mod transport;

pub use error::RequestError;
pub use executor::RequestExecutor;
pub use request::{Body, FilePart, HttpRequest, HttpResponse, Method, MultipartForm, Route};
pub use transport::{CurlTransport, Transport, TransportError};
