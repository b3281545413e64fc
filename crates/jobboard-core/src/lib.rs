pub mod config;
pub mod logging;

pub mod api;
pub mod control;
pub mod credentials;
pub mod http;
pub mod reconcile;
pub mod retry;

pub use api::JobServiceClient;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionToken};
pub use http::{RequestError, RequestExecutor};
