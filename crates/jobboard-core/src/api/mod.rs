//! Typed job-service API.
//!
//! [`JobServiceClient`] is what screens depend on; it validates input,
//! goes through the request executor, unwraps the service's
//! `{isSuccessful, message, data}` envelope and decodes the entities in
//! [`models`].

mod client;
pub mod models;
pub mod routes;
pub mod validate;

pub use client::JobServiceClient;
pub use models::{
    ApplicantInfo, Application, EntityRef, Job, JobStatus, JobType, JobUpdate, NewJob,
    Organization, ResumeDocument,
};
