//! `jobboard apply <id>` – submit an application with a PDF resume.

use std::path::PathBuf;

use anyhow::Result;
use jobboard_core::api::{validate, ApplicantInfo, ResumeDocument};
use jobboard_core::{JobServiceClient, RequestError};

#[derive(Debug)]
pub struct ApplyArgs {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub resume: PathBuf,
}

/// Read the resume and check every field without touching the network.
fn prepare(args: ApplyArgs) -> Result<(ApplicantInfo, ResumeDocument)> {
    let applicant = ApplicantInfo {
        full_name: args.name,
        email: args.email,
        mobile_number: args.mobile,
    };
    validate::applicant(&applicant)?;
    let document = ResumeDocument::from_path(&args.resume)?;
    validate::resume(&document)?;
    Ok((applicant, document))
}

/// Checks the applied list first; an existing application is reported, not resubmitted.
/// If that list cannot be loaded the application is sent anyway and the service decides.
pub async fn run_apply(client: &JobServiceClient, id: &str, args: ApplyArgs) -> Result<()> {
    let (applicant, document) = prepare(args)?;

    match client.get_applied_jobs().await {
        Ok(applied) if applied.iter().any(|j| j.id == id) => {
            println!("Already applied to job {id}.");
            return Ok(());
        }
        Ok(_) => {}
        Err(RequestError::Unauthenticated) => return Err(RequestError::Unauthenticated.into()),
        Err(e) => tracing::warn!("applied jobs unavailable, submitting anyway: {e}"),
    }

    let application = client.apply_to_job(id, &applicant, &document).await?;
    match application.message {
        Some(msg) => println!("{msg}"),
        None => println!("Applied to job {id} with {}", application.document_name),
    }
    Ok(())
}
