//! `jobboard save <id>` – bookmark a job.

use anyhow::Result;
use jobboard_core::JobServiceClient;

pub async fn run_save(client: &JobServiceClient, id: &str) -> Result<()> {
    client.save_job(id).await?;
    println!("Saved job {id}");
    Ok(())
}
