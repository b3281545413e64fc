//! `jobboard delete <id>` – deactivate a job (the record is kept).

use anyhow::Result;
use jobboard_core::JobServiceClient;

pub async fn run_delete(client: &JobServiceClient, id: &str) -> Result<()> {
    client.delete_job(id).await?;
    println!("Deactivated job {id}");
    Ok(())
}
