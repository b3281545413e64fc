//! `jobboard create` – post a new job.

use anyhow::Result;
use jobboard_core::api::NewJob;
use jobboard_core::JobServiceClient;

#[derive(Debug)]
pub struct CreateArgs {
    pub title: String,
    pub type_id: String,
    pub org_id: String,
    pub salary: f64,
    pub description: String,
}

impl From<CreateArgs> for NewJob {
    fn from(a: CreateArgs) -> Self {
        NewJob {
            title: a.title.trim().to_string(),
            job_type: a.type_id.trim().to_string(),
            avg_annual_salary: a.salary,
            description: a.description,
            organization: a.org_id.trim().to_string(),
        }
    }
}

pub async fn run_create(client: &JobServiceClient, args: CreateArgs) -> Result<()> {
    let job = client.create_job(&args.into()).await?;
    println!("Created job {} ({})", job.id, job.title);
    Ok(())
}
