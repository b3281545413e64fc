//! `jobboard update <id>` – edit title, description or salary.

use anyhow::Result;
use jobboard_core::api::JobUpdate;
use jobboard_core::JobServiceClient;

#[derive(Debug, Default)]
pub struct UpdateArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub salary: Option<f64>,
}

impl From<UpdateArgs> for JobUpdate {
    fn from(a: UpdateArgs) -> Self {
        JobUpdate {
            title: a.title,
            description: a.description,
            avg_annual_salary: a.salary,
        }
    }
}

pub async fn run_update(client: &JobServiceClient, id: &str, args: UpdateArgs) -> Result<()> {
    let job = client.update_job(id, &args.into()).await?;
    println!("Updated job {} ({})", job.id, job.title);
    Ok(())
}
