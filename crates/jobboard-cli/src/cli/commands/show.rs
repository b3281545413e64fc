//! `jobboard show <id>` – print one job.

use anyhow::Result;
use jobboard_core::JobServiceClient;

use super::table::salary;

pub async fn run_show(client: &JobServiceClient, id: &str) -> Result<()> {
    let job = client.get_job(id).await?;
    println!("ID:           {}", job.id);
    println!("Title:        {}", job.title);
    println!("Organization: {}", job.organization_label());
    println!("Type:         {}", job.job_type_label());
    println!("Salary:       {}", salary(job.avg_annual_salary));
    println!("Status:       {}", job.status.as_str());
    if let Some(created) = job.created_at {
        println!("Posted:       {}", created.format("%Y-%m-%d"));
    }
    if !job.description.is_empty() {
        println!();
        println!("{}", job.description);
    }
    Ok(())
}
