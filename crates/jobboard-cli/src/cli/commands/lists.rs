//! `jobboard saved|applied|orgs|types` – plain list commands.

use anyhow::Result;
use jobboard_core::JobServiceClient;

use super::table::print_jobs;

pub async fn run_saved(client: &JobServiceClient) -> Result<()> {
    let jobs = client.get_saved_jobs().await?;
    print_jobs(&jobs, "No saved jobs.");
    Ok(())
}

pub async fn run_applied(client: &JobServiceClient) -> Result<()> {
    let jobs = client.get_applied_jobs().await?;
    print_jobs(&jobs, "No applications yet.");
    Ok(())
}

pub async fn run_orgs(client: &JobServiceClient) -> Result<()> {
    let orgs = client.list_organizations().await?;
    if orgs.is_empty() {
        println!("No organizations.");
        return Ok(());
    }
    println!("{:<26} {}", "ID", "NAME");
    for o in orgs {
        println!("{:<26} {}", o.id, o.name);
    }
    Ok(())
}

pub async fn run_types(client: &JobServiceClient) -> Result<()> {
    let types = client.list_job_types().await?;
    if types.is_empty() {
        println!("No job types.");
        return Ok(());
    }
    println!("{:<26} {}", "ID", "NAME");
    for t in types {
        println!("{:<26} {}", t.id, t.name);
    }
    Ok(())
}
