//! `jobboard jobs [--search TEXT] [--admin]` – list jobs.
//!
//! The user view loads jobs, applied and saved lists concurrently and shows
//! the reconciled state of each job. A failed applied/saved list only costs
//! the corresponding column; a failed job list is an error.

use anyhow::Result;
use jobboard_core::reconcile::{JobFilter, ScreenLists};
use jobboard_core::JobServiceClient;

use super::table::{print_display_jobs, print_jobs};

pub async fn run_jobs(client: &JobServiceClient, search: Option<&str>, admin: bool) -> Result<()> {
    let mut filter = match search {
        Some(term) => JobFilter::search(term),
        None => JobFilter::default(),
    };

    if admin {
        filter.active_only = true;
        let jobs = client.list_jobs().await?;
        print_jobs(&filter.apply(&jobs), "No active jobs.");
        return Ok(());
    }

    let mut screen = ScreenLists::new();
    let ticket = screen.mount();
    let (jobs, applied, saved) = tokio::join!(
        client.list_jobs(),
        client.get_applied_jobs(),
        client.get_saved_jobs()
    );

    screen.accept_jobs(ticket, jobs?);
    match applied {
        Ok(list) => {
            screen.accept_applied(ticket, &list);
        }
        Err(e) => tracing::warn!("applied jobs unavailable: {e}"),
    }
    match saved {
        Ok(list) => {
            screen.accept_saved(ticket, &list);
        }
        Err(e) => tracing::warn!("saved jobs unavailable: {e}"),
    }

    print_display_jobs(&screen.display(&filter));
    Ok(())
}
