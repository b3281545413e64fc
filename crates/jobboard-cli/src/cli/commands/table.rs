//! Plain-text job tables shared by the list commands.

use jobboard_core::api::Job;
use jobboard_core::reconcile::{Availability, DisplayJob};

pub fn salary(value: f64) -> String {
    format!("{value:.0}")
}

pub fn availability(row: &DisplayJob) -> &'static str {
    match row.availability() {
        Availability::Applied => "applied",
        Availability::Saved => "saved",
        Availability::Available => "-",
    }
}

pub fn print_jobs(jobs: &[Job], empty: &str) {
    if jobs.is_empty() {
        println!("{empty}");
        return;
    }
    println!(
        "{:<26} {:<10} {:<12} {:<20} {}",
        "ID", "STATUS", "SALARY", "ORGANIZATION", "TITLE"
    );
    for j in jobs {
        println!(
            "{:<26} {:<10} {:<12} {:<20} {}",
            j.id,
            j.status.as_str(),
            salary(j.avg_annual_salary),
            j.organization_label(),
            j.title
        );
    }
}

pub fn print_display_jobs(rows: &[DisplayJob]) {
    if rows.is_empty() {
        println!("No jobs found.");
        return;
    }
    println!(
        "{:<26} {:<8} {:<12} {:<20} {}",
        "ID", "STATE", "SALARY", "ORGANIZATION", "TITLE"
    );
    for row in rows {
        println!(
            "{:<26} {:<8} {:<12} {:<20} {}",
            row.job.id,
            availability(row),
            salary(row.job.avg_annual_salary),
            row.job.organization_label(),
            row.job.title
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::api::{EntityRef, JobStatus};

    fn row(applied: bool, saved: bool) -> DisplayJob {
        DisplayJob {
            job: Job {
                id: "1".into(),
                title: "Engineer".into(),
                description: String::new(),
                avg_annual_salary: 1234.6,
                organization: Some(EntityRef::new("o1", None)),
                job_type: None,
                created_at: None,
                status: JobStatus::Active,
            },
            applied,
            saved,
        }
    }

    #[test]
    fn availability_labels() {
        assert_eq!(availability(&row(true, true)), "applied");
        assert_eq!(availability(&row(false, true)), "saved");
        assert_eq!(availability(&row(false, false)), "-");
    }

    #[test]
    fn salary_is_rounded() {
        assert_eq!(salary(1234.6), "1235");
    }
}
