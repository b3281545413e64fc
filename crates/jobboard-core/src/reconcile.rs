//! Derived per-job display state.
//!
//! Whether a job is applied to or saved is never stored on [`Job`]; it is
//! computed here from the job list and the applied/saved id sets. Everything in
//! this module is pure.

use std::collections::HashSet;

use crate::api::Job;
use crate::control::{LoadTicket, ScreenGeneration};

/// What a job row should offer the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Already applied; the apply action is disabled.
    Applied,
    /// Saved but not applied.
    Saved,
    Available,
}

/// A job plus its derived flags.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayJob {
    pub job: Job,
    pub applied: bool,
    pub saved: bool,
}

impl DisplayJob {
    pub fn availability(&self) -> Availability {
        if self.applied {
            Availability::Applied
        } else if self.saved {
            Availability::Saved
        } else {
            Availability::Available
        }
    }
}

/// Ids of a job list, e.g. the applied-jobs response turned into a lookup set.
pub fn job_ids(jobs: &[Job]) -> HashSet<String> {
    jobs.iter().map(|j| j.id.clone()).collect()
}

/// Combine jobs with applied and saved ids. Order of `jobs` is preserved.
pub fn reconcile(
    jobs: &[Job],
    applied_ids: &HashSet<String>,
    saved_ids: &HashSet<String>,
) -> Vec<DisplayJob> {
    jobs.iter()
        .map(|job| DisplayJob {
            applied: applied_ids.contains(&job.id),
            saved: saved_ids.contains(&job.id),
            job: job.clone(),
        })
        .collect()
}

/// Screen-side list filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Hide inactive (logically deleted) jobs; the admin list does this.
    pub active_only: bool,
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
}

impl JobFilter {
    pub fn admin() -> Self {
        Self {
            active_only: true,
            search: None,
        }
    }

    pub fn search(term: &str) -> Self {
        Self {
            active_only: false,
            search: Some(term.to_string()),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        if self.active_only && !job.is_active() {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => job
                .title
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        }
    }

    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|j| self.matches(j)).cloned().collect()
    }
}

/// The three lists a job screen loads on mount, arriving in any order.
///
/// Lists that have not arrived yet count as empty. Updates carry the ticket
/// of the mount that requested them and are dropped once that mount is stale.
#[derive(Debug, Default)]
pub struct ScreenLists {
    generation: ScreenGeneration,
    jobs: Option<Vec<Job>>,
    applied: Option<HashSet<String>>,
    saved: Option<HashSet<String>>,
}

impl ScreenLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load cycle: previous lists are discarded and older tickets go stale.
    pub fn mount(&mut self) -> LoadTicket {
        self.jobs = None;
        self.applied = None;
        self.saved = None;
        self.generation.mount()
    }

    /// The screen went away; any response still in flight will be ignored.
    pub fn unmount(&self) {
        self.generation.unmount();
    }

    fn accept(&self, ticket: LoadTicket, what: &str) -> bool {
        let current = self.generation.is_current(ticket);
        if !current {
            tracing::debug!(list = what, "discarding stale response");
        }
        current
    }

    pub fn accept_jobs(&mut self, ticket: LoadTicket, jobs: Vec<Job>) -> bool {
        if !self.accept(ticket, "jobs") {
            return false;
        }
        self.jobs = Some(jobs);
        true
    }

    pub fn accept_applied(&mut self, ticket: LoadTicket, applied: &[Job]) -> bool {
        if !self.accept(ticket, "applied") {
            return false;
        }
        self.applied = Some(job_ids(applied));
        true
    }

    pub fn accept_saved(&mut self, ticket: LoadTicket, saved: &[Job]) -> bool {
        if !self.accept(ticket, "saved") {
            return false;
        }
        self.saved = Some(job_ids(saved));
        true
    }

    /// True once all three lists have arrived for the current mount.
    pub fn is_complete(&self) -> bool {
        self.jobs.is_some() && self.applied.is_some() && self.saved.is_some()
    }

    pub fn applied_ids(&self) -> HashSet<String> {
        self.applied.clone().unwrap_or_default()
    }

    /// Reconcile whatever has arrived, after filtering.
    pub fn display(&self, filter: &JobFilter) -> Vec<DisplayJob> {
        let empty = HashSet::new();
        let jobs = filter.apply(self.jobs.as_deref().unwrap_or(&[]));
        reconcile(
            &jobs,
            self.applied.as_ref().unwrap_or(&empty),
            self.saved.as_ref().unwrap_or(&empty),
        )
    }
}
