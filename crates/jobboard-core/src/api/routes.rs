//! Endpoint table for the job service.

use crate::http::{Method, Route};

pub fn job_types() -> Route {
    Route::new(Method::Get, "category/getAllCategories/").public()
}

/// Query pairs that go with [`job_types`].
pub const JOB_TYPES_QUERY: &[(&str, &str)] = &[("type", "job")];

pub fn organizations() -> Route {
    Route::new(Method::Get, "organization/getAll")
}

pub fn create_job() -> Route {
    Route::new(Method::Post, "job/create")
}

pub fn get_job(id: &str) -> Route {
    Route::new(Method::Get, "job/getJobById").arg(id)
}

pub fn update_job(id: &str) -> Route {
    Route::new(Method::Patch, "job/update").arg(id)
}

pub fn all_jobs() -> Route {
    Route::new(Method::Get, "job/allJobs")
}

pub fn delete_job(id: &str) -> Route {
    Route::new(Method::Put, "job/delete").arg(id)
}

pub fn apply(id: &str) -> Route {
    Route::new(Method::Post, "job/apply").arg(id)
}

pub fn save_job(id: &str) -> Route {
    Route::new(Method::Put, "job/save").arg(id)
}

pub fn saved_jobs() -> Route {
    Route::new(Method::Get, "job/getSavedJobs")
}

pub fn applied_jobs() -> Route {
    Route::new(Method::Get, "job/getAppliedJobs")
}
