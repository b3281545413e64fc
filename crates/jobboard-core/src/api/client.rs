use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::models::{
    ApplicantInfo, Application, Job, JobType, JobUpdate, NewJob, Organization, ResumeDocument,
};
use super::{routes, validate};
use crate::config::JobBoardConfig;
use crate::credentials::CredentialStore;
use crate::http::{
    Body, CurlTransport, FilePart, MultipartForm, RequestError, RequestExecutor, Route,
};

/// Unsuccessful `{isSuccessful: false, message}` envelopes are service errors
/// even when the HTTP status is 2xx.
fn check_envelope(value: &Value) -> Result<(), RequestError> {
    if value.get("isSuccessful").and_then(Value::as_bool) == Some(false) {
        return Err(RequestError::Service {
            status: 200,
            message: envelope_message(value).unwrap_or_else(|| "request was not successful".into()),
        });
    }
    Ok(())
}

fn envelope_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// The `data` member of an envelope, or the value itself for bare payloads.
fn envelope_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// True when a create response echoes the job rather than a bare acknowledgement.
fn carries_job(data: &Value) -> bool {
    data.get("_id").or_else(|| data.get("id")).is_some()
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, RequestError> {
    serde_json::from_value(value).map_err(|e| RequestError::InvalidResponse(format!("{what}: {e}")))
}

fn decode_list<T: DeserializeOwned>(value: Value, what: &str) -> Result<Vec<T>, RequestError> {
    match value {
        Value::Null => Ok(Vec::new()),
        v => decode(v, what),
    }
}

/// Typed operations over the job service.
///
/// Any `Unauthenticated` outcome clears the stored token before it is returned,
/// so the caller only has to route the user to login.
#[derive(Debug, Clone)]
pub struct JobServiceClient {
    exec: RequestExecutor,
}

impl JobServiceClient {
    pub fn new(exec: RequestExecutor) -> Self {
        Self { exec }
    }

    /// Client over libcurl using the configured base URL, timeouts and retry policy.
    pub fn from_config(
        cfg: &JobBoardConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> anyhow::Result<Self> {
        let exec = RequestExecutor::from_config(cfg, credentials, Arc::new(CurlTransport::new()))?;
        Ok(Self::new(exec))
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.exec
    }

    async fn end_session(&self) {
        let store = Arc::clone(self.exec.credentials());
        let cleared = tokio::task::spawn_blocking(move || store.clear())
            .await
            .map_err(|join| anyhow::anyhow!("credential clear task failed: {join}"))
            .and_then(|r| r);
        match cleared {
            Ok(()) => tracing::info!("session token cleared after authentication failure"),
            Err(e) => tracing::warn!("could not clear session token: {e:#}"),
        }
    }

    /// Execute and check the envelope; returns the whole response value.
    async fn call(
        &self,
        route: Route,
        body: Body,
        query: &[(&str, &str)],
    ) -> Result<Value, RequestError> {
        match self.exec.execute(&route, body, query).await {
            Ok(value) => {
                check_envelope(&value)?;
                Ok(value)
            }
            Err(RequestError::Unauthenticated) => {
                self.end_session().await;
                Err(RequestError::Unauthenticated)
            }
            Err(e) => Err(e),
        }
    }

    async fn call_data(
        &self,
        route: Route,
        body: Body,
        query: &[(&str, &str)],
    ) -> Result<Value, RequestError> {
        self.call(route, body, query).await.map(envelope_data)
    }

    /// All jobs, unfiltered. Screens filter by status or search term locally.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, RequestError> {
        let data = self.call_data(routes::all_jobs(), Body::Empty, &[]).await?;
        decode_list(data, "job list")
    }

    pub async fn get_job(&self, id: &str) -> Result<Job, RequestError> {
        validate::job_id(id)?;
        let data = self.call_data(routes::get_job(id), Body::Empty, &[]).await?;
        decode(data, "job")
    }

    /// Create a job. Organization and type ids are taken from `job` as given.
    ///
    /// Some deployments only acknowledge with `{isSuccessful, message}`. The
    /// job then exists but was not echoed, so it is looked up in the job list
    /// instead of reporting a failure that would invite a duplicate post.
    pub async fn create_job(&self, job: &NewJob) -> Result<Job, RequestError> {
        validate::new_job(job)?;
        let body = serde_json::to_value(job)
            .map_err(|e| RequestError::Validation(format!("encode job: {e}")))?;
        let data = self
            .call_data(routes::create_job(), Body::Json(body), &[])
            .await?;
        let created: Job = if carries_job(&data) {
            decode(data, "created job")?
        } else {
            tracing::debug!("create acknowledged without a job; looking it up");
            self.find_created(job).await?
        };
        tracing::info!(job_id = %created.id, "job created");
        Ok(created)
    }

    /// Newest listed job matching a create payload.
    async fn find_created(&self, job: &NewJob) -> Result<Job, RequestError> {
        let jobs = self.list_jobs().await?;
        jobs.into_iter()
            .rev()
            .find(|j| {
                j.title.trim() == job.title.trim()
                    && j.organization_id() == Some(job.organization.as_str())
                    && j.job_type_id() == Some(job.job_type.as_str())
            })
            .ok_or_else(|| {
                RequestError::InvalidResponse(
                    "job was created but the service did not return it; check `jobs` before retrying"
                        .into(),
                )
            })
    }

    pub async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<Job, RequestError> {
        validate::job_id(id)?;
        validate::job_update(update)?;
        let body = serde_json::to_value(update)
            .map_err(|e| RequestError::Validation(format!("encode update: {e}")))?;
        let data = self
            .call_data(routes::update_job(id), Body::Json(body), &[])
            .await?;
        decode(data, "updated job")
    }

    /// Logical delete: the service marks the job inactive.
    pub async fn delete_job(&self, id: &str) -> Result<(), RequestError> {
        validate::job_id(id)?;
        self.call(routes::delete_job(id), Body::Json(json!({})), &[])
            .await?;
        tracing::info!(job_id = %id, "job deactivated");
        Ok(())
    }

    /// Submit an application with a PDF resume as multipart form data.
    pub async fn apply_to_job(
        &self,
        id: &str,
        applicant: &ApplicantInfo,
        document: &ResumeDocument,
    ) -> Result<Application, RequestError> {
        validate::job_id(id)?;
        validate::applicant(applicant)?;
        validate::resume(document)?;

        let form = MultipartForm::new()
            .text("fullName", applicant.full_name.trim())
            .text("email", applicant.email.trim())
            .text("mobileNumber", applicant.mobile_number.trim())
            .file(FilePart {
                field: "resume".into(),
                file_name: document.file_name.clone(),
                content_type: "application/pdf".into(),
                bytes: document.bytes.clone(),
            });
        let response = self
            .call(routes::apply(id), Body::Multipart(form), &[])
            .await?;
        tracing::info!(job_id = %id, "application submitted");
        Ok(Application {
            job_id: id.to_string(),
            applicant: applicant.clone(),
            document_name: document.file_name.clone(),
            message: envelope_message(&response),
        })
    }

    pub async fn save_job(&self, id: &str) -> Result<(), RequestError> {
        validate::job_id(id)?;
        self.call(routes::save_job(id), Body::Json(json!({})), &[])
            .await?;
        Ok(())
    }

    pub async fn get_saved_jobs(&self) -> Result<Vec<Job>, RequestError> {
        let data = self.call_data(routes::saved_jobs(), Body::Empty, &[]).await?;
        decode_list(data, "saved jobs")
    }

    pub async fn get_applied_jobs(&self) -> Result<Vec<Job>, RequestError> {
        let data = self
            .call_data(routes::applied_jobs(), Body::Empty, &[])
            .await?;
        decode_list(data, "applied jobs")
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, RequestError> {
        let data = self
            .call_data(routes::organizations(), Body::Empty, &[])
            .await?;
        decode_list(data, "organizations")
    }

    /// Job categories; public, no token needed.
    pub async fn list_job_types(&self) -> Result<Vec<JobType>, RequestError> {
        let data = self
            .call_data(routes::job_types(), Body::Empty, routes::JOB_TYPES_QUERY)
            .await?;
        decode_list(data, "job types")
    }
}
