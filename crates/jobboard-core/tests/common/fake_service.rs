//! In-memory job service behind the `Transport` trait.
//!
//! Mirrors the real service's routes and `{isSuccessful, message, data}`
//! envelopes closely enough to drive the client end to end without sockets.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use jobboard_core::credentials::{CredentialStore, MemoryCredentialStore};
use jobboard_core::http::{
    Body, HttpRequest, HttpResponse, Method, MultipartForm, RequestExecutor, Transport,
    TransportError,
};
use jobboard_core::JobServiceClient;
use serde_json::{json, Value};

pub const VALID_TOKEN: &str = "valid-token";
pub const BASE_URL: &str = "http://jobs.test/api/v1/";

#[derive(Default)]
struct State {
    jobs: Vec<Value>,
    next_id: u64,
    applied: HashSet<String>,
    saved: HashSet<String>,
    applications: Vec<MultipartForm>,
}

pub struct FakeJobService {
    state: Mutex<State>,
    calls: AtomicUsize,
    ack_only_create: AtomicBool,
}

fn ok(data: Value) -> HttpResponse {
    HttpResponse::json(200, &json!({"isSuccessful": true, "message": "OK", "data": data}))
}

fn msg(status: u32, message: &str) -> HttpResponse {
    HttpResponse::json(
        status,
        &json!({"isSuccessful": status < 300, "message": message}),
    )
}

fn org_name(id: &str) -> Option<&'static str> {
    match id {
        "org-1" => Some("Acme Corp"),
        "org-2" => Some("Globex"),
        _ => None,
    }
}

fn type_name(id: &str) -> Option<&'static str> {
    match id {
        "type-ft" => Some("Full time"),
        "type-ct" => Some("Contract"),
        _ => None,
    }
}

pub fn job_json(id: &str, title: &str, status: i64) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": format!("{title} role"),
        "avgAnnualSalary": 60000,
        "organization": {"_id": "org-1", "orgName": "Acme Corp"},
        "type": {"_id": "type-ft", "name": "Full time"},
        "createdAt": "2023-09-01T08:00:00.000Z",
        "status": status
    })
}

impl FakeJobService {
    pub fn new() -> Arc<Self> {
        Self::with_jobs(Vec::new())
    }

    pub fn with_jobs(jobs: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State {
                next_id: 100,
                jobs,
                ..Default::default()
            }),
            calls: AtomicUsize::new(0),
            ack_only_create: AtomicBool::new(false),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Answer `job/create` with a bare `{isSuccessful, message}` acknowledgement.
    pub fn acknowledge_creates_only(&self) {
        self.ack_only_create.store(true, Ordering::SeqCst);
    }

    pub fn job_count(&self) -> usize {
        self.state.lock().unwrap().jobs.len()
    }

    pub fn mark_applied(&self, id: &str) {
        self.state.lock().unwrap().applied.insert(id.to_string());
    }

    pub fn applications(&self) -> Vec<MultipartForm> {
        self.state.lock().unwrap().applications.clone()
    }

    fn find(state: &mut State, id: &str) -> Option<usize> {
        state.jobs.iter().position(|j| j["_id"] == id)
    }

    fn route(&self, req: &HttpRequest) -> HttpResponse {
        let url = url::Url::parse(&req.url).expect("absolute url");
        let path = url.path().strip_prefix("/api/v1/").unwrap_or(url.path());
        // a lone key parses as (key, ""), which percent-decodes the segment
        let parts: Vec<String> = path
            .split('/')
            .map(|s| {
                url::form_urlencoded::parse(s.as_bytes())
                    .next()
                    .map(|(k, _)| k.into_owned())
                    .unwrap_or_default()
            })
            .collect();
        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();

        if parts.as_slice() == ["category", "getAllCategories", ""] {
            assert_eq!(url.query(), Some("type=job"));
            return HttpResponse::json(
                200,
                &json!([
                    {"_id": "type-ft", "name": "Full time"},
                    {"_id": "type-ct", "name": "Contract"}
                ]),
            );
        }

        let expected = format!("Bearer {VALID_TOKEN}");
        if req.header("Authorization") != Some(expected.as_str()) {
            return msg(401, "Unauthorized");
        }

        let mut state = self.state.lock().unwrap();
        match (req.method, parts.as_slice()) {
            (Method::Get, ["organization", "getAll"]) => ok(json!([
                {"_id": "org-1", "orgName": "Acme Corp"},
                {"_id": "org-2", "orgName": "Globex"}
            ])),
            (Method::Get, ["job", "allJobs"]) => ok(Value::Array(state.jobs.clone())),
            (Method::Get, ["job", "getJobById", id]) => match Self::find(&mut state, id) {
                Some(i) => ok(state.jobs[i].clone()),
                None => msg(404, "Job not found"),
            },
            (Method::Post, ["job", "create"]) => {
                let Body::Json(b) = &req.body else {
                    return msg(400, "expected JSON body");
                };
                let org = b["organization"].as_str().unwrap_or_default();
                let ty = b["type"].as_str().unwrap_or_default();
                let (Some(org_label), Some(type_label)) = (org_name(org), type_name(ty)) else {
                    return msg(400, "Unknown organization or job type");
                };
                state.next_id += 1;
                let job = json!({
                    "_id": state.next_id.to_string(),
                    "title": b["title"],
                    "description": b["description"],
                    "avgAnnualSalary": b["avgAnnualSalary"],
                    "organization": {"_id": org, "orgName": org_label},
                    "type": {"_id": ty, "name": type_label},
                    "createdAt": "2024-01-15T12:00:00.000Z",
                    "status": 1
                });
                state.jobs.push(job.clone());
                if self.ack_only_create.load(Ordering::SeqCst) {
                    return msg(201, "Job created successfully");
                }
                ok(job)
            }
            (Method::Patch, ["job", "update", id]) => {
                let Body::Json(b) = &req.body else {
                    return msg(400, "expected JSON body");
                };
                let Some(i) = Self::find(&mut state, id) else {
                    return msg(404, "Job not found");
                };
                for key in ["title", "description", "avgAnnualSalary"] {
                    if let Some(v) = b.get(key) {
                        state.jobs[i][key] = v.clone();
                    }
                }
                ok(state.jobs[i].clone())
            }
            (Method::Put, ["job", "delete", id]) => match Self::find(&mut state, id) {
                Some(i) => {
                    state.jobs[i]["status"] = json!(0);
                    msg(200, "Job deleted")
                }
                None => msg(404, "Job not found"),
            },
            (Method::Post, ["job", "apply", id]) => {
                let Body::Multipart(form) = &req.body else {
                    return msg(400, "expected multipart body");
                };
                if Self::find(&mut state, id).is_none() {
                    return msg(404, "Job not found");
                }
                if !state.applied.insert(id.to_string()) {
                    return msg(409, "You have already applied for this job");
                }
                state.applications.push(form.clone());
                msg(200, "Application submitted successfully")
            }
            (Method::Put, ["job", "save", id]) => {
                if Self::find(&mut state, id).is_none() {
                    return msg(404, "Job not found");
                }
                state.saved.insert(id.to_string());
                msg(200, "Job saved")
            }
            (Method::Get, ["job", "getSavedJobs"]) => {
                let list: Vec<Value> = state
                    .jobs
                    .iter()
                    .filter(|j| j["_id"].as_str().is_some_and(|id| state.saved.contains(id)))
                    .cloned()
                    .collect();
                ok(Value::Array(list))
            }
            (Method::Get, ["job", "getAppliedJobs"]) => {
                let list: Vec<Value> = state
                    .jobs
                    .iter()
                    .filter(|j| j["_id"].as_str().is_some_and(|id| state.applied.contains(id)))
                    .cloned()
                    .collect();
                ok(Value::Array(list))
            }
            _ => msg(404, "Route not found"),
        }
    }
}

impl Transport for FakeJobService {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.route(request))
    }
}

/// Client wired to `service` with the given store.
pub fn client_with_store(
    service: &Arc<FakeJobService>,
    store: Arc<dyn CredentialStore>,
) -> JobServiceClient {
    let transport: Arc<dyn Transport> = service.clone();
    JobServiceClient::new(RequestExecutor::new(BASE_URL, store, transport).unwrap())
}

/// Client wired to `service` with a valid session; returns the store too.
pub fn signed_in(service: &Arc<FakeJobService>) -> (JobServiceClient, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::with_token(VALID_TOKEN));
    let client = client_with_store(service, store.clone());
    (client, store)
}
