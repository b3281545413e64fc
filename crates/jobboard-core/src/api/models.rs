//! Job-service entities as they appear on the wire.
//!
//! The service is loose about shapes: references arrive either as a bare id
//! or a populated object, salaries as numbers or numeric strings, and status
//! as `1`/`0` or a word. Deserialization accepts all of these; serialization
//! emits the canonical form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Publication status of a job. Deleting a job flips it to `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobStatus {
    #[default]
    Active,
    Inactive,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Inactive => "inactive",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Code(i64),
    Flag(bool),
    Word(String),
}

impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StatusRepr::deserialize(deserializer)? {
            StatusRepr::Code(1) | StatusRepr::Flag(true) => Ok(JobStatus::Active),
            StatusRepr::Code(_) | StatusRepr::Flag(false) => Ok(JobStatus::Inactive),
            StatusRepr::Word(w) => match w.trim().to_ascii_lowercase().as_str() {
                "active" | "1" => Ok(JobStatus::Active),
                "inactive" | "0" | "deleted" => Ok(JobStatus::Inactive),
                other => Err(serde::de::Error::custom(format!("unknown job status {other:?}"))),
            },
        }
    }
}

impl Serialize for JobStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(match self {
            JobStatus::Active => 1,
            JobStatus::Inactive => 0,
        })
    }
}

/// Reference to another entity: id plus display name when the service populated it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EntityRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
        }
    }

    /// Display name, falling back to the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RefRepr {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default, alias = "orgName")]
        name: Option<String>,
    },
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RefRepr::deserialize(deserializer)? {
            RefRepr::Id(id) => EntityRef { id, name: None },
            RefRepr::Populated { id, name } => EntityRef { id, name },
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SalaryRepr {
    Number(f64),
    Text(String),
}

fn de_salary<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match SalaryRepr::deserialize(deserializer)? {
        SalaryRepr::Number(n) => Ok(n),
        SalaryRepr::Text(s) => s
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid salary {s:?}"))),
    }
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "avgAnnualSalary", deserialize_with = "de_salary", default)]
    pub avg_annual_salary: f64,
    /// `None` when the service sent `null` or left the reference out.
    #[serde(default)]
    pub organization: Option<EntityRef>,
    #[serde(rename = "type", default)]
    pub job_type: Option<EntityRef>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: JobStatus,
}

impl Job {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization.as_ref().map(|r| r.id.as_str())
    }

    pub fn job_type_id(&self) -> Option<&str> {
        self.job_type.as_ref().map(|r| r.id.as_str())
    }

    pub fn organization_label(&self) -> &str {
        self.organization.as_ref().map_or("-", EntityRef::label)
    }

    pub fn job_type_label(&self) -> &str {
        self.job_type.as_ref().map_or("-", EntityRef::label)
    }
}

/// An employer, as returned by `organization/getAll`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "orgName", alias = "name")]
    pub name: String,
}

/// A job category (full time, contract, ...), from the category endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobType {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// Payload for `job/create`. Ids come from the caller's reference-data selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJob {
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(rename = "avgAnnualSalary")]
    pub avg_annual_salary: f64,
    pub description: String,
    pub organization: String,
}

/// Partial payload for `job/update/:id`; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "avgAnnualSalary", skip_serializing_if = "Option::is_none")]
    pub avg_annual_salary: Option<f64>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.avg_annual_salary.is_none()
    }
}

/// Applicant fields submitted with an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantInfo {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
}

/// The document attached to an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a document from disk, keeping only the final path component as its name.
    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let bytes =
            std::fs::read(path).with_context(|| format!("read document: {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());
        Ok(Self { file_name, bytes })
    }
}

/// A submitted application as confirmed by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub job_id: String,
    pub applicant: ApplicantInfo,
    pub document_name: String,
    /// Confirmation text from the service, if it sent one.
    pub message: Option<String>,
}
