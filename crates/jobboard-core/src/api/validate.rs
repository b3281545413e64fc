//! Client-side input checks run before any request is sent.

use crate::http::RequestError;

use super::models::{ApplicantInfo, JobUpdate, NewJob, ResumeDocument};

const PDF_MAGIC: &[u8] = b"%PDF-";

fn require(field: &str, value: &str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        return Err(RequestError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn salary(value: f64) -> Result<(), RequestError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RequestError::Validation(
            "average annual salary must be a non-negative number".into(),
        ));
    }
    Ok(())
}

pub fn job_id(id: &str) -> Result<(), RequestError> {
    require("job id", id)
}

pub fn new_job(job: &NewJob) -> Result<(), RequestError> {
    require("title", &job.title)?;
    require("organization", &job.organization)?;
    require("job type", &job.job_type)?;
    salary(job.avg_annual_salary)
}

pub fn job_update(update: &JobUpdate) -> Result<(), RequestError> {
    if update.is_empty() {
        return Err(RequestError::Validation("nothing to update".into()));
    }
    if let Some(title) = &update.title {
        require("title", title)?;
    }
    if let Some(s) = update.avg_annual_salary {
        salary(s)?;
    }
    Ok(())
}

pub fn applicant(info: &ApplicantInfo) -> Result<(), RequestError> {
    require("full name", &info.full_name)?;
    require("email", &info.email)?;
    require("mobile number", &info.mobile_number)
}

/// A resume must be a PDF by name and by content.
pub fn resume(doc: &ResumeDocument) -> Result<(), RequestError> {
    let named_pdf = doc.file_name.to_ascii_lowercase().ends_with(".pdf");
    if !named_pdf || !doc.bytes.starts_with(PDF_MAGIC) {
        return Err(RequestError::Validation(format!(
            "resume must be a PDF document (got {:?})",
            doc.file_name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, email: &str, mobile: &str) -> ApplicantInfo {
        ApplicantInfo {
            full_name: name.into(),
            email: email.into(),
            mobile_number: mobile.into(),
        }
    }

    #[test]
    fn blank_applicant_fields_rejected() {
        assert!(applicant(&info("Ada", "ada@example.com", "0771234567")).is_ok());
        let err = applicant(&info("  ", "ada@example.com", "1")).unwrap_err();
        assert_eq!(err, RequestError::Validation("full name is required".into()));
        assert!(applicant(&info("Ada", "", "1")).is_err());
        assert!(applicant(&info("Ada", "a@b", "")).is_err());
    }

    #[test]
    fn resume_must_be_pdf() {
        assert!(resume(&ResumeDocument::new("cv.PDF", b"%PDF-1.7".to_vec())).is_ok());
        assert!(resume(&ResumeDocument::new("cv.docx", b"%PDF-1.7".to_vec())).is_err());
        assert!(resume(&ResumeDocument::new("cv.pdf", b"PK\x03\x04".to_vec())).is_err());
        assert!(resume(&ResumeDocument::new("cv.pdf", Vec::new())).is_err());
    }

    #[test]
    fn new_job_needs_selected_refs_and_sane_salary() {
        let mut job = NewJob {
            title: "Engineer".into(),
            job_type: "t1".into(),
            avg_annual_salary: 100.0,
            description: String::new(),
            organization: "o1".into(),
        };
        assert!(new_job(&job).is_ok());
        job.organization = String::new();
        assert!(new_job(&job).is_err());
        job.organization = "o1".into();
        job.avg_annual_salary = -1.0;
        assert!(new_job(&job).is_err());
        job.avg_annual_salary = f64::NAN;
        assert!(new_job(&job).is_err());
    }

    #[test]
    fn update_must_change_something() {
        assert!(job_update(&JobUpdate::default()).is_err());
        assert!(job_update(&JobUpdate {
            title: Some(" ".into()),
            ..Default::default()
        })
        .is_err());
        assert!(job_update(&JobUpdate {
            description: Some("new text".into()),
            ..Default::default()
        })
        .is_ok());
    }
}
