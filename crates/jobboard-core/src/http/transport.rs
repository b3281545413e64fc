//! Wire transport: the blocking seam under the executor.

use thiserror::Error;

use super::request::{Body, HttpRequest, HttpResponse, Method, MultipartForm};

/// Failure below the HTTP layer (no status was received).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Multipart form could not be assembled.
    #[error("multipart form: {0}")]
    Form(#[from] curl::FormError),
    /// Deadline expired before a response arrived.
    #[error("operation timed out")]
    TimedOut,
    /// Could not reach the service.
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("{0}")]
    Other(String),
}

/// Sends one fully resolved request and returns the raw response.
///
/// Implementations block; the executor runs them on tokio's blocking pool.
pub trait Transport: Send + Sync + 'static {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport;

impl CurlTransport {
    pub fn new() -> Self {
        Self
    }
}

fn build_form(form: &MultipartForm) -> Result<curl::easy::Form, TransportError> {
    let mut out = curl::easy::Form::new();
    for (name, value) in &form.fields {
        out.part(name).contents(value.as_bytes()).add()?;
    }
    if let Some(file) = &form.file {
        out.part(&file.field)
            .buffer(&file.file_name, file.bytes.clone())
            .content_type(&file.content_type)
            .add()?;
    }
    Ok(out)
}

impl Transport for CurlTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        easy.connect_timeout(request.connect_timeout)?;
        easy.timeout(request.timeout)?;

        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }

        match &request.body {
            Body::Empty => match request.method {
                Method::Get => easy.get(true)?,
                Method::Post => {
                    easy.post(true)?;
                    easy.post_field_size(0)?;
                }
                m => easy.custom_request(m.as_str())?,
            },
            Body::Json(value) => {
                list.append("Content-Type: application/json")?;
                let data = serde_json::to_vec(value)
                    .map_err(|e| TransportError::Other(format!("encode body: {e}")))?;
                easy.post(true)?;
                easy.post_fields_copy(&data)?;
                if request.method != Method::Post {
                    easy.custom_request(request.method.as_str())?;
                }
            }
            Body::Multipart(form) => {
                // libcurl sets the multipart Content-Type with boundary itself.
                easy.httppost(build_form(form)?)?;
                if request.method != Method::Post {
                    easy.custom_request(request.method.as_str())?;
                }
            }
        }
        // Suppress `Expect: 100-continue` so small uploads are sent in one go.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FilePart;

    #[test]
    fn form_builds_with_text_and_file_parts() {
        let form = MultipartForm::new()
            .text("fullName", "Ada Lovelace")
            .text("email", "ada@example.com")
            .file(FilePart {
                field: "resume".into(),
                file_name: "cv.pdf".into(),
                content_type: "application/pdf".into(),
                bytes: b"%PDF-1.4 test".to_vec(),
            });
        assert!(build_form(&form).is_ok());
    }
}
