use std::time::Duration;

use analytica_core::{EndpointConfig, SubmissionRequest, FILE_FIELD};
use analytica_logging::{analytica_info, analytica_warn};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::types::{map_reqwest_error, FailureKind, SubmissionError, SubmissionResult};

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub connect_timeout: Duration,
    /// No overall bound when `None`; analyses can take a long time.
    pub request_timeout: Option<Duration>,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// Sends analysis requests. Each `submit` is exactly one POST; nothing is
/// retried or queued.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    config: EndpointConfig,
    client: reqwest::Client,
}

impl SubmissionClient {
    pub fn new(config: EndpointConfig, settings: SubmitSettings) -> Result<Self, SubmissionError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(map_reqwest_error)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResult, SubmissionError> {
        let url = self
            .config
            .resolve(request.base_url_override.as_deref())
            .analysis_url();
        let form = build_form(request)?;

        analytica_info!("Submitting analysis request to {}", url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                let err = map_reqwest_error(err);
                analytica_warn!("Submission to {} failed: {}", url, err);
                err
            })?;

        let status = response.status();
        // An unreadable or non-JSON body counts as no body at all.
        let payload = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<Value>(&body)
                .ok()
                .filter(|json| !json.is_null()),
            Err(_) => None,
        };

        if !status.is_success() {
            let err = SubmissionError::from_response(status.as_u16(), payload);
            analytica_warn!("Submission to {} rejected: {}", url, err);
            return Err(err);
        }

        Ok(payload.unwrap_or(Value::Null))
    }
}

/// Multipart body with at most one `file` part.
fn build_form(request: &SubmissionRequest) -> Result<Form, SubmissionError> {
    let form = Form::new();
    let Some(attachment) = request.attachment() else {
        return Ok(form);
    };

    let part = Part::bytes(attachment.bytes)
        .file_name(attachment.file_name)
        .mime_str(&attachment.content_type)
        .map_err(|err| {
            SubmissionError::new(
                FailureKind::InvalidRequest,
                format!("invalid content type {}: {}", attachment.content_type, err),
            )
        })?;
    Ok(form.part(FILE_FIELD, part))
}
