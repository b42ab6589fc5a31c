use crate::core::request::ResolvedRequest;
use crate::domain::model::Toolbox;
use crate::domain::outcome::{JobStatus, OutputValue, ServiceMessage, ToolOutcome};
use crate::domain::ports::{ConfigProvider, GeoprocessingService};
use crate::utils::error::{GpError, Result};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Every field may be missing or `null`.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ExecuteResponse {
    #[serde(default)]
    results: Vec<OutputValue>,
    #[serde(default)]
    messages: Vec<ServiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ResultRef {
    #[serde(rename = "paramUrl")]
    param_url: String,
}

#[derive(Debug, Deserialize)]
struct JobResponse {
    #[serde(rename = "jobId")]
    job_id: String,
    #[serde(rename = "jobStatus")]
    job_status: String,
    #[serde(default)]
    results: BTreeMap<String, ResultRef>,
    #[serde(default)]
    messages: Vec<ServiceMessage>,
}

/// ArcGIS REST GPServer client.
pub struct RestGeoprocessingService<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> RestGeoprocessingService<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn tool_url(&self, toolbox: Toolbox, tool_name: &str) -> Result<String> {
        let field = format!("services.{}", toolbox.alias());
        let base = *validate_required_field(&field, &self.config.service_url(toolbox))?;
        Ok(format!("{}/{}", base.trim_end_matches('/'), tool_name))
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (key, value) in self.config.headers() {
            request = request.header(key, value);
        }
        request
    }

    /// `f=json` plus the token, appended to any other fields.
    fn common_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("f".to_string(), "json".to_string())];
        if let Some(token) = self.config.token() {
            fields.push(("token".to_string(), token.to_string()));
        }
        fields
    }

    async fn post_form(&self, url: &str, mut form: Vec<(String, String)>) -> Result<Value> {
        form.extend(self.common_fields());
        tracing::debug!("POST {} ({} fields)", url, form.len());
        let response = self.with_headers(self.client.post(url)).form(&form).send().await?;
        read_json(response).await
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);
        let response = self
            .with_headers(self.client.get(url))
            .query(&self.common_fields())
            .send()
            .await?;
        read_json(response).await
    }

    async fn wait_for_job(&self, job_url: &str, job_id: &str) -> Result<JobResponse> {
        let interval = Duration::from_millis(self.config.poll_interval_ms());
        let max_attempts = self.config.max_poll_attempts();

        for attempt in 1..=max_attempts {
            tokio::time::sleep(interval).await;
            // A failed status request does not end the job; keep polling it.
            let job: JobResponse = match self.get_json(job_url).await {
                Ok(value) => serde_json::from_value(value)?,
                Err(GpError::HttpError(e)) if e.is_timeout() || e.is_connect() => {
                    tracing::warn!("Job {} poll {}/{} failed: {}", job_id, attempt, max_attempts, e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            let status = parse_status(&job.job_status)?;
            tracing::debug!("Job {} poll {}/{}: {}", job_id, attempt, max_attempts, status);
            if status.is_terminal() {
                return Ok(job);
            }
        }

        Err(GpError::PollTimeout {
            job_id: job_id.to_string(),
            attempts: max_attempts,
        })
    }
}

#[async_trait]
impl<C: ConfigProvider> GeoprocessingService for RestGeoprocessingService<C> {
    async fn execute(&self, request: &ResolvedRequest) -> Result<ToolOutcome> {
        let url = format!("{}/execute", self.tool_url(request.toolbox, request.tool_name)?);
        tracing::info!("Executing {} synchronously", request.execute_name);

        let submitted_at = Utc::now();
        let body: ExecuteResponse = serde_json::from_value(self.post_form(&url, request.to_form()).await?)?;

        Ok(ToolOutcome {
            execute_name: request.execute_name.clone(),
            job_id: None,
            status: JobStatus::Succeeded,
            outputs: body.results,
            messages: body.messages,
            submitted_at,
            completed_at: Utc::now(),
        })
    }

    async fn submit_job(&self, request: &ResolvedRequest) -> Result<ToolOutcome> {
        let tool_url = self.tool_url(request.toolbox, request.tool_name)?;
        let submitted_at = Utc::now();

        let submitted: JobResponse = serde_json::from_value(
            self.post_form(&format!("{}/submitJob", tool_url), request.to_form())
                .await?,
        )?;
        let job_id = submitted.job_id;
        tracing::info!(
            "Submitted {} as job {} ({})",
            request.execute_name,
            job_id,
            submitted.job_status
        );

        let job_url = format!("{}/jobs/{}", tool_url, job_id);
        let job = self.wait_for_job(&job_url, &job_id).await?;
        let status = parse_status(&job.job_status)?;

        if !status.is_success() {
            tracing::warn!("Job {} ended with {}", job_id, status);
            return Err(GpError::JobFailed {
                job_id,
                status: status.to_string(),
                messages: job.messages.iter().map(ToString::to_string).collect(),
            });
        }

        let mut outputs = Vec::with_capacity(job.results.len());
        for result in job.results.values() {
            let url = format!("{}/{}", job_url, result.param_url.trim_start_matches('/'));
            outputs.push(serde_json::from_value(self.get_json(&url).await?)?);
        }

        tracing::info!("Job {} succeeded with {} outputs", job_id, outputs.len());
        Ok(ToolOutcome {
            execute_name: request.execute_name.clone(),
            job_id: Some(job_id),
            status,
            outputs,
            messages: job.messages,
            submitted_at,
            completed_at: Utc::now(),
        })
    }

    async fn cancel_job(&self, toolbox: Toolbox, tool_name: &str, job_id: &str) -> Result<()> {
        let url = format!("{}/jobs/{}/cancel", self.tool_url(toolbox, tool_name)?, job_id);
        tracing::info!("Cancelling job {}", job_id);
        self.post_form(&url, Vec::new()).await?;
        Ok(())
    }
}

fn parse_status(value: &str) -> Result<JobStatus> {
    JobStatus::parse(value).ok_or_else(|| GpError::ServiceError {
        code: 0,
        message: format!("unrecognized job status '{}'", value),
        details: Vec::new(),
    })
}

/// The service reports failures in an `error` object, often with HTTP 200.
async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await?;
    tracing::debug!("Response status: {}", status);

    let value: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) if status.is_success() => return Err(err.into()),
        Err(_) => {
            return Err(GpError::ServiceError {
                code: i64::from(status.as_u16()),
                message: text,
                details: Vec::new(),
            })
        }
    };

    if let Some(error) = value.get("error") {
        let detail: ErrorDetail = serde_json::from_value(error.clone()).unwrap_or(ErrorDetail {
            code: None,
            message: Some(error.to_string()),
            details: None,
        });
        return Err(GpError::ServiceError {
            code: detail.code.unwrap_or_else(|| i64::from(status.as_u16())),
            message: detail.message.unwrap_or_else(|| status.to_string()),
            details: detail
                .details
                .unwrap_or_default()
                .into_iter()
                .map(|d| match d {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        });
    }

    if !status.is_success() {
        return Err(GpError::ServiceError {
            code: i64::from(status.as_u16()),
            message: status.to_string(),
            details: Vec::new(),
        });
    }

    Ok(value)
}
