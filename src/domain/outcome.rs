use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a tool call reaches the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Follow the tool's own `run_async` flag when it has one.
    #[default]
    Auto,
    Sync,
    Async,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "esriJobNew")]
    New,
    #[serde(rename = "esriJobSubmitted")]
    Submitted,
    #[serde(rename = "esriJobWaiting")]
    Waiting,
    #[serde(rename = "esriJobExecuting")]
    Executing,
    #[serde(rename = "esriJobSucceeded")]
    Succeeded,
    #[serde(rename = "esriJobFailed")]
    Failed,
    #[serde(rename = "esriJobTimedOut")]
    TimedOut,
    #[serde(rename = "esriJobCancelling")]
    Cancelling,
    #[serde(rename = "esriJobCancelled")]
    Cancelled,
    #[serde(rename = "esriJobDeleting")]
    Deleting,
    #[serde(rename = "esriJobDeleted")]
    Deleted,
}

impl JobStatus {
    const ALL: [JobStatus; 11] = [
        JobStatus::New,
        JobStatus::Submitted,
        JobStatus::Waiting,
        JobStatus::Executing,
        JobStatus::Succeeded,
        JobStatus::Failed,
        JobStatus::TimedOut,
        JobStatus::Cancelling,
        JobStatus::Cancelled,
        JobStatus::Deleting,
        JobStatus::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::New => "esriJobNew",
            JobStatus::Submitted => "esriJobSubmitted",
            JobStatus::Waiting => "esriJobWaiting",
            JobStatus::Executing => "esriJobExecuting",
            JobStatus::Succeeded => "esriJobSucceeded",
            JobStatus::Failed => "esriJobFailed",
            JobStatus::TimedOut => "esriJobTimedOut",
            JobStatus::Cancelling => "esriJobCancelling",
            JobStatus::Cancelled => "esriJobCancelled",
            JobStatus::Deleting => "esriJobDeleting",
            JobStatus::Deleted => "esriJobDeleted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(value))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded
                | JobStatus::Failed
                | JobStatus::TimedOut
                | JobStatus::Cancelled
                | JobStatus::Deleted
        )
    }

    pub fn is_success(&self) -> bool {
        *self == JobStatus::Succeeded
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    #[serde(rename = "paramName")]
    pub name: String,
    #[serde(rename = "dataType", default)]
    pub data_type: String,
    #[serde(default)]
    pub value: Value,
}

/// What came back from one tool execution, sync or async.
#[derive(Debug, Clone, Serialize)]
pub struct ToolOutcome {
    pub execute_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub status: JobStatus,
    pub outputs: Vec<OutputValue>,
    pub messages: Vec<ServiceMessage>,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl ToolOutcome {
    pub fn output(&self, name: &str) -> Option<&Value> {
        self.outputs.iter().find(|o| o.name == name).map(|o| &o.value)
    }

    pub fn elapsed_ms(&self) -> i64 {
        (self.completed_at - self.submitted_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_parse() {
        assert_eq!(JobStatus::parse("esriJobSucceeded"), Some(JobStatus::Succeeded));
        assert_eq!(JobStatus::parse("ESRIJOBEXECUTING"), Some(JobStatus::Executing));
        assert_eq!(JobStatus::parse("done"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(!JobStatus::Cancelling.is_terminal());
        assert!(!JobStatus::Waiting.is_terminal());
        assert!(JobStatus::Succeeded.is_success());
    }

    #[test]
    fn test_output_value_from_service_json() {
        let value: OutputValue = serde_json::from_str(
            r#"{"paramName":"out_network_diagram_layer","dataType":"GPString","value":"Diagram 1"}"#,
        )
        .unwrap();
        assert_eq!(value.name, "out_network_diagram_layer");
        assert_eq!(value.value, Value::String("Diagram 1".to_string()));
    }
}
