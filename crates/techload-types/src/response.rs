//! Response envelope returned to callers of the jobs route.

use crate::job::Job;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlowStatus {
    Success,
    Failure,
}

/// Wrapper around the generated jobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobData {
    pub jobs: Vec<Job>,
}

/// `{ flowStatus, flowStatusMessage, jobData? }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsResponse {
    pub flow_status: FlowStatus,
    pub flow_status_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_data: Option<JobData>,
}

impl JobsResponse {
    pub fn success(jobs: Vec<Job>) -> Self {
        Self {
            flow_status: FlowStatus::Success,
            flow_status_message: format!("Generated {} jobs.", jobs.len()),
            job_data: Some(JobData { jobs }),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            flow_status: FlowStatus::Failure,
            flow_status_message: message.into(),
            job_data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.flow_status == FlowStatus::Success
    }
}
