use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;

use super::enums::scenario_job_status::ScenarioJobStatus;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("missing configuration value: {0}")]
    MissingCredential(&'static str),

    #[error("scenario api returned status code {code}: {message}")]
    Api { code: StatusCode, message: String },

    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("could not find job id in submission response: {body}")]
    MissingJobId { body: String },

    #[error("could not parse scenario response: {body}")]
    MalformedResponse { body: String },

    #[error("job {job_id} reported unrecognized status \"{status}\"")]
    UnrecognizedStatus { job_id: String, status: String },

    #[error("job {job_id} ended with status {status}: {payload}")]
    JobFailed {
        job_id: String,
        status: ScenarioJobStatus,
        payload: String,
    },

    #[error("polling job {job_id} timed out after {} seconds", .timeout.as_secs())]
    PollTimeout { job_id: String, timeout: Duration },

    #[error("asset {asset_id} has no downloadable url: {body}")]
    MissingAssetUrl { asset_id: String, body: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
