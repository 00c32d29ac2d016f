use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScenarioJobResponse {
    pub job: ScenarioJob,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioJob {
    #[serde(rename(deserialize = "jobId"))]
    pub job_id: String,
    // The submission response only promises an identifier, so status may be absent.
    #[serde(default)]
    pub status: String,
    pub progress: Option<f64>,
    pub metadata: Option<ScenarioJobMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioJobMetadata {
    #[serde(rename(deserialize = "assetIds"))]
    pub asset_ids: Option<Vec<String>>,
}

impl ScenarioJob {
    pub fn asset_ids(&self) -> Vec<String> {
        match &self.metadata {
            Some(metadata) => metadata.asset_ids.clone().unwrap_or_default(),
            None => Vec::new(),
        }
    }
}
