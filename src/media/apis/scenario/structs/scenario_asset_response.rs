use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScenarioAssetResponse {
    pub asset: ScenarioAsset,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioAsset {
    #[serde(default)]
    pub id: String,
    pub url: Option<String>,
}
