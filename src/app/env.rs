use serde::Deserialize;

// Both credential halves stay optional here so that a missing one surfaces as
// a configuration error from the client, not as an envy parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub scenario_api_key: Option<String>,
    pub scenario_api_secret: Option<String>,
}
