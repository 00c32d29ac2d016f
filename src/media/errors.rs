use super::apis::scenario::errors::ScenarioError;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("invalid generation request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}
