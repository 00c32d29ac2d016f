use super::super::errors::ScenarioError;

// Scenario requires Basic authentication with api_key:api_secret. A single
// key is not enough, so both halves are checked before any request exists.
#[derive(Clone, Debug)]
pub struct ScenarioCredentials {
    api_key: String,
    api_secret: String,
}

impl ScenarioCredentials {
    pub fn from_parts(
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Result<Self, ScenarioError> {
        let Some(api_key) = api_key.filter(|key| !key.is_empty())
        else {
            return Err(ScenarioError::MissingCredential("scenario_api_key"));
        };

        let Some(api_secret) = api_secret.filter(|secret| !secret.is_empty())
        else {
            return Err(ScenarioError::MissingCredential("scenario_api_secret"));
        };

        Ok(Self {
            api_key,
            api_secret,
        })
    }

    pub fn basic_token(&self) -> String {
        base64::encode([self.api_key.as_str(), ":", self.api_secret.as_str()].concat())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn rejects_missing_key() {
        let result = ScenarioCredentials::from_parts(None, Some("secret".to_string()));
        assert_matches!(
            result,
            Err(ScenarioError::MissingCredential("scenario_api_key"))
        );
    }

    #[test]
    fn rejects_missing_secret() {
        let result = ScenarioCredentials::from_parts(Some("key".to_string()), None);
        assert_matches!(
            result,
            Err(ScenarioError::MissingCredential("scenario_api_secret"))
        );
    }

    #[test]
    fn rejects_empty_secret() {
        let result =
            ScenarioCredentials::from_parts(Some("key".to_string()), Some(String::new()));
        assert_matches!(
            result,
            Err(ScenarioError::MissingCredential("scenario_api_secret"))
        );
    }

    #[test]
    fn encodes_basic_token() {
        let credentials =
            ScenarioCredentials::from_parts(Some("key".to_string()), Some("secret".to_string()))
                .unwrap();

        assert_eq!(credentials.basic_token(), base64::encode("key:secret"));
    }
}
