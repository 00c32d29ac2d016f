use serde::Deserialize;

// Upstream tooling has emitted both "scenes" and "Scenes" as the top-level
// key, so both casings are accepted. An empty lowercase list defers to the
// titlecase one.
#[derive(Debug, Deserialize)]
pub struct SceneDocument {
    pub scenes: Option<Vec<String>>,
    #[serde(rename(deserialize = "Scenes"))]
    pub scenes_titlecase: Option<Vec<String>>,
}

impl SceneDocument {
    pub fn into_scenes(self) -> Vec<String> {
        self.scenes
            .filter(|scenes| !scenes.is_empty())
            .or(self.scenes_titlecase)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_lowercase_key() {
        let document: SceneDocument =
            serde_json::from_str(r#"{ "scenes": ["a", "b"] }"#).unwrap();
        assert_eq!(document.into_scenes(), vec!["a", "b"]);
    }

    #[test]
    fn reads_the_titlecase_key() {
        let document: SceneDocument = serde_json::from_str(r#"{ "Scenes": ["a"] }"#).unwrap();
        assert_eq!(document.into_scenes(), vec!["a"]);
    }

    #[test]
    fn empty_lowercase_list_defers_to_titlecase() {
        let document: SceneDocument =
            serde_json::from_str(r#"{ "scenes": [], "Scenes": ["a"] }"#).unwrap();
        assert_eq!(document.into_scenes(), vec!["a"]);
    }

    #[test]
    fn missing_keys_yield_an_empty_list() {
        let document: SceneDocument = serde_json::from_str(r#"{ "title": "pigs" }"#).unwrap();
        assert!(document.into_scenes().is_empty());
    }

    #[test]
    fn rejects_a_non_list_scenes_value() {
        let result = serde_json::from_str::<SceneDocument>(r#"{ "scenes": "not a list" }"#);
        assert!(result.is_err());
    }
}
