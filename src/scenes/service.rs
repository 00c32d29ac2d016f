use std::{fs, path::Path};

use super::{errors::ScenesError, structs::scene_document::SceneDocument};

pub fn load_scenes(path: &Path) -> Result<Vec<String>, ScenesError> {
    let contents = fs::read_to_string(path).map_err(|e| ScenesError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document: SceneDocument =
        serde_json::from_str(&contents).map_err(|e| ScenesError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(document.into_scenes())
}
