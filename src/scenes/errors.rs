use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScenesError {
    #[error("failed to read scenes file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scenes file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
