use std::path::PathBuf;
use std::time::Duration;

// Generation parameters shared by every scene in a batch. The prompt itself
// comes from the scene text.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model_id: String,
    pub width: u16,
    pub height: u16,
    pub guidance: f32,
    pub num_inference_steps: u16,
    pub num_samples: u8,
    pub poll_interval: Duration,
    pub timeout: Duration,
    pub out_dir: PathBuf,
}
