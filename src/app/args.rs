use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "storyboard",
    about = "Generate images for story scenes with the Scenario API"
)]
pub struct Args {
    /// Path to the scenes JSON file.
    #[arg(long, default_value = "scenes.json")]
    pub json: PathBuf,

    /// Scenario model to generate with.
    #[arg(long, default_value = "flux.1-dev")]
    pub model_id: String,

    /// Root directory for downloaded images.
    #[arg(long, default_value = "outputs")]
    pub out_dir: PathBuf,

    #[arg(long, default_value_t = 1024)]
    pub width: u16,

    #[arg(long, default_value_t = 1024)]
    pub height: u16,

    #[arg(long, default_value_t = 10.0)]
    pub guidance: f32,

    #[arg(long, default_value_t = 30)]
    pub steps: u16,

    #[arg(long, default_value_t = 1)]
    pub num_samples: u8,

    /// Seconds between job polls.
    #[arg(long, default_value_t = 3)]
    pub poll_interval: u64,

    /// Polling timeout in seconds per job.
    #[arg(long, default_value_t = 300)]
    pub timeout: u64,
}
