use std::path::{Path, PathBuf};

use tokio_retry::{strategy::FixedInterval, Retry};
use validator::Validate;

use super::{
    apis::scenario::{
        errors::ScenarioError, models::poll_settings::PollSettings, service::ScenarioClient,
    },
    dtos::generate_images_dto::GenerateImagesDto,
    errors::MediaError,
    models::{batch_outcome::BatchOutcome, generation_settings::GenerationSettings},
};

// Scenes are processed strictly one at a time. A failure local to one scene
// (or one asset) is logged and the batch moves on.
pub async fn generate_images_for_scenes(
    scenes: &[String],
    settings: &GenerationSettings,
    client: &ScenarioClient,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (index, scene) in scenes.iter().enumerate() {
        let scene_number = index + 1;

        tracing::info!(
            "scene {}/{}: {}",
            scene_number,
            scenes.len(),
            preview(scene)
        );

        match generate_images_for_scene(scene, scene_number, settings, client).await {
            Ok(downloaded) if downloaded > 0 => outcome.completed += 1,
            Ok(_) => {
                tracing::warn!("scene {} produced no images", scene_number);
                outcome.failed += 1;
            }
            Err(e) => {
                tracing::error!("scene {} failed: {}", scene_number, e);
                outcome.failed += 1;
            }
        }
    }

    outcome
}

async fn generate_images_for_scene(
    scene: &str,
    scene_number: usize,
    settings: &GenerationSettings,
    client: &ScenarioClient,
) -> Result<usize, MediaError> {
    let dto = provide_generate_images_dto(scene, settings).sanitized();
    dto.validate()?;

    let job_id = client.submit_txt2img(&dto).await?;
    tracing::info!("submitted job {}", job_id);

    let poll_settings = PollSettings {
        interval: settings.poll_interval,
        timeout: settings.timeout,
    };
    let job = client.poll_job(&job_id, &poll_settings).await?;

    let asset_ids = job.asset_ids();
    if asset_ids.is_empty() {
        tracing::warn!("no assets returned for job {}", job_id);
        return Ok(0);
    }

    let mut downloaded = 0;

    for (index, asset_id) in asset_ids.iter().enumerate() {
        let dest = scene_output_path(&settings.out_dir, scene_number, index + 1);

        match download_asset_with_retry(asset_id, &dest, client).await {
            Ok(path) => {
                tracing::info!("downloaded asset {} -> {}", asset_id, path.display());
                downloaded += 1;
            }
            Err(e) => tracing::error!("failed to download asset {}: {}", asset_id, e),
        }
    }

    Ok(downloaded)
}

async fn download_asset_with_retry(
    asset_id: &str,
    dest: &Path,
    client: &ScenarioClient,
) -> Result<PathBuf, ScenarioError> {
    let retry_strategy = FixedInterval::from_millis(3000).take(3);

    Retry::spawn(retry_strategy, || async {
        download_asset(asset_id, dest, client).await
    })
    .await
}

async fn download_asset(
    asset_id: &str,
    dest: &Path,
    client: &ScenarioClient,
) -> Result<PathBuf, ScenarioError> {
    let url = client.fetch_asset_url(asset_id).await?;
    client.download_file(&url, dest).await
}

fn provide_generate_images_dto(scene: &str, settings: &GenerationSettings) -> GenerateImagesDto {
    GenerateImagesDto {
        prompt: scene.to_string(),
        num_samples: settings.num_samples,
        guidance: settings.guidance,
        num_inference_steps: settings.num_inference_steps,
        width: settings.width,
        height: settings.height,
        model_id: settings.model_id.to_string(),
    }
}

fn scene_output_path(out_dir: &Path, scene_number: usize, asset_number: usize) -> PathBuf {
    out_dir
        .join(format!("scene_{:03}", scene_number))
        .join(format!("scene_{:03}_asset_{}.png", scene_number, asset_number))
}

fn preview(prompt: &str) -> String {
    if prompt.chars().count() <= 80 {
        return prompt.to_string();
    }

    let truncated: String = prompt.chars().take(80).collect();
    [truncated.as_str(), "..."].concat()
}
