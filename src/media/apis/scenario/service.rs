use std::path::{Path, PathBuf};

use reqwest::header;
use tokio::{
    fs,
    io::AsyncWriteExt,
    time::{sleep, Instant},
};

use crate::media::dtos::generate_images_dto::GenerateImagesDto;

use super::{
    config::API_URL,
    enums::scenario_job_status::ScenarioJobStatus,
    errors::ScenarioError,
    models::{
        input_spec::InputSpec, poll_settings::PollSettings,
        scenario_credentials::ScenarioCredentials,
    },
    structs::{
        scenario_asset_response::ScenarioAssetResponse,
        scenario_job_response::{ScenarioJob, ScenarioJobResponse},
    },
};

#[derive(Clone)]
pub struct ScenarioConfig {
    pub base_url: String,
    pub credentials: ScenarioCredentials,
}

impl ScenarioConfig {
    pub fn new(credentials: ScenarioCredentials) -> Self {
        Self {
            base_url: API_URL.to_string(),
            credentials,
        }
    }
}

pub struct ScenarioClient {
    http: reqwest::Client,
    config: ScenarioConfig,
}

impl ScenarioClient {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn submit_txt2img(&self, dto: &GenerateImagesDto) -> Result<String, ScenarioError> {
        let input_spec = provide_input_spec(dto);

        let url = format!("{}/generate/txt2img", self.config.base_url);
        let res = self
            .http
            .post(url)
            .headers(self.auth_headers())
            .json(&input_spec)
            .send()
            .await?;

        let code = res.status();
        let text = res.text().await?;

        if !code.is_success() {
            tracing::error!("submission failed with status code {}: {}", code, text);
            return Err(ScenarioError::Api {
                code,
                message: text,
            });
        }

        match serde_json::from_str::<ScenarioJobResponse>(&text) {
            Ok(response) => match response.job.job_id.is_empty() {
                true => Err(ScenarioError::MissingJobId { body: text }),
                false => Ok(response.job.job_id),
            },
            Err(_) => {
                tracing::error!(%text);
                Err(ScenarioError::MissingJobId { body: text })
            }
        }
    }

    pub async fn poll_job(
        &self,
        job_id: &str,
        settings: &PollSettings,
    ) -> Result<ScenarioJob, ScenarioError> {
        let timer = PollTimer::start(settings);

        loop {
            let (job, payload) = self.get_job_by_id(job_id).await?;

            let Some(status) = ScenarioJobStatus::from_value(&job.status)
            else {
                return Err(ScenarioError::UnrecognizedStatus {
                    job_id: job_id.to_string(),
                    status: job.status,
                });
            };

            tracing::info!(
                "polling job {} - status: {}, progress: {:?}",
                job_id,
                status,
                job.progress
            );

            match status {
                ScenarioJobStatus::Success => return Ok(job),
                ScenarioJobStatus::Failure | ScenarioJobStatus::Canceled => {
                    return Err(ScenarioError::JobFailed {
                        job_id: job_id.to_string(),
                        status,
                        payload,
                    });
                }
                ScenarioJobStatus::Pending | ScenarioJobStatus::Running => {
                    if !timer.wait().await {
                        return Err(ScenarioError::PollTimeout {
                            job_id: job_id.to_string(),
                            timeout: settings.timeout,
                        });
                    }
                }
            }
        }
    }

    pub async fn fetch_asset_url(&self, asset_id: &str) -> Result<String, ScenarioError> {
        let url = format!("{}/assets/{}", self.config.base_url, asset_id);
        let res = self.http.get(url).headers(self.auth_headers()).send().await?;

        let code = res.status();
        let text = res.text().await?;

        if !code.is_success() {
            tracing::error!(
                "failed to fetch asset {} with status code {}: {}",
                asset_id,
                code,
                text
            );
            return Err(ScenarioError::Api {
                code,
                message: text,
            });
        }

        match serde_json::from_str::<ScenarioAssetResponse>(&text) {
            Ok(response) => match response.asset.url {
                Some(url) if !url.is_empty() => Ok(url),
                _ => Err(ScenarioError::MissingAssetUrl {
                    asset_id: asset_id.to_string(),
                    body: text,
                }),
            },
            Err(_) => {
                tracing::error!(%text);
                Err(ScenarioError::MalformedResponse { body: text })
            }
        }
    }

    // Asset urls are pre-signed, so no auth headers here. The body is written
    // chunk by chunk; a failed read leaves a partial file behind for the
    // caller to deal with.
    pub async fn download_file(&self, url: &str, dest: &Path) -> Result<PathBuf, ScenarioError> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScenarioError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let mut res = self.http.get(url).send().await?;

        let code = res.status();
        if !code.is_success() {
            let text = res.text().await?;
            tracing::error!("download failed with status code {}: {}", code, text);
            return Err(ScenarioError::Api {
                code,
                message: text,
            });
        }

        let mut file = fs::File::create(dest)
            .await
            .map_err(|e| ScenarioError::Write {
                path: dest.to_path_buf(),
                source: e,
            })?;

        while let Some(chunk) = res.chunk().await? {
            file.write_all(&chunk)
                .await
                .map_err(|e| ScenarioError::Write {
                    path: dest.to_path_buf(),
                    source: e,
                })?;
        }

        file.flush().await.map_err(|e| ScenarioError::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;

        Ok(dest.to_path_buf())
    }

    async fn get_job_by_id(&self, job_id: &str) -> Result<(ScenarioJob, String), ScenarioError> {
        let url = format!("{}/jobs/{}", self.config.base_url, job_id);
        let res = self.http.get(url).headers(self.auth_headers()).send().await?;

        let code = res.status();
        let text = res.text().await?;

        if !code.is_success() {
            tracing::error!("polling failed with status code {}: {}", code, text);
            return Err(ScenarioError::Api {
                code,
                message: text,
            });
        }

        match serde_json::from_str::<ScenarioJobResponse>(&text) {
            Ok(response) => Ok((response.job, text)),
            Err(_) => {
                tracing::error!(%text);
                Err(ScenarioError::MalformedResponse { body: text })
            }
        }
    }

    fn auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert("Content-Type", "application/json".parse().unwrap());
        headers.insert("Accept", "application/json".parse().unwrap());
        headers.insert(
            "Authorization",
            ["Basic ", &self.config.credentials.basic_token()]
                .concat()
                .parse()
                .unwrap(),
        );
        headers
    }
}

fn provide_input_spec(dto: &GenerateImagesDto) -> InputSpec {
    InputSpec {
        prompt: dto.prompt.to_string(),
        num_samples: dto.num_samples,
        guidance: dto.guidance,
        num_inference_steps: dto.num_inference_steps,
        width: dto.width,
        height: dto.height,
        model_id: dto.model_id.to_string(),
    }
}

// Deadline-bound wait between polls. A wait never starts or finishes past the
// deadline, so a job stuck in a non-terminal state times out at the first tick
// boundary at or after the configured timeout.
struct PollTimer {
    interval: std::time::Duration,
    deadline: Instant,
}

impl PollTimer {
    fn start(settings: &PollSettings) -> Self {
        Self {
            interval: settings.interval,
            deadline: Instant::now() + settings.timeout,
        }
    }

    async fn wait(&self) -> bool {
        if Instant::now() >= self.deadline {
            return false;
        }

        sleep(self.interval).await;

        Instant::now() < self.deadline
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn sample_dto() -> GenerateImagesDto {
        GenerateImagesDto {
            prompt: "a red house".to_string(),
            num_samples: 2,
            guidance: 10.0,
            num_inference_steps: 30,
            width: 1024,
            height: 1024,
            model_id: "flux.1-dev".to_string(),
        }
    }

    #[test]
    fn input_spec_carries_every_generation_parameter() {
        let dto = sample_dto();
        let input_spec = provide_input_spec(&dto);

        assert_eq!(input_spec.prompt, dto.prompt);
        assert_eq!(input_spec.num_samples, dto.num_samples);
        assert_eq!(input_spec.guidance, dto.guidance);
        assert_eq!(input_spec.num_inference_steps, dto.num_inference_steps);
        assert_eq!(input_spec.width, dto.width);
        assert_eq!(input_spec.height, dto.height);
        assert_eq!(input_spec.model_id, dto.model_id);
    }

    #[tokio::test]
    async fn poll_timer_refuses_to_wait_past_the_deadline() {
        let timer = PollTimer::start(&PollSettings {
            interval: Duration::from_millis(1),
            timeout: Duration::ZERO,
        });

        assert!(!timer.wait().await);
    }

    #[tokio::test]
    async fn poll_timer_ticks_while_the_deadline_is_live() {
        let timer = PollTimer::start(&PollSettings {
            interval: Duration::from_millis(1),
            timeout: Duration::from_secs(60),
        });

        assert!(timer.wait().await);
    }
}
