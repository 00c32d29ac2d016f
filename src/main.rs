#![allow(dead_code)]

use std::{env, time::Duration};

use clap::Parser;

use crate::{
    app::{args::Args, env::Envy},
    media::{
        apis::scenario::{
            models::scenario_credentials::ScenarioCredentials,
            service::{ScenarioClient, ScenarioConfig},
        },
        models::generation_settings::GenerationSettings,
    },
};

mod app;
mod media;
mod scenes;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let args = Args::parse();

    // credentials are checked before anything touches the network
    let credentials =
        match ScenarioCredentials::from_parts(envy.scenario_api_key, envy.scenario_api_secret) {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        };

    let scenes = match scenes::service::load_scenes(&args.json) {
        Ok(scenes) => scenes,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if scenes.is_empty() {
        tracing::warn!("no scenes found in {}", args.json.display());
        return;
    }

    let client = ScenarioClient::new(ScenarioConfig::new(credentials));

    let settings = GenerationSettings {
        model_id: args.model_id,
        width: args.width,
        height: args.height,
        guidance: args.guidance,
        num_inference_steps: args.steps,
        num_samples: args.num_samples,
        poll_interval: Duration::from_secs(args.poll_interval),
        timeout: Duration::from_secs(args.timeout),
        out_dir: args.out_dir,
    };

    let outcome = media::service::generate_images_for_scenes(&scenes, &settings, &client).await;

    tracing::info!(
        "finished: {} scenes completed, {} scenes failed",
        outcome.completed,
        outcome.failed
    );
}
