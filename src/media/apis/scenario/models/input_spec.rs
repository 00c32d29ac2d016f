use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub prompt: String,
    #[serde(rename(serialize = "numSamples"))]
    pub num_samples: u8,
    pub guidance: f32,
    #[serde(rename(serialize = "numInferenceSteps"))]
    pub num_inference_steps: u16,
    pub width: u16,
    pub height: u16,
    #[serde(rename(serialize = "modelId"))]
    pub model_id: String,
}
