use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateImagesDto {
    #[validate(length(
        min = 1,
        max = 2000,
        message = "prompt must be between 1 and 2000 characters."
    ))]
    pub prompt: String,
    #[validate(range(min = 1, max = 8, message = "num_samples must be between 1 and 8."))]
    pub num_samples: u8,
    pub guidance: f32,
    #[validate(range(
        min = 1,
        max = 150,
        message = "num_inference_steps must be between 1 and 150."
    ))]
    pub num_inference_steps: u16,
    pub width: u16,
    pub height: u16,
    pub model_id: String,
}

impl GenerateImagesDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: self.prompt.trim().replace("\r\n", " ").replace("\n", " "),
            num_samples: self.num_samples,
            guidance: self.guidance,
            num_inference_steps: self.num_inference_steps,
            width: self.width,
            height: self.height,
            model_id: self.model_id.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    fn valid_dto() -> GenerateImagesDto {
        GenerateImagesDto {
            prompt: "a red house".to_string(),
            num_samples: 1,
            guidance: 10.0,
            num_inference_steps: 30,
            width: 1024,
            height: 1024,
            model_id: "flux.1-dev".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_prompt() {
        let mut dto = valid_dto();
        dto.prompt = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_zero_samples() {
        let mut dto = valid_dto();
        dto.num_samples = 0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn sanitized_flattens_newlines() {
        let mut dto = valid_dto();
        dto.prompt = "  a red house\nby the sea  ".to_string();
        assert_eq!(dto.sanitized().prompt, "a red house by the sea");
    }
}
