pub mod batch_outcome;
pub mod generation_settings;
