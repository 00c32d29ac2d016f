pub mod input_spec;
pub mod poll_settings;
pub mod scenario_credentials;
