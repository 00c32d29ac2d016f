pub static API_URL: &str = "https://api.cloud.scenario.com/v1";
