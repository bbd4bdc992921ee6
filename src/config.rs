use std::env;

const DEFAULT_GET_URL: &str = "https://postman-echo.com/headers";
const DEFAULT_POST_URL: &str = "http://172.16.1.43:8022/restful";

/// Endpoints used by the demonstration binary.
pub struct Config {
    pub get_url: String,
    pub post_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            get_url: env::var("GET_URL")
                .ok()
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GET_URL.to_string()),
            post_url: env::var("POST_URL")
                .ok()
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_POST_URL.to_string()),
        }
    }
}
