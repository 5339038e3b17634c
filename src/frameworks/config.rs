use std::{env, path::PathBuf, time::Duration};

// Runtime/client settings read from the environment (or .env).

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_STORAGE_PATH: &str = ".revticket/storage.toml";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

pub fn api_base_url() -> String {
    env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

pub fn storage_path() -> PathBuf {
    env::var("REVTICKET_STORAGE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH))
}

pub fn http_timeout() -> Duration {
    parse_timeout(env::var("HTTP_TIMEOUT_MS").ok().as_deref())
}

// Locality preselected for listings and showtimes; unset means all localities.
pub fn selected_city() -> Option<String> {
    normalize_city(env::var("SELECTED_CITY").ok())
}

pub fn json_logs() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let millis = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS);
    Duration::from_millis(millis)
}

pub(crate) fn normalize_city(raw: Option<String>) -> Option<String> {
    raw.map(|city| city.trim().to_string())
        .filter(|city| !city.is_empty())
}
