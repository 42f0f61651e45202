//! Runtime settings.
//!
//! The backend URL resolves flag → environment → default; `.env` files are
//! loaded by `main` before parsing.

use std::env;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const API_URL_ENV: &str = "MONEYMAP_API_URL";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
}

impl Settings {
    pub fn resolve(api_url_flag: Option<String>) -> Self {
        let env_url = env::var(API_URL_ENV).ok();
        Self::resolve_from(api_url_flag, env_url)
    }

    fn resolve_from(flag: Option<String>, env_url: Option<String>) -> Self {
        let api_url = flag
            .filter(|url| !url.is_empty())
            .or_else(|| env_url.filter(|url| !url.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { api_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        let settings = Settings::resolve_from(
            Some("http://flag:1".to_string()),
            Some("http://env:2".to_string()),
        );
        assert_eq!(settings.api_url, "http://flag:1");
    }

    #[test]
    fn environment_wins_over_default() {
        let settings = Settings::resolve_from(None, Some("http://env:2".to_string()));
        assert_eq!(settings.api_url, "http://env:2");
    }

    #[test]
    fn falls_back_to_default() {
        let settings = Settings::resolve_from(None, None);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }
}
