use crate::model::types::Error;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Where the comparison backend lives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `BACKEND_URL`, blank or missing means the local default.
    pub fn from_env() -> Self {
        match std::env::var("BACKEND_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    pub fn compare_url(&self) -> String {
        format!("{}/music/compare", self.base_url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

/// Supabase project the auth calls go to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentityConfig {
    pub url: String,
    pub anon_key: String,
}

impl IdentityConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        let url = std::env::var("SUPABASE_URL")?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY")?;
        Ok(Self::new(url, anon_key))
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_is_normalised() {
        assert_eq!(
            BackendConfig::new("https://api.example.com/ ").compare_url(),
            "https://api.example.com/music/compare"
        );
        assert_eq!(
            BackendConfig::default().compare_url(),
            "http://localhost:8000/music/compare"
        );
    }

    #[test]
    fn auth_urls() {
        let config = IdentityConfig::new("https://abc.supabase.co/", "anon");
        assert_eq!(config.auth_url("user"), "https://abc.supabase.co/auth/v1/user");
        assert_eq!(
            config.auth_url("/token?grant_type=password"),
            "https://abc.supabase.co/auth/v1/token?grant_type=password"
        );
    }
}
