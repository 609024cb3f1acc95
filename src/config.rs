//! Client configuration
//!
//! The server URL and credentials, plus the transport and pagination limits,
//! loaded from YAML or JSON.
//!
//! ```yaml
//! url: https://stash.example.com
//! username: joe
//! password: secret
//! timeout_secs: 60
//! max_pages: 500
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::pagination::{PaginationConfig, DEFAULT_MAX_PAGES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Client Config
// ============================================================================

/// Everything needed to build a [`PullRequestClient`](crate::PullRequestClient)
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server URL, including any context path
    pub url: String,

    /// Username for basic authentication
    #[serde(default)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[serde(default)]
    pub password: Option<String>,

    /// Personal access token, sent as a bearer token
    #[serde(default)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Pages one sequence may fetch (`null` = unbounded)
    #[serde(default = "default_max_pages")]
    pub max_pages: Option<u32>,

    /// Page size to request (server default if unset)
    #[serde(default)]
    pub page_limit: Option<u32>,

    /// Time budget for a whole paged sequence, in seconds
    #[serde(default)]
    pub page_deadline_secs: Option<u64>,
}

fn default_timeout_secs() -> u64 {
    30
}

#[allow(clippy::unnecessary_wraps)]
fn default_max_pages() -> Option<u32> {
    Some(DEFAULT_MAX_PAGES)
}

impl ClientConfig {
    /// Config for an unauthenticated client with default limits
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            max_pages: default_max_pages(),
            page_limit: None,
            page_deadline_secs: None,
        }
    }

    /// Set basic credentials
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Check the URL, credential pairing and limits
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::missing_field("url"));
        }
        let url = Url::parse(&self.url).map_err(|e| Error::invalid_value("url", e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_value("url", "cannot be a base URL"));
        }

        match (&self.username, &self.password) {
            (Some(_), None) => return Err(Error::missing_field("password")),
            (None, Some(_)) => return Err(Error::missing_field("username")),
            _ => {}
        }
        if self.token.is_some() && self.username.is_some() {
            return Err(Error::invalid_value(
                "token",
                "set either a token or a username/password, not both",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        if self.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be greater than 0"));
        }
        if self.page_limit == Some(0) {
            return Err(Error::invalid_value("page_limit", "must be greater than 0"));
        }
        Ok(())
    }

    /// Authentication implied by the configured credentials
    pub fn auth(&self) -> AuthConfig {
        if let Some(token) = &self.token {
            return AuthConfig::Bearer {
                token: token.clone(),
            };
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => AuthConfig::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            _ => AuthConfig::None,
        }
    }

    /// Transport settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.url)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Limits for paged sequences
    pub fn pagination(&self) -> PaginationConfig {
        PaginationConfig {
            max_pages: self.max_pages,
            limit: self.page_limit,
            deadline: self.page_deadline_secs.map(Duration::from_secs),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_pages", &self.max_pages)
            .field("page_limit", &self.page_limit)
            .field("page_deadline_secs", &self.page_deadline_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_minimal_yaml() {
        let config = ClientConfig::from_yaml_str("url: https://stash.example.com\n").unwrap();

        assert_eq!(config.url, "https://stash.example.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_pages, Some(DEFAULT_MAX_PAGES));
        assert!(matches!(config.auth(), AuthConfig::None));
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
url: https://example.com/bitbucket
username: joe
password: secret
timeout_secs: 60
user_agent: reports/2.0
max_pages: 50
page_limit: 100
page_deadline_secs: 120
"#;
        let config = ClientConfig::from_yaml_str(yaml).unwrap();

        assert!(matches!(
            config.auth(),
            AuthConfig::Basic { ref username, ref password } if username == "joe" && password == "secret"
        ));

        let http = config.http_config();
        assert_eq!(http.base_url.as_deref(), Some("https://example.com/bitbucket"));
        assert_eq!(http.timeout, Duration::from_secs(60));
        assert_eq!(http.user_agent, "reports/2.0");

        let pagination = config.pagination();
        assert_eq!(pagination.max_pages, Some(50));
        assert_eq!(pagination.limit, Some(100));
        assert_eq!(pagination.deadline, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_null_max_pages_is_unbounded() {
        let config =
            ClientConfig::from_yaml_str("url: https://stash.example.com\nmax_pages: null\n").unwrap();
        assert_eq!(config.pagination().max_pages, None);
    }

    #[test]
    fn test_json() {
        let config = ClientConfig::from_json_str(
            r#"{"url": "https://stash.example.com", "token": "abc", "unknown": 1}"#,
        )
        .unwrap();
        assert!(matches!(config.auth(), AuthConfig::Bearer { ref token } if token == "abc"));
    }

    #[test]
    fn test_missing_url() {
        assert!(matches!(
            ClientConfig::from_yaml_str("username: joe\n").unwrap_err(),
            Error::YamlParse(_)
        ));
        assert!(matches!(
            ClientConfig::from_yaml_str("url: ''\n").unwrap_err(),
            Error::MissingConfigField { ref field } if field == "url"
        ));
    }

    #[test]
    fn test_invalid_url() {
        let err = ClientConfig::from_yaml_str("url: not a url\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "url"));
    }

    #[test]
    fn test_username_without_password() {
        let config = ClientConfig {
            username: Some("joe".to_string()),
            ..ClientConfig::new("https://stash.example.com")
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "password"));
    }

    #[test]
    fn test_password_without_username() {
        let err = ClientConfig::from_yaml_str("url: https://stash.example.com\npassword: x\n").unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "username"));
    }

    #[test]
    fn test_token_and_credentials_conflict() {
        let config = ClientConfig {
            token: Some("abc".to_string()),
            ..ClientConfig::new("https://stash.example.com").with_credentials("joe", "pw")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_limits_rejected() {
        for yaml in [
            "url: https://s.example.com\ntimeout_secs: 0\n",
            "url: https://s.example.com\nmax_pages: 0\n",
            "url: https://s.example.com\npage_limit: 0\n",
        ] {
            assert!(matches!(
                ClientConfig::from_yaml_str(yaml).unwrap_err(),
                Error::InvalidConfigValue { .. }
            ));
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig::new("https://stash.example.com").with_credentials("joe", "hunter2");
        let debug = format!("{config:?}");
        assert!(debug.contains("joe"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "url: https://stash.example.com\nusername: joe\npassword: pw").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.username.as_deref(), Some("joe"));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"url": "https://stash.example.com", "max_pages": 7}}"#).unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_pages, Some(7));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
