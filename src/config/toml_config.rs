use crate::utils::error::{CuratorError, Result};
use crate::utils::validation::{
    validate_positive_number, validate_ratio, validate_terms, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://api.pinterest.com/v5";
pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";
pub const BOARD_ID_VAR: &str = "BOARD_ID";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    pub api: ApiConfig,
    pub criteria: SelectionCriteria,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub board_id: Option<String>,
    pub page_size: Option<u64>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            board_id: None,
            page_size: None,
            timeout_seconds: None,
        }
    }
}

impl ApiConfig {
    pub fn access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }

    pub fn board_id(&self) -> &str {
        self.board_id.as_deref().unwrap_or_default()
    }

    /// `base_url` joined with `path`, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// The static relevance policy a pin has to satisfy in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionCriteria {
    pub keywords: Vec<String>,
    pub trusted_domains: Vec<String>,
    pub min_saves: u64,
    pub min_aspect_ratio: f64,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            keywords: ["decor", "modern", "interior", "furniture"]
                .map(String::from)
                .to_vec(),
            trusted_domains: ["pinterest.com", "etsy.com", "amazon.com", "wayfair.com"]
                .map(String::from)
                .to_vec(),
            min_saves: 500,
            min_aspect_ratio: 0.6,
        }
    }
}

impl CuratorConfig {
    /// Defaults, with credentials taken from `ACCESS_TOKEN` and `BOARD_ID`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.fill_credentials(|name| std::env::var(name).ok());
        config
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CuratorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| CuratorError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.fill_credentials(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// 替換環境變數 (例如 ${ACCESS_TOKEN})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| CuratorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Credentials missing from the file fall back to the environment. Nothing
    /// here insists they exist; a missing token shows up as an auth failure.
    pub fn fill_credentials<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.api.access_token.is_none() {
            self.api.access_token = lookup(ACCESS_TOKEN_VAR);
        }
        if self.api.board_id.is_none() {
            self.api.board_id = lookup(BOARD_ID_VAR);
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;

        if let Some(page_size) = self.api.page_size {
            validate_positive_number("api.page_size", page_size, 1)?;
        }
        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        validate_terms("criteria.keywords", &self.criteria.keywords)?;
        validate_terms("criteria.trusted_domains", &self.criteria.trusted_domains)?;
        validate_ratio(
            "criteria.min_aspect_ratio",
            self.criteria.min_aspect_ratio,
            0.0,
            1.0,
        )?;

        Ok(())
    }
}

impl Validate for CuratorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
