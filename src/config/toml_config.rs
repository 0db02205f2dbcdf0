use crate::domain::model::PageContext;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SESSION_FILE: &str = ".split-ways-session";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub page: PageContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_SESSION_FILE.to_string(),
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SPLIT_WAYS_URL})，找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn page_context(&self) -> &PageContext {
        &self.page
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn session_file(&self) -> &str {
        &self.session.file
    }

    fn timeout_seconds(&self) -> u64 {
        self.server.timeout_seconds
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("server.base_url", &self.server.base_url)?;
        crate::utils::validation::validate_positive_number(
            "server.timeout_seconds",
            self.server.timeout_seconds,
            1,
        )?;
        crate::utils::validation::validate_path("session.file", &self.session.file)?;
        Ok(())
    }
}
