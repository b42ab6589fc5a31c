use crate::domain::model::Toolbox;
use crate::domain::outcome::ExecutionMode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GpError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// GPServer location of each toolbox, absolute or relative to `server.base_url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub nd: Option<String>,
    pub un: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    #[serde(default)]
    pub mode: ExecutionMode,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_max_poll_attempts() -> u32 {
    300
}

fn default_retry_attempts() -> u32 {
    1
}

fn default_output_path() -> String {
    "./output".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout_seconds: default_timeout_seconds(),
            headers: HashMap::new(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            retry_attempts: default_retry_attempts(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl ServicesConfig {
    fn get(&self, toolbox: Toolbox) -> Option<&String> {
        match toolbox {
            Toolbox::NetworkDiagram => self.nd.as_ref(),
            Toolbox::UtilityNetwork => self.un.as_ref(),
        }
    }

    fn get_mut(&mut self, toolbox: Toolbox) -> &mut Option<String> {
        match toolbox {
            Toolbox::NetworkDiagram => &mut self.nd,
            Toolbox::UtilityNetwork => &mut self.un,
        }
    }
}

impl GpConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| GpError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.resolve_service_urls();
        Ok(config)
    }

    /// A configuration pointing one toolbox at a GPServer URL.
    pub fn for_service(toolbox: Toolbox, url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.set_service_url(toolbox, url);
        config
    }

    pub fn set_service_url(&mut self, toolbox: Toolbox, url: impl Into<String>) {
        *self.services.get_mut(toolbox) = Some(url.into());
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.server.token = Some(token.into());
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| GpError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn resolve_service_urls(&mut self) {
        let Some(base) = self.server.base_url.clone() else {
            return;
        };
        for toolbox in Toolbox::ALL {
            if let Some(url) = self.services.get_mut(toolbox) {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    *url = format!(
                        "{}/{}",
                        base.trim_end_matches('/'),
                        url.trim_start_matches('/')
                    );
                }
            }
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(base_url) = &self.server.base_url {
            validation::validate_url("server.base_url", base_url)?;
        }

        for toolbox in Toolbox::ALL {
            if let Some(url) = self.services.get(toolbox) {
                validation::validate_url(&format!("services.{}", toolbox.alias()), url)?;
            }
        }

        if let Some(token) = &self.server.token {
            validation::validate_non_empty_string("server.token", token)?;
            if token.contains("${") {
                return Err(GpError::InvalidConfigValueError {
                    field: "server.token".to_string(),
                    value: token.clone(),
                    reason: "environment variable is not set".to_string(),
                });
            }
        }

        validation::validate_range("server.timeout_seconds", self.server.timeout_seconds, 1, 3600)?;
        validation::validate_positive_number(
            "execution.poll_interval_ms",
            self.execution.poll_interval_ms,
            1,
        )?;
        validation::validate_positive_number(
            "execution.max_poll_attempts",
            u64::from(self.execution.max_poll_attempts),
            1,
        )?;
        validation::validate_positive_number(
            "execution.retry_attempts",
            u64::from(self.execution.retry_attempts),
            1,
        )?;
        validation::validate_path("output.path", &self.output.path)?;

        Ok(())
    }
}

impl ConfigProvider for GpConfig {
    fn service_url(&self, toolbox: Toolbox) -> Option<&str> {
        self.services.get(toolbox).map(String::as_str)
    }

    fn token(&self) -> Option<&str> {
        self.server.token.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.server.timeout_seconds
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.server.headers
    }

    fn execution_mode(&self) -> ExecutionMode {
        self.execution.mode
    }

    fn poll_interval_ms(&self) -> u64 {
        self.execution.poll_interval_ms
    }

    fn max_poll_attempts(&self) -> u32 {
        self.execution.max_poll_attempts
    }

    fn retry_attempts(&self) -> u32 {
        self.execution.retry_attempts
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for GpConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
base_url = "https://gis.example.com/server/rest/services"
timeout_seconds = 30

[server.headers]
X-Request-Source = "gp-catalog"

[services]
nd = "NetworkDiagram/GPServer"
un = "https://other.example.com/arcgis/rest/services/UN/GPServer"

[execution]
mode = "async"
poll_interval_ms = 250
max_poll_attempts = 40

[output]
path = "./runs"
"#;

        let config = GpConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.service_url(Toolbox::NetworkDiagram),
            Some("https://gis.example.com/server/rest/services/NetworkDiagram/GPServer")
        );
        assert_eq!(
            config.service_url(Toolbox::UtilityNetwork),
            Some("https://other.example.com/arcgis/rest/services/UN/GPServer")
        );
        assert_eq!(config.execution_mode(), ExecutionMode::Async);
        assert_eq!(config.max_poll_attempts(), 40);
        assert_eq!(config.retry_attempts(), 1);
        assert_eq!(config.headers().get("X-Request-Source").map(String::as_str), Some("gp-catalog"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GpConfig::from_toml_str("").unwrap();
        assert_eq!(config.timeout_seconds(), 60);
        assert_eq!(config.poll_interval_ms(), 1000);
        assert_eq!(config.execution_mode(), ExecutionMode::Auto);
        assert_eq!(config.output_path(), "./output");
        assert!(config.service_url(Toolbox::NetworkDiagram).is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GP_CATALOG_TEST_TOKEN", "abc123");

        let config = GpConfig::from_toml_str(
            r#"
[server]
token = "${GP_CATALOG_TEST_TOKEN}"
"#,
        )
        .unwrap();
        assert_eq!(config.token(), Some("abc123"));

        std::env::remove_var("GP_CATALOG_TEST_TOKEN");
    }

    #[test]
    fn test_unset_token_variable_fails_validation() {
        let config = GpConfig::from_toml_str(
            r#"
[server]
token = "${GP_CATALOG_SURELY_UNSET_VARIABLE}"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(GpError::InvalidConfigValueError { ref field, .. }) if field == "server.token"
        ));
    }

    #[test]
    fn test_config_validation() {
        let mut config = GpConfig::for_service(Toolbox::NetworkDiagram, "ftp://gis.example.com/nd");
        assert!(config.validate().is_err());

        config.set_service_url(Toolbox::NetworkDiagram, "https://gis.example.com/nd");
        assert!(config.validate().is_ok());

        config.execution.max_poll_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = GpConfig::from_toml_str("[execution]\nmode = \"eventually\"\n");
        assert!(matches!(result, Err(GpError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[services]\nun = \"https://gis.example.com/un/GPServer\"\n")
            .unwrap();

        let config = GpConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.service_url(Toolbox::UtilityNetwork),
            Some("https://gis.example.com/un/GPServer")
        );
    }
}
