use super::{
    DEFAULT_ATTRACTIONS_URL, DEFAULT_HOTELS_URL, DEFAULT_MAX_ATTRACTIONS, DEFAULT_OUTPUT_PATH,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_TOP_N, DEFAULT_TRANSPORT_URL, DEFAULT_USER_AGENT,
    MAX_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub planner: PlannerSection,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
    /// City name to attraction list, used when the article scrape finds nothing.
    #[serde(default)]
    pub fallback: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub transport: String,
    pub hotels: String,
    pub attractions: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            transport: DEFAULT_TRANSPORT_URL.to_string(),
            hotels: DEFAULT_HOTELS_URL.to_string(),
            attractions: DEFAULT_ATTRACTIONS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub top_n: usize,
    pub max_attractions: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_attractions: DEFAULT_MAX_ATTRACTIONS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            formats: vec!["markdown".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("planner.name", &self.planner.name)?;
        validation::validate_url("sources.transport", &self.sources.transport)?;
        validation::validate_url("sources.hotels", &self.sources.hotels)?;
        validation::validate_url("sources.attractions", &self.sources.attractions)?;
        validation::validate_non_empty_string("http.user_agent", &self.http.user_agent)?;
        validation::validate_range(
            "http.timeout_seconds",
            self.http.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_positive_number("ranking.top_n", self.ranking.top_n, 1)?;
        validation::validate_positive_number(
            "ranking.max_attractions",
            self.ranking.max_attractions,
            1,
        )?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_formats("output.formats", &self.output.formats)?;

        for (city, list) in &self.fallback {
            if list.is_empty() {
                return Err(PlannerError::InvalidConfigValueError {
                    field: format!("fallback.{}", city),
                    value: "[]".to_string(),
                    reason: "Fallback list cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn transport_base_url(&self) -> &str {
        &self.sources.transport
    }

    fn hotels_base_url(&self) -> &str {
        &self.sources.hotels
    }

    fn attractions_base_url(&self) -> &str {
        &self.sources.attractions
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.http.timeout_seconds
    }

    fn top_n(&self) -> usize {
        self.ranking.top_n
    }

    fn max_attractions(&self) -> usize {
        self.ranking.max_attractions
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn fallback_attractions(&self) -> Option<&HashMap<String, Vec<String>>> {
        if self.fallback.is_empty() {
            None
        } else {
            Some(&self.fallback)
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
