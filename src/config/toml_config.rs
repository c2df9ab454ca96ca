use crate::adapters::DisplayFormat;
use crate::core::catalog::Catalog;
use crate::domain::model::Movie;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SEED_KINDS: [&str; 2] = ["builtin", "empty"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub seed: Option<String>,
    #[serde(default)]
    pub movies: Vec<MovieEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieEntry {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub rating: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MOVIE_FORMAT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.validate_settings()?;
        self.build_catalog().map(|_| ())
    }

    /// Checks the enumerated values only, leaving the movie list to
    /// [`TomlConfig::build_catalog_with`].
    pub fn validate_settings(&self) -> Result<()> {
        if let Some(seed) = &self.catalog.seed {
            validate_one_of("catalog.seed", seed, &SEED_KINDS)?;
        }

        if let Some(format) = &self.display.format {
            validate_one_of("display.format", format, &DisplayFormat::NAMES)?;
        }

        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }

    pub fn seed_builtin(&self) -> bool {
        self.catalog.seed.as_deref() != Some("empty")
    }

    pub fn display_format(&self) -> Option<DisplayFormat> {
        self.display
            .format
            .as_deref()
            .and_then(DisplayFormat::from_name)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }

    /// The starting catalog: the built-in list unless `seed = "empty"`,
    /// followed by every `[[catalog.movies]]` entry in file order.
    pub fn build_catalog(&self) -> Result<Catalog> {
        self.build_catalog_with(self.seed_builtin())
    }

    /// Like [`TomlConfig::build_catalog`] with the seed choice made by the
    /// caller. The listed movies are always appended.
    pub fn build_catalog_with(&self, seed_builtin: bool) -> Result<Catalog> {
        let mut catalog = if seed_builtin {
            Catalog::seeded()?
        } else {
            Catalog::new()
        };

        for (index, entry) in self.catalog.movies.iter().enumerate() {
            Movie::new(entry.id, entry.title.as_str(), entry.year, entry.rating)
                .and_then(|movie| catalog.add(movie))
                .map_err(|e| CatalogError::ConfigValidationError {
                    field: format!("catalog.movies[{}]", index),
                    message: e.to_string(),
                })?;
        }

        Ok(catalog)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
