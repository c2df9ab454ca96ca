use crate::adapters::DisplayFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::catalog::Catalog;
use crate::domain::model::Movie;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};

/// Everything `main` needs once flags and the optional file are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: Catalog,
    pub format: DisplayFormat,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(format) = &self.format {
            validate_one_of("format", format, &DisplayFormat::NAMES)?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Loads the config file when one is given and applies the flags on top.
    pub fn resolve(&self) -> Result<Settings> {
        self.validate()?;

        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file.validate_settings()?;

        // --empty replaces only the built-in seed; listed movies still load.
        let catalog = file.build_catalog_with(!self.empty && file.seed_builtin())?;

        let format = self
            .format
            .as_deref()
            .and_then(DisplayFormat::from_name)
            .or_else(|| file.display_format())
            .unwrap_or_default();

        Ok(Settings {
            catalog,
            format,
            json_logs: self.log_json || file.json_logs(),
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let settings = CliConfig::default().resolve().unwrap();

        assert_eq!(settings.catalog.len(), 14);
        assert_eq!(settings.format, DisplayFormat::Text);
        assert!(!settings.json_logs);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nformat = \"json\"\n\n[logging]\nformat = \"json\"\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().into_owned()),
            format: Some("text".to_string()),
            empty: true,
            ..CliConfig::default()
        };
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.format, DisplayFormat::Text);
        assert!(settings.catalog.is_empty());
        assert!(settings.json_logs);
    }

    #[test]
    fn test_empty_flag_keeps_movies_listed_in_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[[catalog.movies]]\nid = 2\ntitle = \"Heat\"\nyear = 1995\nrating = 4\n",
            )
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().into_owned()),
            empty: true,
            ..CliConfig::default()
        };
        let settings = cli.resolve().unwrap();

        let titles: Vec<&str> = settings.catalog.get_all().iter().map(Movie::title).collect();
        assert_eq!(titles, vec!["Heat"]);
    }

    #[test]
    fn test_seeded_file_still_rejects_clashing_ids() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[[catalog.movies]]\nid = 2\ntitle = \"Heat\"\nyear = 1995\nrating = 4\n",
            )
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().into_owned()),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_file_format_applies_without_flag() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[display]\nformat = \"json\"\n").unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().into_owned()),
            ..CliConfig::default()
        };

        assert_eq!(cli.resolve().unwrap().format, DisplayFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format_flag() {
        let cli = CliConfig {
            format: Some("yaml".to_string()),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}
