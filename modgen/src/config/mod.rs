//! Configuration management for modgen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `MODGEN_` prefix, `__` for nesting)
//! 2. `./modgen.toml` (project config)
//! 3. `~/.config/modgen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Environment variable format: `MODGEN_SECTION__FIELD_NAME`
//! - Example: `MODGEN_TEMPLATES__DIR=./my-templates`
//! - Example: `MODGEN_OUTPUT__ROOT=./backend`
//!
//! # Example Configuration
//!
//! ```toml
//! # modgen.toml
//! [schema]
//! paths = ["prisma/schema.prisma"]
//!
//! [templates]
//! dir = "./scaffold-templates"
//!
//! [output]
//! root = "."
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "modgen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MODGEN_";

/// Where to look for the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSettings {
    /// Candidate schema files, relative to the output root; the first that
    /// exists is used
    pub paths: Vec<PathBuf>,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("prisma/schema.prisma"),
                PathBuf::from("src/database/schema.prisma"),
                PathBuf::from("schema.prisma"),
            ],
        }
    }
}

/// Template lookup configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory whose files override the built-in templates of the same
    /// relative name (e.g. `services/service.list.ts.tpl`)
    pub dir: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Project root that generated paths are relative to
    pub root: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Complete modgen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModgenConfig {
    /// Schema discovery settings
    #[serde(default)]
    pub schema: SchemaSettings,

    /// Template override settings
    #[serde(default)]
    pub templates: TemplateSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

impl ModgenConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file contains invalid TOML
    /// - Values fail type conversion
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Self::defaults()?;

        if let Some(user_config) = Self::recommended_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let project_config = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        Ok(Self::with_env(figment).extract()?)
    }

    /// Load configuration from a specific file instead of the standard locations
    ///
    /// Environment variables still override the file. A missing file yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values fail type
    /// conversion.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let figment = Self::defaults()?.merge(Toml::file(path));
        Ok(Self::with_env(figment).extract()?)
    }

    /// User configuration file: `<config_dir>/modgen/config.toml`
    #[must_use]
    pub fn recommended_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("modgen").join("config.toml"))
    }

    /// Schema candidates resolved against the output root
    #[must_use]
    pub fn schema_candidates(&self) -> Vec<PathBuf> {
        self.schema
            .paths
            .iter()
            .map(|p| self.output.root.join(p))
            .collect()
    }

    /// Template override directory resolved against the output root
    #[must_use]
    pub fn template_dir(&self) -> Option<PathBuf> {
        self.templates.dir.as_ref().map(|dir| self.output.root.join(dir))
    }

    fn defaults() -> Result<Figment, ConfigError> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn with_env(figment: Figment) -> Figment {
        figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = ModgenConfig::default();
        assert_eq!(config.output.root, PathBuf::from("."));
        assert!(config.templates.dir.is_none());
        assert_eq!(config.schema.paths[0], PathBuf::from("prisma/schema.prisma"));
    }

    #[test]
    fn test_schema_candidates_are_rooted() {
        let mut config = ModgenConfig::default();
        config.output.root = PathBuf::from("/srv/api");
        let candidates = config.schema_candidates();
        assert_eq!(candidates[0], PathBuf::from("/srv/api/prisma/schema.prisma"));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_template_dir_is_rooted() {
        let mut config = ModgenConfig::default();
        assert!(config.template_dir().is_none());

        config.output.root = PathBuf::from("api");
        config.templates.dir = Some(PathBuf::from("tpl"));
        assert_eq!(config.template_dir(), Some(PathBuf::from("api/tpl")));
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let config = ModgenConfig::load_from(Path::new("/nonexistent/path/modgen.toml")).unwrap();
        assert_eq!(config.schema, SchemaSettings::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modgen.toml");
        fs::write(
            &path,
            r#"
[schema]
paths = ["db/schema.prisma"]

[templates]
dir = "./tpl"
"#,
        )
        .unwrap();

        let config = ModgenConfig::load_from(&path).unwrap();
        assert_eq!(config.schema.paths, vec![PathBuf::from("db/schema.prisma")]);
        assert_eq!(config.templates.dir, Some(PathBuf::from("./tpl")));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("modgen.toml");
        fs::write(&path, "[schema\npaths = 3").unwrap();

        assert!(matches!(
            ModgenConfig::load_from(&path),
            Err(ConfigError::Extract(_))
        ));
    }

    #[test]
    fn test_recommended_path() {
        if let Some(path) = ModgenConfig::recommended_path() {
            assert!(path.ends_with("modgen/config.toml"));
        }
    }
}
