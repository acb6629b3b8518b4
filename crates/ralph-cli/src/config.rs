//! Application configuration.
//!
//! [`RalphConfig`] is loaded once at startup and passed down by reference.
//! The CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `RALPH_HOME`, `RALPH_IMPORT__TOOL`, ...
//! 2. Config file: `config.toml` in the platform config directory
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use ralph_adapters::{
    DedicatedImportTool, GeneratorCommand, InlineConversion, import::DEFAULT_IMPORT_TOOL,
};
use ralph_core::application::ports::ImportProvider;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RalphConfig {
    /// Installation root; templates live in `<home>/templates`.
    pub home: PathBuf,
    /// Import provider settings.
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// Dedicated import tool executable.
    pub tool: String,
    /// Preferred generator command line.
    pub generator: Vec<String>,
    /// Generator used when the preferred one is not installed.
    pub generator_fallback: Vec<String>,
}

impl RalphConfig {
    /// Load configuration from the default file location and the process
    /// environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::build(Self::config_path().as_deref(), None)
    }

    /// Path to the default configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ralph", "ralph")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Where templates are read from.
    pub fn template_root(&self) -> PathBuf {
        self.home.join("templates")
    }

    /// The import chain in priority order.
    pub fn import_providers(&self) -> Vec<Box<dyn ImportProvider>> {
        let generators = [&self.import.generator, &self.import.generator_fallback]
            .into_iter()
            .filter_map(|argv| GeneratorCommand::from_argv(argv))
            .collect();
        vec![
            Box::new(DedicatedImportTool::new(self.import.tool.clone())),
            Box::new(InlineConversion::new(generators)),
        ]
    }

    /// Layer defaults, an optional file and the environment.
    ///
    /// `env` replaces the process environment when given.
    fn build(file: Option<&Path>, env: Option<config::Map<String, String>>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .set_default("home", default_home().to_string_lossy().into_owned())?
            .set_default("import.tool", DEFAULT_IMPORT_TOOL)?
            .set_default("import.generator", vec!["claude"])?
            .set_default(
                "import.generator_fallback",
                vec!["npx", "@anthropic-ai/claude-code"],
            )?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("RALPH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("import.generator")
                    .with_list_parse_key("import.generator_fallback")
                    .source(env),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn default_home() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".ralph"))
        .unwrap_or_else(|| PathBuf::from(".ralph"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_point_at_home_directory() {
        let cfg = RalphConfig::build(None, env(&[])).unwrap();
        assert!(cfg.home.ends_with(".ralph"));
        assert_eq!(cfg.template_root(), cfg.home.join("templates"));
        assert_eq!(cfg.import.tool, "ralph-import");
        assert_eq!(cfg.import.generator, vec!["claude"]);
        assert_eq!(
            cfg.import.generator_fallback,
            vec!["npx", "@anthropic-ai/claude-code"]
        );
    }

    #[test]
    fn ralph_home_overrides_default() {
        let cfg = RalphConfig::build(None, env(&[("RALPH_HOME", "/opt/ralph")])).unwrap();
        assert_eq!(cfg.template_root(), PathBuf::from("/opt/ralph/templates"));
    }

    #[test]
    fn nested_keys_come_from_double_underscore() {
        let cfg = RalphConfig::build(
            None,
            env(&[
                ("RALPH_IMPORT__TOOL", "my-import"),
                ("RALPH_IMPORT__GENERATOR", "claude --print"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.import.tool, "my-import");
        assert_eq!(cfg.import.generator, vec!["claude", "--print"]);
    }

    #[test]
    fn file_values_sit_between_defaults_and_env() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "home = \"/from/file\"\n[import]\ntool = \"file-import\"\n").unwrap();

        let cfg = RalphConfig::build(Some(&file), env(&[("RALPH_HOME", "/from/env")])).unwrap();
        assert_eq!(cfg.home, PathBuf::from("/from/env"));
        assert_eq!(cfg.import.tool, "file-import");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let cfg = RalphConfig::build(Some(Path::new("/nonexistent/config.toml")), env(&[]));
        assert!(cfg.is_ok());
    }

    #[test]
    fn import_chain_has_both_providers() {
        let cfg = RalphConfig::build(None, env(&[])).unwrap();
        let names: Vec<_> = cfg.import_providers().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["import tool", "inline conversion"]);
    }
}
