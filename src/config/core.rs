use super::PreformatConfig;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

impl PreformatConfig {
    /// Load the layered configuration for the repository at `repo_root`.
    ///
    /// Priority (lowest to highest): embedded defaults, user config, repository
    /// config, `custom_config`, then `PREFORMAT_*` environment variables.
    pub fn load(repo_root: &Path, custom_config: Option<&Path>) -> Result<Self> {
        let config: PreformatConfig = Self::figment(repo_root, custom_config)?
            .extract()
            .context("Failed to parse preformat configuration")?;

        config.validate()?;
        tracing::debug!(?config, "configuration loaded");

        Ok(config)
    }

    /// Build the merged figment without extracting it
    pub fn figment(repo_root: &Path, custom_config: Option<&Path>) -> Result<Figment> {
        let user_base = Self::user_config_base_path();

        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            // User config - support multiple formats
            .merge(Toml::file(format!("{user_base}.toml")))
            .merge(Json::file(format!("{user_base}.json")))
            .merge(Yaml::file(format!("{user_base}.yaml")))
            .merge(Yaml::file(format!("{user_base}.yml")))
            // Repository config - support multiple formats
            .merge(Toml::file(repo_root.join("preformat.toml")))
            .merge(Json::file(repo_root.join("preformat.json")))
            .merge(Yaml::file(repo_root.join("preformat.yaml")))
            .merge(Yaml::file(repo_root.join("preformat.yml")));

        if let Some(custom_path) = custom_config {
            if !custom_path.is_file() {
                anyhow::bail!("Config file not found: {}", custom_path.display());
            }
            tracing::trace!("CONFIG LOAD: custom file {}", custom_path.display());
            figment = figment.merge(file_provider(custom_path));
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed("PREFORMAT_").split("__")))
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/preformat/config"),
            Err(_) => "~/.config/preformat/config".to_string(),
        }
    }
}

/// Pick a provider by file extension, falling back to TOML
fn file_provider(path: &Path) -> Figment {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => Figment::from(Json::file(path)),
        "yaml" | "yml" => Figment::from(Yaml::file(path)),
        _ => Figment::from(Toml::file(path)),
    }
}
