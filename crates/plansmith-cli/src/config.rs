//! Configuration file management for plansmith.
//!
//! Provides a TOML-based config file at `~/.config/plansmith/config.toml`
//! and a resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use plansmith_core::ClientConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub generation: GenerationSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationSection {
    /// API key for the generation service.
    pub api_key: String,
    /// Model identifier. Falls back to the client default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Endpoint base URL, without the `/chat/completions` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the plansmith config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/plansmith` or
/// `~/.config/plansmith`. We intentionally ignore the platform-specific
/// `dirs::config_dir()` (which returns `~/Library/Application Support` on
/// macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("plansmith");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("plansmith")
}

/// Return the path to the plansmith config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix (the file holds an API key).
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------

/// Resolve the generation-client config using the chain:
/// CLI flag > env var > config file > default.
///
/// Env vars: `PLANSMITH_API_KEY`, `PLANSMITH_MODEL`, `PLANSMITH_BASE_URL`.
pub fn resolve_client_config(
    api_key_flag: Option<&str>,
    model_flag: Option<&str>,
    base_url_flag: Option<&str>,
) -> Result<ClientConfig> {
    let file = load_config().ok();

    let api_key = api_key_flag
        .map(str::to_string)
        .or_else(|| std::env::var("PLANSMITH_API_KEY").ok())
        .or_else(|| file.as_ref().map(|f| f.generation.api_key.clone()));

    let Some(api_key) = api_key else {
        bail!(
            "no API key configured; pass --api-key, set PLANSMITH_API_KEY, \
             or run `plansmith init --api-key <key>`"
        );
    };

    let mut config = ClientConfig::new(api_key);

    if let Some(model) = model_flag
        .map(str::to_string)
        .or_else(|| std::env::var("PLANSMITH_MODEL").ok())
        .or_else(|| file.as_ref().and_then(|f| f.generation.model.clone()))
    {
        config = config.with_model(model);
    }

    if let Some(base_url) = base_url_flag
        .map(str::to_string)
        .or_else(|| std::env::var("PLANSMITH_BASE_URL").ok())
        .or_else(|| file.as_ref().and_then(|f| f.generation.base_url.clone()))
    {
        config = config.with_base_url(base_url);
    }

    Ok(config)
}

/// Run the `init` command: write a fresh config file.
pub fn run_init(api_key: &str, model: Option<&str>, base_url: Option<&str>, force: bool) -> Result<()> {
    let path = config_path();
    if path.exists() && !force {
        bail!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = ConfigFile {
        generation: GenerationSection {
            api_key: api_key.to_string(),
            model: model.map(str::to_string),
            base_url: base_url.map(str::to_string),
        },
    };
    save_config(&config)?;
    println!("Wrote config to {}", path.display());
    Ok(())
}
