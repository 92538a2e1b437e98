//! Site configuration
//!
//! Everything user-facing is data: the prompt, the scrollback bound, the
//! profile the canned responses are built from, and the command vocabulary.
//! Loaded from a TOML file; a missing file falls back to defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default ASCII banner shown on startup
pub const DEFAULT_BANNER: &str = r#" _____ _____ ____  __  __ _____ ___  _     ___ ___
|_   _| ____|  _ \|  \/  |  ___/ _ \| |   |_ _/ _ \
  | | |  _| | |_) | |\/| | |_ | | | | |    | | | | |
  | | | |___|  _ <| |  | |  _|| |_| | |___ | | |_| |
  |_| |_____|_| \_\_|  |_|_|   \___/|_____|___\___/"#;

/// One-line stand-in for the banner on narrow terminals
pub const DEFAULT_BANNER_FALLBACK: &str = "[ termfolio ]";

/// Top-level configuration file structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Prompt prefix echoed before every submitted line
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Soft bound on visible scrollback, in weighted units
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    /// Greeting line shown above the banner on startup
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Multi-line ASCII banner
    #[serde(default = "default_banner")]
    pub banner: String,
    /// Replacement for the banner when the terminal is too narrow
    #[serde(default = "default_banner_fallback")]
    pub banner_fallback: String,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub commands: CommandsConfig,
}

fn default_prompt() -> String {
    "guest@termfolio:~$ ".to_string()
}

fn default_max_visible() -> usize {
    40
}

fn default_greeting() -> String {
    "Hi! Welcome to".to_string()
}

fn default_banner() -> String {
    DEFAULT_BANNER.to_string()
}

fn default_banner_fallback() -> String {
    DEFAULT_BANNER_FALLBACK.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            max_visible: default_max_visible(),
            greeting: default_greeting(),
            banner: default_banner(),
            banner_fallback: default_banner_fallback(),
            profile: Profile::default(),
            commands: CommandsConfig::default(),
        }
    }
}

/// Who this portfolio is about
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Free-form bio lines for the about response
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_github")]
    pub github: String,
    #[serde(default = "default_linkedin")]
    pub linkedin: String,
    #[serde(default = "default_website")]
    pub website: String,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

fn default_name() -> String {
    "Your Name".to_string()
}

fn default_tagline() -> String {
    "Software Engineer".to_string()
}

fn default_email() -> String {
    "you@example.com".to_string()
}

fn default_github() -> String {
    "https://github.com/you".to_string()
}

fn default_linkedin() -> String {
    "https://linkedin.com/in/you".to_string()
}

fn default_website() -> String {
    "https://example.com".to_string()
}

fn default_resume_url() -> String {
    "https://example.com/resume.pdf".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            bio: Vec::new(),
            email: default_email(),
            github: default_github(),
            linkedin: default_linkedin(),
            website: default_website(),
            resume_url: default_resume_url(),
        }
    }
}

/// Per-command overrides: the five behaviors are fixed, their names and
/// response text are not
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandsConfig {
    #[serde(default)]
    pub help: CommandOverride,
    #[serde(default)]
    pub about: CommandOverride,
    #[serde(default)]
    pub resume: CommandOverride,
    #[serde(default)]
    pub contact: CommandOverride,
    #[serde(default)]
    pub clear: ClearOverride,
}

/// Rename and/or replace the response lines of a canned-response command
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandOverride {
    pub name: Option<String>,
    pub response: Option<Vec<String>>,
}

/// Rename the reset command and/or replace its notice line
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearOverride {
    pub name: Option<String>,
    pub notice: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("config not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        tracing::info!("loaded config from {}", path.display());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt, "guest@termfolio:~$ ");
        assert_eq!(config.max_visible, 40);
        assert!(config.banner.lines().count() > 1);
        assert!(config.commands.help.name.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/termfolio.toml").unwrap();
        assert_eq!(config.max_visible, 40);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termfolio.toml");
        std::fs::write(
            &path,
            r#"
prompt = "visitor:~$ "

[profile]
name = "Ada Lovelace"
email = "ada@example.com"

[commands.help]
name = "/help"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.prompt, "visitor:~$ ");
        assert_eq!(config.max_visible, 40);
        assert_eq!(config.profile.name, "Ada Lovelace");
        assert_eq!(config.profile.tagline, "Software Engineer");
        assert_eq!(config.commands.help.name.as_deref(), Some("/help"));
        assert!(config.commands.clear.name.is_none());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termfolio.toml");
        std::fs::write(&path, "max_visible = \"lots\"").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
