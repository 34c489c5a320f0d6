//! flashforge configuration.
//!
//! Scoring constants are fixed; the config only chooses which deck to load
//! and how a run starts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level flashforge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlashforgeConfig {
    /// Deck file to review. The built-in starter deck is used when unset.
    #[serde(default)]
    pub deck: Option<PathBuf>,
    /// Shuffle the deck before the first card.
    #[serde(default)]
    pub shuffle_on_start: bool,
    /// Fixed RNG seed for reproducible shuffles.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Directory that end-of-run summaries are written to.
    #[serde(default)]
    pub summary_dir: Option<PathBuf>,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `flashforge.toml` in the current directory
/// 2. `~/.config/flashforge/config.toml`
///
/// Environment variable override: `FLASHFORGE_DECK`.
pub fn load_config_from(path: Option<&Path>) -> Result<FlashforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("flashforge.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<FlashforgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => FlashforgeConfig::default(),
    };

    if let Ok(deck) = std::env::var("FLASHFORGE_DECK") {
        if !deck.is_empty() {
            config.deck = Some(PathBuf::from(deck));
        }
    }

    config.deck = config.deck.as_deref().map(resolve_path);
    config.summary_dir = config.summary_dir.as_deref().map(resolve_path);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("flashforge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_FLASHFORGE_TEST_VAR", "decks");
        assert_eq!(resolve_env_vars("${_FLASHFORGE_TEST_VAR}"), "decks");
        assert_eq!(
            resolve_env_vars("./${_FLASHFORGE_TEST_VAR}/math.toml"),
            "./decks/math.toml"
        );
        assert_eq!(resolve_env_vars("no vars"), "no vars");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_FLASHFORGE_TEST_VAR");
    }

    #[test]
    fn resolved_values_are_not_expanded_again() {
        std::env::set_var("_FLASHFORGE_SELF_REF", "${_FLASHFORGE_SELF_REF}");
        assert_eq!(
            resolve_env_vars("${_FLASHFORGE_SELF_REF}/deck.toml"),
            "${_FLASHFORGE_SELF_REF}/deck.toml"
        );
        assert_eq!(
            resolve_env_vars("a${_FLASHFORGE_SELF_REF}b${_FLASHFORGE_UNSET_VAR}c"),
            "a${_FLASHFORGE_SELF_REF}bc"
        );
        std::env::remove_var("_FLASHFORGE_SELF_REF");
    }

    #[test]
    fn self_referencing_deck_path_loads() {
        std::env::set_var("_FLASHFORGE_LOOP_DECK", "${_FLASHFORGE_LOOP_DECK}");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashforge.toml");
        std::fs::write(&path, "deck = \"${_FLASHFORGE_LOOP_DECK}\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        std::env::remove_var("_FLASHFORGE_LOOP_DECK");
        assert_eq!(
            config.deck,
            Some(PathBuf::from("${_FLASHFORGE_LOOP_DECK}"))
        );
    }

    #[test]
    fn default_config() {
        let config = FlashforgeConfig::default();
        assert!(config.deck.is_none());
        assert!(!config.shuffle_on_start);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_config_file() {
        let toml_str = r#"
deck = "decks/science.toml"
shuffle_on_start = true
seed = 42
summary_dir = "./runs"
"#;
        let config: FlashforgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.deck, Some(PathBuf::from("decks/science.toml")));
        assert!(config.shuffle_on_start);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("definitely/missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashforge.toml");
        std::fs::write(&path, "shuffle_on_start = true\nseed = 9\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert!(config.shuffle_on_start);
        assert_eq!(config.seed, Some(9));
    }
}
