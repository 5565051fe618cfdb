//! rehearse configuration and evaluator factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rehearse_core::evaluator::Evaluator;
use rehearse_core::jitter::JitterMode;
use rehearse_core::lexicon::Lexicon;
use rehearse_core::model::DEFAULT_IDEAL_WORD_COUNT;
use rehearse_core::traits::{LexicalProvider, NeutralProvider};

use crate::afinn::AfinnProvider;

/// Which lexical provider backs sentiment and verb detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    /// Built-in word lists, optionally extended from files.
    Lexicon {
        /// TOML file with a `[words]` table of extra polarities.
        #[serde(default)]
        afinn_path: Option<PathBuf>,
        #[serde(default)]
        extra_verbs: Vec<String>,
    },
    /// No sentiment and no verbs.
    Neutral,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Lexicon {
            afinn_path: None,
            extra_verbs: Vec::new(),
        }
    }
}

/// Top-level rehearse configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehearseConfig {
    /// Ideal answer length when none is given on the command line.
    #[serde(default = "default_ideal_word_count")]
    pub ideal_word_count: u32,
    /// Max answers scored concurrently in batch mode.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
    /// Completeness jitter source.
    #[serde(default)]
    pub jitter: JitterMode,
    /// Cue-phrase lexicon replacing the built-in English tables.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    #[serde(default)]
    pub provider: ProviderConfig,
}

fn default_ideal_word_count() -> u32 {
    DEFAULT_IDEAL_WORD_COUNT
}
fn default_parallelism() -> usize {
    4
}

impl Default for RehearseConfig {
    fn default() -> Self {
        Self {
            ideal_word_count: default_ideal_word_count(),
            parallelism: default_parallelism(),
            jitter: JitterMode::default(),
            lexicon_path: None,
            provider: ProviderConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
pub fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `rehearse.toml` in the current directory
/// 2. `~/.config/rehearse/config.toml`
///
/// Environment variable overrides: `REHEARSE_JITTER`, `REHEARSE_LEXICON`.
pub fn load_config() -> Result<RehearseConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<RehearseConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("rehearse.toml");
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
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => RehearseConfig::default(),
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Parse a config file body and resolve `${VAR}` references in its paths.
pub fn parse_config_str(content: &str) -> Result<RehearseConfig> {
    let mut config: RehearseConfig = toml::from_str(content)?;

    config.lexicon_path = config.lexicon_path.as_deref().map(resolve_path);
    if let ProviderConfig::Lexicon { afinn_path, .. } = &mut config.provider {
        *afinn_path = afinn_path.as_deref().map(resolve_path);
    }
    Ok(config)
}

fn apply_env_overrides(config: &mut RehearseConfig) -> Result<()> {
    if let Ok(mode) = std::env::var("REHEARSE_JITTER") {
        config.jitter = mode
            .parse()
            .map_err(|e: String| anyhow::anyhow!("REHEARSE_JITTER: {e}"))?;
    }
    if let Ok(path) = std::env::var("REHEARSE_LEXICON") {
        config.lexicon_path = Some(PathBuf::from(path));
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("rehearse"))
}

/// Create a provider instance from its configuration.
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn LexicalProvider>> {
    match config {
        ProviderConfig::Lexicon {
            afinn_path,
            extra_verbs,
        } => {
            let mut provider = AfinnProvider::new().with_extra_verbs(extra_verbs);
            if let Some(path) = afinn_path {
                provider = provider.with_word_file(path)?;
            }
            Ok(Arc::new(provider))
        }
        ProviderConfig::Neutral => Ok(Arc::new(NeutralProvider)),
    }
}

/// Build a ready-to-use evaluator from configuration.
pub fn build_evaluator(config: &RehearseConfig) -> Result<Evaluator> {
    let lexicon = match &config.lexicon_path {
        Some(path) => Lexicon::load(path)?,
        None => Lexicon::default(),
    };
    let provider = create_provider(&config.provider)?;
    let jitter = Arc::from(config.jitter.build());

    tracing::debug!(
        provider = provider.name(),
        jitter = %config.jitter,
        "evaluator configured"
    );
    Ok(Evaluator::new(lexicon, provider, jitter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_REHEARSE_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_REHEARSE_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_REHEARSE_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("unterminated ${X"), "unterminated ${X");
        std::env::remove_var("_REHEARSE_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = RehearseConfig::default();
        assert_eq!(config.ideal_word_count, 100);
        assert_eq!(config.parallelism, 4);
        assert_eq!(config.jitter, JitterMode::Seeded);
        assert!(matches!(config.provider, ProviderConfig::Lexicon { .. }));
    }

    #[test]
    fn parse_full_config() {
        std::env::set_var("_REHEARSE_WORDS_DIR", "/opt/words");
        let config = parse_config_str(
            r#"
ideal_word_count = 150
parallelism = 8
jitter = "none"

[provider]
type = "lexicon"
afinn_path = "${_REHEARSE_WORDS_DIR}/extra.toml"
extra_verbs = ["containerize"]
"#,
        )
        .unwrap();
        std::env::remove_var("_REHEARSE_WORDS_DIR");

        assert_eq!(config.ideal_word_count, 150);
        assert_eq!(config.parallelism, 8);
        assert_eq!(config.jitter, JitterMode::None);
        assert_eq!(
            config.provider,
            ProviderConfig::Lexicon {
                afinn_path: Some(PathBuf::from("/opt/words/extra.toml")),
                extra_verbs: vec!["containerize".into()],
            }
        );
    }

    #[test]
    fn parse_neutral_provider() {
        let config = parse_config_str("[provider]\ntype = \"neutral\"\n").unwrap();
        assert_eq!(config.provider, ProviderConfig::Neutral);
    }

    #[test]
    fn unknown_jitter_mode_is_rejected() {
        assert!(parse_config_str("jitter = \"chaotic\"").is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/rehearse.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rehearse.toml");
        std::fs::write(&path, "parallelism = 2\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.parallelism, 2);
    }

    #[test]
    fn build_evaluator_uses_configured_provider() {
        let neutral = RehearseConfig {
            provider: ProviderConfig::Neutral,
            ..Default::default()
        };
        assert_eq!(build_evaluator(&neutral).unwrap().provider_name(), "neutral");
        assert_eq!(
            build_evaluator(&RehearseConfig::default())
                .unwrap()
                .provider_name(),
            "lexicon"
        );
    }

    #[test]
    fn build_evaluator_fails_on_missing_lexicon() {
        let config = RehearseConfig {
            lexicon_path: Some(PathBuf::from("/nonexistent/lexicon.toml")),
            ..Default::default()
        };
        assert!(build_evaluator(&config).is_err());
    }
}
