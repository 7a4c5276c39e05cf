//! Configuration types for healthlog.
//!
//! [`Config::load`] layers the built-in defaults, then
//! `~/.config/healthlog/config.toml` if it exists, then an explicit file
//! passed by the caller. Nothing is ever written back. [`Config::defaults`]
//! returns the built-in defaults without touching the filesystem (useful in
//! tests).

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::aggregate::MalformedPolicy;
use crate::correction::BoundaryCorrection;
use crate::metrics::AnalysisOptions;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[input]
time_column     = "Time"
content_column  = "Content"
template_column = "EventTemplate"

[analysis]
on_malformed = "abort"

[correction]
enabled       = true
group_ordinal = 1
entries       = 2

[output]
time_format = "%H:%M:%S%.3f"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub correction: CorrectionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[input]` section: column names in the structured log export.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_time_column")]
    pub time_column: String,
    #[serde(default = "default_content_column")]
    pub content_column: String,
    #[serde(default = "default_template_column")]
    pub template_column: String,
}

fn default_time_column() -> String { "Time".to_string() }
fn default_content_column() -> String { "Content".to_string() }
fn default_template_column() -> String { "EventTemplate".to_string() }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            time_column: default_time_column(),
            content_column: default_content_column(),
            template_column: default_template_column(),
        }
    }
}

/// `[analysis]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

/// `[correction]` section: the step-detail boundary workaround.
#[derive(Debug, Clone, Deserialize)]
pub struct CorrectionConfig {
    #[serde(default = "default_correction_enabled")]
    pub enabled: bool,
    #[serde(default = "default_group_ordinal")]
    pub group_ordinal: usize,
    #[serde(default = "default_entries")]
    pub entries: usize,
}

fn default_correction_enabled() -> bool { true }
fn default_group_ordinal() -> usize { BoundaryCorrection::default().group_ordinal }
fn default_entries() -> usize { BoundaryCorrection::default().entries }

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            enabled: default_correction_enabled(),
            group_ordinal: default_group_ordinal(),
            entries: default_entries(),
        }
    }
}

impl CorrectionConfig {
    pub fn boundary_correction(&self) -> Option<BoundaryCorrection> {
        self.enabled.then_some(BoundaryCorrection {
            group_ordinal: self.group_ordinal,
            entries: self.entries,
        })
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// chrono format string for series times in table output.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_time_format() -> String { "%H:%M:%S%.3f".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
        }
    }
}

impl OutputConfig {
    /// Reject time formats chrono cannot parse.
    pub fn validate(&self) -> anyhow::Result<()> {
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("invalid [output] time_format {:?}", self.time_format);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then the user file, then `explicit` if
    /// given. A missing user file is fine; a missing explicit file is not.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Config = builder.build()?.try_deserialize()?;
        cfg.output.validate()?;
        tracing::debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            on_malformed: self.analysis.on_malformed,
            correction: self.correction.boundary_correction(),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("healthlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
