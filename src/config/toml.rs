//! TOML configuration file parsing

use super::validator::RawConfig;
use super::Pdf;
use crate::error::GenError;
use crate::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings read from a TOML configuration file
///
/// Every key is optional; absent keys leave the setting to the command line.
/// `pdf` takes either a name or its 1-based identifier (`pdf = 3`).
///
/// ```toml
/// nintervals = 10
/// npoints = 1000
/// pdf = "gaussian"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub nintervals: Option<i64>,
    pub npoints: Option<i64>,
    pub pdf: Option<PdfSetting>,
    pub seed: Option<u64>,
}

/// Probability density function given by name or by identifier
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PdfSetting {
    Name(String),
    Id(u32),
}

impl PdfSetting {
    /// Name to hand to the validator
    ///
    /// Names pass through unchecked; identifiers must be known.
    fn into_name(self) -> Result<String> {
        match self {
            PdfSetting::Name(name) => Ok(name),
            PdfSetting::Id(id) => Ok(Pdf::from_id(id)?.name().to_string()),
        }
    }
}

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path).map_err(|e| GenError::ConfigFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_toml_string(&contents).map_err(|message| GenError::ConfigFile {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> std::result::Result<FileConfig, String> {
    ::toml::from_str(contents).map_err(|e: ::toml::de::Error| e.message().to_string())
}

/// Merge command-line settings with file settings (command line takes precedence)
///
/// Fails with [`GenError::UnsupportedDistribution`] when the file's `pdf`
/// identifier is used and unknown.
pub fn merge_cli_with_file(cli: RawConfig, file: FileConfig) -> Result<RawConfig> {
    let pdf = match (cli.pdf, file.pdf) {
        (Some(name), _) => Some(name),
        (None, Some(setting)) => Some(setting.into_name()?),
        (None, None) => None,
    };

    Ok(RawConfig {
        nintervals: cli.nintervals.or_else(|| file.nintervals.map(|n| n.to_string())),
        npoints: cli.npoints.or_else(|| file.npoints.map(|n| n.to_string())),
        pdf,
        seed: cli.seed.or(file.seed),
    })
}
