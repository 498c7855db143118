use crate::error::{AppError, Result};
use log;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";
pub const DEFAULT_PROJECT_PATH: &str = ".";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root that source paths resolve against. Relative values are joined onto
    /// the invocation directory.
    #[serde(default = "default_project_path")]
    pub project_path: PathBuf,
    #[serde(default)]
    pub documents: Vec<Document>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub output_path: PathBuf,
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// "tree" or "file", compared case-insensitively at render time.
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub source_paths: Vec<String>,
    #[serde(default)]
    pub exclude_paths: Vec<String>,
    /// Comma-separated globs for file names, e.g. "*.php,*.twig".
    #[serde(default)]
    pub file_pattern: String,
    /// Exclusions are only applied when this is set.
    #[serde(default, skip_serializing_if = "is_false")]
    pub enforce_excludes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Tree,
    File,
}

impl FromStr for SourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(SourceKind::Tree),
            "file" => Ok(SourceKind::File),
            _ => Err(AppError::UnknownSourceType(s.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Tree => f.write_str("tree"),
            SourceKind::File => f.write_str("file"),
        }
    }
}

fn default_project_path() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECT_PATH)
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_path: default_project_path(),
            documents: Vec::new(),
        }
    }
}

impl Source {
    pub fn kind(&self) -> Result<SourceKind> {
        self.source_type.parse()
    }
}

impl Config {
    /// The configuration written by `init`: a PHP/Twig project overview.
    pub fn bootstrap() -> Self {
        let scan_dirs = || {
            vec![
                "src".to_string(),
                "migrations".to_string(),
                "templates".to_string(),
            ]
        };
        let excludes = || {
            vec![
                "vendor".to_string(),
                "node_modules".to_string(),
                ".git".to_string(),
            ]
        };
        Self {
            project_path: default_project_path(),
            documents: vec![Document {
                description: "Project structure overview".to_string(),
                output_path: PathBuf::from("project-structure.md"),
                sources: vec![
                    Source {
                        source_type: "tree".to_string(),
                        source_paths: scan_dirs(),
                        exclude_paths: excludes(),
                        file_pattern: "*.php,*.twig".to_string(),
                        enforce_excludes: false,
                    },
                    Source {
                        source_type: "file".to_string(),
                        source_paths: scan_dirs(),
                        exclude_paths: excludes(),
                        file_pattern: "*.php,*.twig".to_string(),
                        enforce_excludes: false,
                    },
                ],
            }],
        }
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        log::info!("Loading configuration from: {}", config_path.display());
        let yaml_content = fs::read_to_string(config_path).map_err(|e| AppError::ConfigRead {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        serde_yml::from_str::<Config>(&yaml_content).map_err(|e| AppError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    /// Serializes to YAML, creating parent directories as needed. Overwrites.
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        let yaml_content = serde_yml::to_string(self)?;
        if let Some(parent) = config_path.parent() {
            ensure_dir(parent)?;
        }
        fs::write(config_path, yaml_content).map_err(|e| AppError::FileWrite {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Configuration written to {}", config_path.display());
        Ok(())
    }

    /// Writes the bootstrap configuration, refusing to touch an existing file.
    pub fn init_file(config_path: &Path) -> Result<Self> {
        match fs::metadata(config_path) {
            Ok(_) => return Err(AppError::ConfigExists(config_path.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::Stat {
                    path: config_path.to_path_buf(),
                    source: e,
                });
            }
        }
        let config = Self::bootstrap();
        config.save_to_path(config_path)?;
        log::info!("Default config created at {}", config_path.display());
        Ok(config)
    }

    /// Joins `project_path` onto `base_dir`; an empty value means `base_dir`.
    pub fn resolve_project_root(&self, base_dir: &Path) -> PathBuf {
        if self.project_path.as_os_str().is_empty() {
            base_dir.to_path_buf()
        } else {
            base_dir.join(&self.project_path)
        }
    }
}

/// Creates `dir` and its ancestors. Reports `NotADirectory` when an existing
/// component is a plain file.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        return Ok(());
    }
    if let Err(e) = fs::create_dir_all(dir) {
        if let Ok(meta) = fs::metadata(dir) {
            if !meta.is_dir() {
                return Err(AppError::NotADirectory(dir.to_path_buf()));
            }
        }
        return Err(AppError::DirCreation {
            path: dir.to_path_buf(),
            source: e,
        });
    }
    Ok(())
}
