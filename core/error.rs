use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error("Config Read Error: Path '{path}', Error: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: Path '{path}', Error: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("YAML Serialization Error: {0}")]
    YamlError(#[from] serde_yml::Error),

    #[error("config already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("resolve path '{path}': {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk {path}: {source}")]
    WalkDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Glob Pattern Error: {0}")]
    Glob(String),

    #[error("glob {pattern}: {message}")]
    GlobExpansion { pattern: String, message: String },

    #[error("read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write output {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("create directory {path}: {source}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists and is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("unknown source type: {0:?}")]
    UnknownSourceType(String),

    #[error("collect files for {source_type:?}: {source}")]
    Collect {
        source_type: String,
        #[source]
        source: Box<AppError>,
    },
}

impl From<globset::Error> for AppError {
    fn from(err: globset::Error) -> Self {
        AppError::Glob(format!("Globset error: {}", err))
    }
}

impl AppError {
    /// Peels off `Collect` wrappers to reach the underlying failure.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Collect { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = AppError::UnknownSourceType("graph".to_string());
        assert_eq!(format!("{err}"), "unknown source type: \"graph\"");

        let err = AppError::ConfigExists(PathBuf::from("config.yaml"));
        assert_eq!(format!("{err}"), "config already exists: config.yaml");

        let err = AppError::NotADirectory(PathBuf::from("out/file"));
        assert_eq!(
            format!("{err}"),
            "path exists and is not a directory: out/file"
        );
    }

    #[test]
    fn test_collect_wraps_source_type() {
        let inner = AppError::Stat {
            path: PathBuf::from("/tmp/src"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = AppError::Collect {
            source_type: "tree".to_string(),
            source: Box::new(inner),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("collect files for \"tree\": stat /tmp/src"));
        assert!(matches!(err.root_cause(), AppError::Stat { .. }));
    }
}
