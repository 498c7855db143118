use crate::error::{AppError, Result};
use crate::expand::{clean_path, expand_source_paths};
use crate::pattern::{FilePatterns, build_glob_set};
use globset::GlobSet;
use log;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects project-relative file paths for one source.
#[derive(Debug, Clone)]
pub struct Collector {
    patterns: FilePatterns,
    excludes: Option<GlobSet>,
}

/// Plain collection: matching by file pattern only, no exclusions.
pub fn collect_files(
    root: &Path,
    source_paths: &[String],
    file_pattern_csv: &str,
) -> Result<Vec<String>> {
    Collector::new(FilePatterns::parse(file_pattern_csv)?).collect(root, source_paths)
}

impl Collector {
    pub fn new(patterns: FilePatterns) -> Self {
        Self {
            patterns,
            excludes: None,
        }
    }

    /// Drops any entry whose relative path, ancestor prefix or single component
    /// matches one of `exclude_globs`.
    pub fn with_excludes(mut self, exclude_globs: &[String]) -> Result<Self> {
        let cleaned: Vec<String> = exclude_globs
            .iter()
            .map(|p| p.trim().trim_end_matches('/').to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if !cleaned.is_empty() {
            self.excludes = Some(build_glob_set(&cleaned)?);
        }
        Ok(self)
    }

    pub fn collect(&self, root: &Path, source_paths: &[String]) -> Result<Vec<String>> {
        let root_abs = std::path::absolute(root)
            .map(|p| clean_path(&p))
            .map_err(|e| AppError::PathResolution {
                path: root.to_path_buf(),
                source: e,
            })?;
        log::debug!(
            "Collecting {:?} under {} from {:?}",
            self.patterns.patterns(),
            root_abs.display(),
            source_paths
        );

        let starts = expand_source_paths(&root_abs, source_paths)?;
        let mut seen = BTreeSet::new();

        for start in &starts {
            let meta = match fs::metadata(start) {
                Ok(meta) => meta,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("Skipping missing source path: {}", start.display());
                    continue;
                }
                Err(e) => {
                    return Err(AppError::Stat {
                        path: start.clone(),
                        source: e,
                    });
                }
            };

            if !meta.is_dir() {
                let name = file_name_of(start);
                if self.patterns.matches(&name) {
                    let rel = relative_slash_path(start, &root_abs)?;
                    if !self.is_excluded(&rel) {
                        log::trace!("Including file source: {}", rel);
                        seen.insert(rel);
                    }
                }
                continue;
            }

            self.walk_dir(start, &root_abs, &mut seen)?;
        }

        log::debug!("Collected {} files", seen.len());
        Ok(seen.into_iter().collect())
    }

    fn walk_dir(&self, start: &Path, root_abs: &Path, seen: &mut BTreeSet<String>) -> Result<()> {
        let walker = WalkDir::new(start).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            match relative_slash_path(entry.path(), root_abs) {
                Ok(rel) => !self.is_excluded(&rel),
                Err(_) => true,
            }
        });

        for entry_result in walker {
            let entry = entry_result.map_err(|e| AppError::WalkDir {
                path: start.to_path_buf(),
                source: e,
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !self.patterns.matches(&name) {
                continue;
            }
            let rel = relative_slash_path(entry.path(), root_abs)?;
            if self.is_excluded(&rel) {
                log::trace!("Excluded: {}", rel);
                continue;
            }
            log::trace!("Including: {}", rel);
            seen.insert(rel);
        }
        Ok(())
    }

    fn is_excluded(&self, rel: &str) -> bool {
        let Some(excludes) = &self.excludes else {
            return false;
        };
        if excludes.is_match(rel) {
            return true;
        }
        let mut prefix = String::new();
        for component in rel.split('/') {
            if excludes.is_match(component) {
                return true;
            }
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(component);
            if excludes.is_match(&prefix) {
                return true;
            }
        }
        false
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Project-relative path with `/` separators on every platform.
fn relative_slash_path(path: &Path, root_abs: &Path) -> Result<String> {
    let rel: PathBuf =
        pathdiff::diff_paths(path, root_abs).ok_or_else(|| AppError::PathResolution {
            path: path.to_path_buf(),
            source: io::Error::other(format!(
                "cannot express relative to {}",
                root_abs.display()
            )),
        })?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
