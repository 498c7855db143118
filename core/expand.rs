use crate::error::{AppError, Result};
use log;
use std::path::{Component, Path, PathBuf};

const GLOB_META: [char; 3] = ['*', '?', '['];

pub fn has_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_META)
}

/// Folds each run of `*` into one, so `**` is an ordinary single-segment
/// wildcard instead of a recursive one.
pub fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Lexical normalisation: drops `.` components and folds `name/..` pairs.
/// Never touches the filesystem, so symlinks are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Turns configured source entries into concrete start points under `root_abs`.
///
/// Entries without glob metacharacters are passed through (cleaned) whether or
/// not they exist. Glob entries contribute their matches in sorted order; an
/// entry that matches nothing contributes nothing.
pub fn expand_source_paths(root_abs: &Path, entries: &[String]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in entries {
        let entry = collapse_stars(entry);
        let resolved = if Path::new(&entry).is_absolute() {
            PathBuf::from(&entry)
        } else {
            root_abs.join(&entry)
        };
        let pattern = resolved.to_string_lossy().into_owned();

        if !has_glob(&pattern) {
            out.push(clean_path(&resolved));
            continue;
        }

        let paths = glob::glob(&pattern).map_err(|e| AppError::GlobExpansion {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        let before = out.len();
        for matched in paths {
            match matched {
                Ok(path) => out.push(clean_path(&path)),
                Err(e) => {
                    log::warn!("Skipping unreadable glob entry for {}: {}", pattern, e);
                }
            }
        }
        if out.len() == before {
            log::debug!("Source path pattern matched nothing: {}", pattern);
        } else {
            log::trace!("Pattern {} expanded to {} paths", pattern, out.len() - before);
        }
    }
    Ok(out)
}
