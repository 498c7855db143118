use crate::error::{AppError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log;

/// Compiled form of a comma-separated file-name pattern list.
#[derive(Debug, Clone)]
pub struct FilePatterns {
    raw: Vec<String>,
    set: GlobSet,
}

/// Splits on commas, trims each entry and drops the empty ones.
pub fn split_patterns(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

impl FilePatterns {
    pub fn parse(csv: &str) -> Result<Self> {
        Self::from_patterns(split_patterns(csv))
    }

    fn from_patterns(patterns: Vec<String>) -> Result<Self> {
        let set = build_glob_set(&patterns)?;
        Ok(Self { raw: patterns, set })
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn patterns(&self) -> &[String] {
        &self.raw
    }

    /// An empty pattern list matches every name.
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || self.set.is_match(name)
    }
}

/// Braces are ordinary characters in shell-style patterns; `globset` would
/// read them as alternation, so each one becomes a single-member class.
fn escape_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    let mut in_class = false;
    for c in pattern.chars() {
        match c {
            '{' | '}' if !escaped && !in_class => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            '[' if !escaped => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out
}

/// Shell-style globs: `*` and `?` never cross a `/`, `\` escapes, no braces.
pub(crate) fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern_str in patterns {
        let glob = GlobBuilder::new(&escape_braces(pattern_str))
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|e| {
                log::error!("Invalid glob pattern \"{}\": {}", pattern_str, e);
                AppError::Glob(format!("Invalid glob pattern \"{}\": {}", pattern_str, e))
            })?;
        log::trace!("Adding glob pattern: {}", pattern_str);
        builder.add(glob);
    }
    builder.build().map_err(AppError::from)
}
