use crate::config::{Config, ensure_dir};
use crate::error::{AppError, Result};
use crate::render::render_document;
use log;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders and writes every document, in order.
///
/// Sources resolve against the configured project root, outputs against
/// `base_dir`. The first failure stops the run; files already written stay.
pub fn generate(config: &Config, base_dir: &Path) -> Result<Vec<PathBuf>> {
    let root = config.resolve_project_root(base_dir);
    log::info!(
        "Generating {} document(s) from {}",
        config.documents.len(),
        root.display()
    );

    let mut written = Vec::with_capacity(config.documents.len());
    for doc in &config.documents {
        let text = render_document(doc, &root)?;
        let output = base_dir.join(&doc.output_path);
        if let Some(parent) = output.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&output, text.as_bytes()).map_err(|e| AppError::FileWrite {
            path: output.clone(),
            source: e,
        })?;
        log::info!("Wrote {} ({} bytes)", output.display(), text.len());
        written.push(output);
    }
    Ok(written)
}

/// Renders every document and concatenates the results without writing.
pub fn render_all(config: &Config, base_dir: &Path) -> Result<String> {
    let root = config.resolve_project_root(base_dir);
    let mut out = String::new();
    for doc in &config.documents {
        out.push_str(&render_document(doc, &root)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Document, Source};
    use tempfile::TempDir;

    fn tree_doc(output: &str, paths: &[&str]) -> Document {
        Document {
            description: "Ctx".to_string(),
            output_path: PathBuf::from(output),
            sources: vec![Source {
                source_type: "tree".to_string(),
                source_paths: paths.iter().map(|s| s.to_string()).collect(),
                file_pattern: "*.go".to_string(),
                ..Source::default()
            }],
        }
    }

    #[test]
    fn test_writes_documents_under_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::create_dir_all(base.join("proj/src")).unwrap();
        fs::write(base.join("proj/src/main.go"), "package main\n").unwrap();

        let config = Config {
            project_path: PathBuf::from("proj"),
            documents: vec![
                tree_doc("docs/nested/one.md", &["src"]),
                tree_doc("two.md", &["missing"]),
            ],
        };
        let written = generate(&config, base).unwrap();
        assert_eq!(
            written,
            vec![base.join("docs/nested/one.md"), base.join("two.md")]
        );

        let one = fs::read_to_string(base.join("docs/nested/one.md")).unwrap();
        assert_eq!(one, "# Ctx\n\n```\n└── src/\n    └── main.go\n\n```\n\n");
        let two = fs::read_to_string(base.join("two.md")).unwrap();
        assert!(two.contains("(no matches for \"*.go\" in [missing])"));
    }

    #[test]
    fn test_overwrites_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::write(base.join("out.md"), "stale content that is longer").unwrap();

        let config = Config {
            documents: vec![tree_doc("out.md", &["src"])],
            ..Config::default()
        };
        generate(&config, base).unwrap();
        let text = fs::read_to_string(base.join("out.md")).unwrap();
        assert!(text.starts_with("# Ctx\n\n"));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn test_first_failure_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::write(base.join("blocker"), "x").unwrap();

        let config = Config {
            documents: vec![
                tree_doc("first.md", &["src"]),
                tree_doc("blocker/second.md", &["src"]),
                tree_doc("third.md", &["src"]),
            ],
            ..Config::default()
        };
        let err = generate(&config, base).unwrap_err();
        assert!(matches!(err, AppError::NotADirectory(_)));
        assert!(base.join("first.md").exists());
        assert!(!base.join("third.md").exists());
    }

    #[test]
    fn test_render_all_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        let config = Config {
            documents: vec![tree_doc("a.md", &["src"]), tree_doc("b.md", &["src"])],
            ..Config::default()
        };
        let text = render_all(&config, base).unwrap();
        assert_eq!(text.matches("# Ctx\n\n").count(), 2);
        assert!(!base.join("a.md").exists());
    }
}
