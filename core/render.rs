use crate::collect::Collector;
use crate::config::{Document, Source, SourceKind};
use crate::error::{AppError, Result};
use crate::lang::detect_language;
use crate::pattern::FilePatterns;
use crate::tree::render_tree;
use log;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Renders one document as Markdown, sources in configured order.
pub fn render_document(doc: &Document, root: &Path) -> Result<String> {
    log::debug!(
        "Rendering document '{}' ({} sources)",
        doc.description,
        doc.sources.len()
    );
    let mut out = String::new();

    if !doc.description.is_empty() {
        let _ = write!(out, "# {}\n\n", doc.description);
    }

    for source in &doc.sources {
        let files = collect_source(source, root).map_err(|e| AppError::Collect {
            source_type: source.source_type.clone(),
            source: Box::new(e),
        })?;

        match source.kind()? {
            SourceKind::Tree => render_tree_section(&mut out, source, &files),
            SourceKind::File => render_file_section(&mut out, source, &files, root)?,
        }
    }

    Ok(out)
}

/// Relative paths a source resolves to, honouring `enforceExcludes`.
pub fn collect_source(source: &Source, root: &Path) -> Result<Vec<String>> {
    let mut collector = Collector::new(FilePatterns::parse(&source.file_pattern)?);
    if source.enforce_excludes {
        collector = collector.with_excludes(&source.exclude_paths)?;
    }
    collector.collect(root, &source.source_paths)
}

fn render_tree_section(out: &mut String, source: &Source, files: &[String]) {
    if files.is_empty() {
        log::debug!("Tree source matched nothing: {:?}", source.source_paths);
        let _ = write!(
            out,
            "```\n(no matches for {:?} in {})\n```\n\n",
            source.file_pattern,
            bracket_list(&source.source_paths)
        );
        return;
    }
    let _ = write!(out, "```\n{}\n```\n\n", render_tree(files));
}

fn render_file_section(
    out: &mut String,
    source: &Source,
    files: &[String],
    root: &Path,
) -> Result<()> {
    if files.is_empty() {
        log::debug!("File source matched nothing: {:?}", source.source_paths);
        let _ = write!(
            out,
            "_No files matched {:?} under {}_\n\n",
            source.file_pattern,
            bracket_list(&source.source_paths)
        );
        return Ok(());
    }

    for rel in files {
        let data = fs::read(root.join(rel)).map_err(|e| AppError::FileRead {
            path: rel.into(),
            source: e,
        })?;
        log::trace!("Embedding {} ({} bytes)", rel, data.len());

        let _ = write!(out, "### {}\n\n", rel);
        let _ = writeln!(out, "```{}", detect_language(rel).unwrap_or(""));
        out.push_str(&String::from_utf8_lossy(&data));
        if data.last().is_some_and(|b| *b != b'\n') {
            out.push('\n');
        }
        out.push_str("```\n\n");
    }
    Ok(())
}

fn bracket_list(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}
