use mdcontext_core::{AppError, Config, Document, Source, generate, render_document};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn source(kind: &str, paths: &[&str], pattern: &str) -> Source {
    Source {
        source_type: kind.to_string(),
        source_paths: paths.iter().map(|s| s.to_string()).collect(),
        file_pattern: pattern.to_string(),
        ..Source::default()
    }
}

#[test]
fn directories_listed_before_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "src/a.go", "package a\n");
    write(root, "src/b/c.go", "package b\n");

    let doc = Document {
        description: "Layout".to_string(),
        sources: vec![source("tree", &["src"], "*.go")],
        ..Document::default()
    };
    let text = render_document(&doc, root).unwrap();
    let b = text.find("├── b/").unwrap();
    let c = text.find("│   └── c.go").unwrap();
    let a = text.find("└── a.go").unwrap();
    assert!(b < c && c < a);
}

#[test]
fn zero_matches_render_notice() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "src/readme.txt", "hello\n");

    let doc = Document {
        sources: vec![source("file", &["src"], "*.php")],
        ..Document::default()
    };
    let text = render_document(&doc, root).unwrap();
    assert_eq!(text, "_No files matched \"*.php\" under [src]_\n\n");
}

#[test]
fn all_paths_missing_renders_only_notices() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::bootstrap();
    config.documents[0].output_path = PathBuf::from("out/structure.md");

    let written = generate(&config, temp_dir.path()).unwrap();
    assert_eq!(written, vec![temp_dir.path().join("out/structure.md")]);

    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(
        text,
        "# Project structure overview\n\n\
         ```\n(no matches for \"*.php,*.twig\" in [src migrations templates])\n```\n\n\
         _No files matched \"*.php,*.twig\" under [src migrations templates]_\n\n"
    );
}

#[test]
fn fences_are_tagged_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "pkg/main.go", "package main\n");
    write(root, "pkg/blob.xyz", "opaque");

    let doc = Document {
        sources: vec![source("file", &["pkg"], "*.go,*.xyz")],
        ..Document::default()
    };
    let text = render_document(&doc, root).unwrap();
    assert!(text.contains("### pkg/main.go\n\n```go\npackage main\n```\n\n"));
    assert!(text.contains("### pkg/blob.xyz\n\n```\nopaque\n```\n\n"));
}

#[test]
fn init_twice_keeps_original_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");

    Config::init_file(&path).unwrap();
    let original = fs::read_to_string(&path).unwrap();

    let err = Config::init_file(&path).unwrap_err();
    assert!(matches!(err, AppError::ConfigExists(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn init_then_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    Config::init_file(&path).unwrap();
    assert_eq!(Config::load_from_path(&path).unwrap(), Config::bootstrap());
}

#[test]
fn unknown_type_stops_generation() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    let config = Config {
        documents: vec![Document {
            output_path: PathBuf::from("ctx.md"),
            sources: vec![source("graph", &["src"], "")],
            ..Document::default()
        }],
        ..Config::default()
    };
    let err = generate(&config, base).unwrap_err();
    assert!(matches!(err, AppError::UnknownSourceType(t) if t == "graph"));
    assert!(!base.join("ctx.md").exists());
}

#[test]
fn yaml_config_drives_generation() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    write(base, "app/src/Kernel.php", "<?php\n");
    write(base, "app/src/vendor/Lib.php", "<?php\n");
    write(
        base,
        "mdcontext.yaml",
        r#"projectPath: app
documents:
  - description: Sources
    outputPath: ctx/sources.md
    sources:
      - type: FILE
        sourcePaths: ["src"]
        excludePaths: ["vendor"]
        enforceExcludes: true
        filePattern: "*.php"
"#,
    );

    let config = Config::load_from_path(&base.join("mdcontext.yaml")).unwrap();
    generate(&config, base).unwrap();
    let text = fs::read_to_string(base.join("ctx/sources.md")).unwrap();
    assert_eq!(
        text,
        "# Sources\n\n### src/Kernel.php\n\n```php\n<?php\n```\n\n"
    );
}
