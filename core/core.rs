pub mod collect;
pub mod config;
pub mod error;
pub mod expand;
pub mod generate;
pub mod lang;
pub mod pattern;
pub mod render;
pub mod tree;

pub use collect::{Collector, collect_files};
pub use config::{Config, DEFAULT_CONFIG_FILENAME, Document, Source, SourceKind};
pub use error::{AppError, Result};
pub use generate::{generate, render_all};
pub use lang::detect_language;
pub use pattern::FilePatterns;
pub use render::{collect_source, render_document};
pub use tree::{TreeNode, render_tree};
