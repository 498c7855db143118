use std::collections::BTreeMap;
use std::fmt::Write;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// One path segment in the rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    children: BTreeMap<String, TreeNode>,
    is_file: bool,
}

impl TreeNode {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Builds the unnamed root holding every path in `paths`.
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut root = Self::default();
        for path in paths {
            root.insert(path.as_ref());
        }
        root
    }

    fn insert(&mut self, rel_path: &str) {
        let segments: Vec<&str> = rel_path.split('/').filter(|s| !s.is_empty()).collect();
        let mut current = self;
        for (i, segment) in segments.iter().enumerate() {
            current = current
                .children
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::named(segment));
            if i == segments.len() - 1 {
                current.is_file = true;
            }
        }
    }

    /// A node with children that was never inserted as a file itself.
    pub fn is_dir(&self) -> bool {
        !self.children.is_empty() && !self.is_file
    }

    /// Directories first, then files; each group in name order.
    pub fn sorted_children(&self) -> Vec<&TreeNode> {
        let (mut dirs, files): (Vec<&TreeNode>, Vec<&TreeNode>) =
            self.children.values().partition(|child| child.is_dir());
        dirs.extend(files);
        dirs
    }

    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool) {
        let (branch, indent) = if is_last {
            (LAST_BRANCH, SPACE_INDENT)
        } else {
            (BRANCH, PIPE_INDENT)
        };
        if self.is_dir() {
            let _ = writeln!(out, "{}{}{}/", prefix, branch, self.name);
            let next_prefix = format!("{}{}", prefix, indent);
            let children = self.sorted_children();
            let last_index = children.len().saturating_sub(1);
            for (i, child) in children.into_iter().enumerate() {
                child.render_into(out, &next_prefix, i == last_index);
            }
        } else {
            let _ = writeln!(out, "{}{}{}", prefix, branch, self.name);
        }
    }
}

/// Renders relative `/`-separated paths as an ASCII tree, one line per node.
pub fn render_tree<S: AsRef<str>>(paths: &[S]) -> String {
    let root = TreeNode::from_paths(paths);
    let mut out = String::new();
    let children = root.sorted_children();
    let last_index = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        child.render_into(&mut out, "", i == last_index);
    }
    out
}
