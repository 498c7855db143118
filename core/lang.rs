/// Fence tag for a file path, chosen by its (case-insensitive) extension.
pub fn detect_language(path: &str) -> Option<&'static str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = name.rsplit_once('.')?;
    match ext.to_lowercase().as_str() {
        "go" => Some("go"),
        "php" => Some("php"),
        "twig" => Some("twig"),
        "js" => Some("javascript"),
        "ts" => Some("typescript"),
        "json" => Some("json"),
        "yaml" | "yml" => Some("yaml"),
        "md" => Some("md"),
        _ => None,
    }
}
