pub mod components;
pub mod init;
pub mod migrate;
pub mod render;
pub mod validate;

pub use components::{components, ComponentsArgs};
pub use init::{init, InitArgs};
pub use migrate::{migrate, MigrateArgs};
pub use render::{render, RenderArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{anyhow, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Extensions picked up when a directory is given as input
const INPUT_EXTENSIONS: &[&str] = &["json", "html", "htm", "txt", "md"];

/// Read a content file as migration input.
///
/// `.json` files are parsed as JSON and fall back to their raw text when
/// they don't parse; every other file is raw text. Only an empty file is "no
/// input"; whitespace is content like any other text.
pub(crate) fn read_input(path: &Path) -> Result<Option<Value>> {
    let source = fs::read_to_string(path)?;

    if source.is_empty() {
        return Ok(None);
    }

    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    if is_json {
        match serde_json::from_str::<Value>(&source) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Not valid JSON, treating as text");
            }
        }
    }

    Ok(Some(Value::String(source)))
}

/// Expand an input path into the list of content files to process
pub(crate) fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| INPUT_EXTENSIONS.contains(&ext))
            .unwrap_or(false);
        if path.is_file() && matches {
            files.push(path.to_path_buf());
        }
    }
    files.sort();

    Ok(files)
}

/// Output location for `file`, mirroring its position under `input_root`
pub(crate) fn output_path(file: &Path, input_root: &Path, out_dir: &Path, extension: &str) -> PathBuf {
    let relative = if input_root.is_dir() {
        file.strip_prefix(input_root).unwrap_or(file)
    } else {
        Path::new(file.file_name().unwrap_or(file.as_os_str()))
    };
    out_dir.join(relative).with_extension(extension)
}

pub(crate) fn resolve(cwd: &str, path: &Path) -> PathBuf {
    Path::new(cwd).join(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_kinds() {
        let dir = tempfile::tempdir().unwrap();

        let json_file = dir.path().join("page.json");
        fs::write(&json_file, r#"{"content":[],"root":{},"zones":{}}"#).unwrap();
        assert!(read_input(&json_file).unwrap().unwrap().is_object());

        let broken_json = dir.path().join("broken.json");
        fs::write(&broken_json, "not json").unwrap();
        assert_eq!(
            read_input(&broken_json).unwrap(),
            Some(Value::String("not json".to_string()))
        );

        let html_file = dir.path().join("page.html");
        fs::write(&html_file, "<p>Hi</p>").unwrap();
        assert_eq!(
            read_input(&html_file).unwrap(),
            Some(Value::String("<p>Hi</p>".to_string()))
        );

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "").unwrap();
        assert_eq!(read_input(&empty).unwrap(), None);

        let blank = dir.path().join("blank.txt");
        fs::write(&blank, "  \n").unwrap();
        assert_eq!(
            read_input(&blank).unwrap(),
            Some(Value::String("  \n".to_string()))
        );
    }

    #[test]
    fn test_collect_inputs_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("nested/b.html"), "<b>b</b>").unwrap();
        fs::write(dir.path().join("image.png"), "png").unwrap();

        let files = collect_inputs(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() != "png"));
    }

    #[test]
    fn test_collect_inputs_missing_path() {
        assert!(collect_inputs(Path::new("/definitely/not/here")).is_err());
    }

    #[test]
    fn test_output_path_mirrors_tree() {
        let out = output_path(
            Path::new("/in/nested/page.html"),
            Path::new("/in"),
            Path::new("/out"),
            "json",
        );
        // /in does not exist, so only the file name is kept
        assert_eq!(out, PathBuf::from("/out/page.json"));
    }
}
