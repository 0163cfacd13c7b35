use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create `path` (and any missing ancestors) unless it already exists.
///
/// Returns `true` only when a directory was actually created.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(path).with_context(|| format!("create {}", path.display()))?;
    tracing::info!("Directory {} created!", path.display());
    Ok(true)
}

/// Overwrite `path` with `contents`. The parent directory must already exist.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("File {} created!", path.display());
    Ok(())
}

/// Render `path` relative to the project `root` for log lines.
pub fn relative_to_root(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

/// Cut captured tool output down to at most `limit` bytes without splitting a
/// UTF-8 sequence.
pub fn clip_output(text: &str, limit: usize) -> &str {
    let mut end = text.len().min(limit);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_once() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("server").join("http").join("controllers");

        assert!(ensure_dir(&target).expect("first create"));
        assert!(!ensure_dir(&target).expect("second create"));
        assert!(target.is_dir());
    }

    #[test]
    fn write_file_overwrites_existing_contents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("vite.config.js");
        std::fs::write(&target, "export default {};\n").expect("seed file");

        write_file(&target, "replaced\n").expect("write");

        assert_eq!(
            std::fs::read_to_string(&target).expect("read back"),
            "replaced\n"
        );
    }

    #[test]
    fn write_file_requires_existing_parent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("missing").join("index.css");

        let err = write_file(&target, "body {}\n").expect_err("parent is missing");
        assert!(err.to_string().starts_with("write "));
        assert!(!target.exists());
    }

    #[test]
    fn relative_to_root_falls_back_to_full_path() {
        let root = Path::new("/tmp/demo");
        let inside = root.join("client").join("vite.config.js");
        let outside = Path::new("/etc/hosts");
        assert_eq!(relative_to_root(&inside, root), "client/vite.config.js");
        assert_eq!(relative_to_root(outside, root), "/etc/hosts");
    }

    #[test]
    fn clip_output_backs_off_to_a_char_boundary() {
        assert_eq!(clip_output("héllo", 2), "h");
        assert_eq!(clip_output("héllo", 3), "hé");
        assert_eq!(clip_output("short", 64), "short");
        assert_eq!(clip_output("", 0), "");
    }
}
