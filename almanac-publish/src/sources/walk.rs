//! Directory walking shared by the filesystem sources

use crate::error::PublishError;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect non-empty files under `root` whose extension is in `extensions`,
/// sorted by path.
pub(crate) fn collect_files(
    root: &Path,
    extensions: &[&str],
) -> Result<Vec<PathBuf>, PublishError> {
    let mut files = Vec::new();
    walk_into(root, extensions, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_into(
    dir: &Path,
    extensions: &[&str],
    files: &mut Vec<PathBuf>,
) -> Result<(), PublishError> {
    let entries = fs::read_dir(dir).map_err(|err| PublishError::io(dir, err))?;

    for entry in entries {
        let entry = entry.map_err(|err| PublishError::io(dir, err))?;
        let path = entry.path();
        let metadata = entry.metadata().map_err(|err| PublishError::io(&path, err))?;

        if metadata.is_dir() {
            walk_into(&path, extensions, files)?;
        } else if metadata.len() > 0 && has_extension(&path, extensions) {
            files.push(path);
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_collects_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        for name in ["b.md", "a.md", "nested/c.md", "skip.txt"] {
            let mut file = File::create(dir.path().join(name)).unwrap();
            writeln!(file, "content").unwrap();
        }
        File::create(dir.path().join("empty.md")).unwrap();

        let files = collect_files(dir.path(), &["md"]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.md", "b.md", "nested/c.md"]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = collect_files(Path::new("/definitely/not/here"), &["md"]).unwrap_err();
        assert!(matches!(err, PublishError::Io { .. }));
    }
}
