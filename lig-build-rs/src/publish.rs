//! Copy the deployable files of the site into a clean output directory.

use crate::error::PublishError;
use std::path::{Component, Path, PathBuf};

/// Files and folders required for static hosting.
pub const DEFAULT_STATIC_ENTRIES: &[&str] = &[
    "index.html",
    "thank-you.html",
    "privacy.html",
    "terms.html",
    "assets",
    "css",
    "js",
];

pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Resolve `path` against the working directory and fold away `.` and `..`
/// without touching the filesystem.
fn normalize(path: &Path) -> Result<PathBuf, PublishError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| PublishError::Output {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Reject an output directory whose removal would delete site sources.
fn check_output<S: AsRef<str>>(
    root: &Path,
    output: &Path,
    entries: &[S],
) -> Result<(), PublishError> {
    let unsafe_output = |reason: String| PublishError::UnsafeOutput {
        path: output.to_path_buf(),
        reason,
    };

    if output == root {
        return Err(unsafe_output("is the site root".to_string()));
    }
    if root.starts_with(output) {
        return Err(unsafe_output("contains the site root".to_string()));
    }
    for entry in entries {
        let entry_path = normalize(&root.join(entry.as_ref()))?;
        if output.starts_with(&entry_path) {
            return Err(unsafe_output(format!(
                "lies within the published entry `{}`",
                entry.as_ref()
            )));
        }
    }
    Ok(())
}

/// Recreate `output` (relative to `root` unless absolute) and copy each
/// entry into it, recursing into directories.
///
/// Every entry is checked before the output directory is removed, so a
/// missing entry leaves a previous publish in place. The output may not be
/// the root, an ancestor of it, or a path at or inside an entry.
pub fn publish_static<S: AsRef<str>>(
    root: &Path,
    output: &Path,
    entries: &[S],
) -> Result<PathBuf, PublishError> {
    let root = normalize(root)?;
    let output = normalize(&root.join(output))?;
    check_output(&root, &output, entries)?;

    for entry in entries {
        let source = root.join(entry.as_ref());
        if !source.exists() {
            return Err(PublishError::MissingEntry(source));
        }
    }

    if output.exists() {
        std::fs::remove_dir_all(&output).map_err(|source| PublishError::Output {
            path: output.clone(),
            source,
        })?;
    }
    std::fs::create_dir_all(&output).map_err(|source| PublishError::Output {
        path: output.clone(),
        source,
    })?;

    for entry in entries {
        let source = root.join(entry.as_ref());
        let destination = output.join(entry.as_ref());
        let copied = if source.is_dir() {
            dircpy::copy_dir(&source, &destination)
        } else {
            std::fs::copy(&source, &destination).map(|_| ())
        };
        copied.map_err(|err| PublishError::Copy {
            path: source.clone(),
            source: err,
        })?;
        log::debug!("copied {}", entry.as_ref());
    }

    log::info!("published {} entries to {}", entries.len(), output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;

    #[test]
    fn test_copies_files_and_directories() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("index.html"), "<html></html>").unwrap();
        fs::create_dir_all(root.path().join("assets/branding")).unwrap();
        fs::write(root.path().join("assets/branding/icon.jpg"), [0xFF, 0xD8]).unwrap();

        let output = publish_static(root.path(), Path::new("dist"), &["index.html", "assets"])
            .unwrap();

        assert_eq!(output, root.path().join("dist"));
        assert_eq!(
            fs::read_to_string(output.join("index.html")).unwrap(),
            "<html></html>"
        );
        assert_eq!(
            fs::read(output.join("assets/branding/icon.jpg")).unwrap(),
            vec![0xFF, 0xD8]
        );
    }

    #[test]
    fn test_stale_output_is_removed() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("index.html"), "new").unwrap();
        fs::create_dir_all(root.path().join("public")).unwrap();
        fs::write(root.path().join("public/old.html"), "old").unwrap();

        let output = publish_static(root.path(), Path::new("public"), &["index.html"]).unwrap();
        assert!(!output.join("old.html").exists());
        assert!(output.join("index.html").exists());
    }

    #[rstest]
    #[case::root(".")]
    #[case::root_spelled_out("public/..")]
    #[case::ancestor("..")]
    #[case::entry("assets")]
    #[case::inside_entry("assets/branding/out")]
    fn test_output_overlapping_sources_is_rejected(#[case] output: &str) {
        let root = tempfile::tempdir().unwrap();
        let site = root.path().join("site");
        fs::create_dir_all(site.join("assets/branding")).unwrap();
        fs::write(site.join("assets/branding/icon.jpg"), [0xFF, 0xD8]).unwrap();
        fs::write(site.join("index.html"), "<html></html>").unwrap();
        fs::write(site.join("notes.txt"), "keep me").unwrap();

        let err = publish_static(&site, Path::new(output), &["index.html", "assets"]).unwrap_err();
        assert!(matches!(err, PublishError::UnsafeOutput { .. }), "{err}");

        // Nothing was deleted
        assert!(site.join("notes.txt").exists());
        assert!(site.join("index.html").exists());
        assert!(site.join("assets/branding/icon.jpg").exists());
    }

    #[test]
    fn test_output_with_entry_prefix_name_is_allowed() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("assets")).unwrap();
        fs::write(root.path().join("assets/a.txt"), "a").unwrap();

        // Component-wise comparison: `assets-public` is not inside `assets`
        let output =
            publish_static(root.path(), Path::new("assets-public"), &["assets"]).unwrap();
        assert!(output.join("assets/a.txt").exists());
        assert!(root.path().join("assets/a.txt").exists());
    }

    #[test]
    fn test_missing_entry_keeps_previous_output() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("index.html"), "x").unwrap();
        fs::create_dir_all(root.path().join("public")).unwrap();
        fs::write(root.path().join("public/index.html"), "previous").unwrap();

        let err = publish_static(root.path(), Path::new("public"), &["index.html", "terms.html"])
            .unwrap_err();
        match err {
            PublishError::MissingEntry(path) => assert_eq!(path, root.path().join("terms.html")),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            fs::read_to_string(root.path().join("public/index.html")).unwrap(),
            "previous"
        );
    }
}
