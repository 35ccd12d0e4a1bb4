//! Generated documents and writing them to disk

use super::profile::TargetPlatform;
use super::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// One generated text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the profile output directory, `/`-separated
    pub relative_path: String,
    /// File contents
    pub contents: String,
    /// Mark the file executable on Unix
    pub executable: bool,
}

impl Document {
    /// Plain text document
    pub fn new(relative_path: impl Into<String>, contents: String) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents,
            executable: false,
        }
    }

    /// Executable script document
    pub fn script(relative_path: impl Into<String>, contents: String) -> Self {
        Self {
            executable: true,
            ..Self::new(relative_path, contents)
        }
    }
}

/// Every document generated for one profile, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    /// Platform the bundle targets
    pub platform: TargetPlatform,
    /// Documents in emission order
    pub documents: Vec<Document>,
}

impl ExportBundle {
    /// Document by relative path
    pub fn document(&self, relative_path: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.relative_path == relative_path)
    }

    /// Write every document under `dir`, overwriting what a previous export
    /// left there. Files written before a failure are left in place.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        let mut written = Vec::with_capacity(self.documents.len());
        for doc in &self.documents {
            let path = doc
                .relative_path
                .split('/')
                .fold(dir.to_path_buf(), |path, part| path.join(part));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, &doc.contents).map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
            if doc.executable {
                mark_executable(&path)?;
            }
            log::debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), ExportError> {
    use std::os::unix::fs::PermissionsExt;

    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut permissions = fs::metadata(path).map_err(io_err)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    fs::set_permissions(path, permissions).map_err(io_err)
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), ExportError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> ExportBundle {
        ExportBundle {
            platform: TargetPlatform::Desktop,
            documents: vec![
                Document::new("src/main.rs", "fn main() {}\n".to_string()),
                Document::script("build.sh", "#!/bin/sh\n".to_string()),
            ],
        }
    }

    #[test]
    fn test_write_creates_nested_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "stale").unwrap();

        let written = bundle().write_to(dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join("src/main.rs")).unwrap(), "fn main() {}\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_scripts_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        bundle().write_to(dir.path()).unwrap();
        let mode = fs::metadata(dir.path().join("build.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_unwritable_target_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let err = bundle().write_to(&blocker).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
