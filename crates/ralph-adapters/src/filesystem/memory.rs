//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use ralph_core::{
    application::{ApplicationError, ports::Filesystem},
    error::RalphResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|p| path.starts_with(p))
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories (builder style).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        {
            let mut inner = self.write();
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.insert_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Add an empty directory and its parents (builder style).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.write().insert_dir_all(path.as_ref());
        self
    }

    /// Make every write beneath `path` fail (builder style).
    pub fn with_read_only(self, path: impl AsRef<Path>) -> Self {
        self.write().read_only.insert(path.as_ref().to_path_buf());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// Number of files and directories currently present.
    pub fn entry_count(&self) -> usize {
        let inner = self.read();
        inner.files.len() + inner.directories.len()
    }

    /// Every path in the tree, files and directories, sorted.
    pub fn snapshot(&self) -> Vec<(PathBuf, Option<String>)> {
        let inner = self.read();
        let mut entries: Vec<_> = inner
            .directories
            .iter()
            .map(|d| (d.clone(), None))
            .chain(inner.files.iter().map(|(p, c)| (p.clone(), Some(c.clone()))))
            .collect();
        entries.sort();
        entries
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn denied(path: &Path) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Permission denied".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.read().files.contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> RalphResult<()> {
        let mut inner = self.write();
        if inner.is_read_only(path) {
            return Err(denied(path).into());
        }
        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "A file exists at this path".into(),
            }
            .into());
        }
        inner.insert_dir_all(path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> RalphResult<()> {
        let mut inner = self.write();
        let content = inner.files.get(from).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file".into(),
            }
        })?;
        check_writable(&inner, to)?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> RalphResult<()> {
        let mut inner = self.write();
        check_writable(&inner, path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_files(&self, root: &Path) -> RalphResult<Vec<PathBuf>> {
        let inner = self.read();
        if !inner.directories.contains(root) {
            return Err(ApplicationError::FilesystemError {
                path: root.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }
        // BTreeMap iteration is already sorted.
        Ok(inner
            .files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect())
    }
}

fn check_writable(inner: &MemoryFilesystemInner, path: &Path) -> Result<(), ApplicationError> {
    if inner.is_read_only(path) {
        return Err(denied(path));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            });
        }
    }
    Ok(())
}
