//! The filesystem capability used by every resolution step.

use crate::{Error, NormalizedPath, Result, io};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Read/write access to files, injected into everything that probes the disk.
///
/// Absence is not an error for [`exists`](FileSystem::exists) and
/// [`is_file`](FileSystem::is_file); only reads and writes of specific
/// files can fail.
pub trait FileSystem {
    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &NormalizedPath) -> bool;

    /// Whether a regular file exists at `path`.
    fn is_file(&self, path: &NormalizedPath) -> bool;

    /// Read the whole file as UTF-8 text.
    fn read_text(&self, path: &NormalizedPath) -> Result<String>;

    /// Read the raw bytes of a file.
    fn read_bytes(&self, path: &NormalizedPath) -> Result<Vec<u8>>;

    /// Replace the file's content, creating parent directories as needed.
    fn write_text(&self, path: &NormalizedPath, content: &str) -> Result<()>;

    /// Delete a file.
    fn remove_file(&self, path: &NormalizedPath) -> Result<()>;

    /// Anchor a relative `path` at this filesystem's working directory.
    ///
    /// Absolute paths are returned unchanged.
    fn absolute(&self, path: &NormalizedPath) -> Result<NormalizedPath>;
}

/// The real disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }

    /// The process working directory, with symlinks and `\\?\` prefixes
    /// resolved the way users expect to see them.
    pub fn current_dir() -> Result<NormalizedPath> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        let canonical = dunce::canonicalize(&cwd).map_err(|e| Error::io(&cwd, e))?;
        Ok(NormalizedPath::new(canonical))
    }
}

impl FileSystem for RealFs {
    fn exists(&self, path: &NormalizedPath) -> bool {
        path.to_native().exists()
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        path.to_native().is_file()
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn read_bytes(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        io::read_bytes(path)
    }

    fn write_text(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        io::write_text(path, content)
    }

    fn remove_file(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        std::fs::remove_file(&native).map_err(|e| Error::io(&native, e))
    }

    fn absolute(&self, path: &NormalizedPath) -> Result<NormalizedPath> {
        if path.is_absolute() {
            return Ok(path.clone());
        }
        Ok(Self::current_dir()?.resolve(path.as_str()))
    }
}

/// An in-memory filesystem for hermetic tests.
///
/// Only files are stored; a directory exists as long as some file lives
/// beneath it. The working directory is `/`, so relative paths are taken
/// relative to it.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<NormalizedPath, String>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem pre-populated with `files`.
    pub fn with_files<P, C>(files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<NormalizedPath>,
        C: Into<String>,
    {
        let fs = Self::new();
        fs.set_files(files);
        fs
    }

    /// Replace the entire content of the filesystem.
    pub fn set_files<P, C>(&self, files: impl IntoIterator<Item = (P, C)>)
    where
        P: Into<NormalizedPath>,
        C: Into<String>,
    {
        let mut guard = self.lock();
        guard.clear();
        for (path, content) in files {
            guard.insert(Self::key(&path.into()), content.into());
        }
    }

    /// Snapshot of every stored file.
    pub fn files(&self) -> BTreeMap<NormalizedPath, String> {
        self.lock().clone()
    }

    fn key(path: &NormalizedPath) -> NormalizedPath {
        NormalizedPath::new("/").resolve(path.as_str())
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<NormalizedPath, String>> {
        // A poisoned map is still a consistent map; tests keep going.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &NormalizedPath) -> bool {
        let key = Self::key(path);
        let dir_prefix = format!("{}/", key.as_str().trim_end_matches('/'));
        self.lock()
            .keys()
            .any(|file| *file == key || file.as_str().starts_with(&dir_prefix))
    }

    fn is_file(&self, path: &NormalizedPath) -> bool {
        self.lock().contains_key(&Self::key(path))
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        let key = Self::key(path);
        self.lock()
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::not_found(key.to_native()))
    }

    fn read_bytes(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        self.read_text(path).map(String::into_bytes)
    }

    fn write_text(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        self.lock().insert(Self::key(path), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &NormalizedPath) -> Result<()> {
        let key = Self::key(path);
        match self.lock().remove(&key) {
            Some(_) => Ok(()),
            None => Err(Error::not_found(key.to_native())),
        }
    }

    fn absolute(&self, path: &NormalizedPath) -> Result<NormalizedPath> {
        Ok(Self::key(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_directories_are_implied_by_files() {
        let fs = MemoryFs::with_files([("/project/android/build.gradle", "")]);
        assert!(fs.exists(&"/project/android".into()));
        assert!(fs.exists(&"/project".into()));
        assert!(fs.exists(&"/".into()));
        assert!(!fs.is_file(&"/project/android".into()));
        assert!(!fs.exists(&"/project/andr".into()));
    }

    #[test]
    fn memory_fs_relative_paths_are_rooted() {
        let fs = MemoryFs::with_files([("package.json", "{}")]);
        assert!(fs.is_file(&"/package.json".into()));
        assert_eq!(fs.read_text(&"./package.json".into()).unwrap(), "{}");
    }

    #[test]
    fn memory_fs_missing_file_is_not_found() {
        let fs = MemoryFs::new();
        let err = fs.read_text(&"/nope.json".into()).unwrap_err();
        assert!(err.is_not_found());
        assert!(fs.remove_file(&"/nope.json".into()).unwrap_err().is_not_found());
    }

    #[test]
    fn memory_fs_working_directory_is_root() {
        let fs = MemoryFs::new();
        assert_eq!(fs.absolute(&".".into()).unwrap(), NormalizedPath::new("/"));
        assert_eq!(
            fs.absolute(&"android/app".into()).unwrap(),
            NormalizedPath::new("/android/app")
        );
        assert_eq!(
            fs.absolute(&"/project".into()).unwrap(),
            NormalizedPath::new("/project")
        );
    }

    #[test]
    fn memory_fs_write_then_remove() {
        let fs = MemoryFs::new();
        let path = NormalizedPath::new("/a/b.txt");
        fs.write_text(&path, "hello").unwrap();
        assert_eq!(fs.read_text(&path).unwrap(), "hello");
        fs.remove_file(&path).unwrap();
        assert!(!fs.exists(&path));
    }
}
