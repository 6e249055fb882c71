use rnta_fs::{FileSystem, NormalizedPath, RealFs, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested/dir/test.txt"));

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing_without_leftovers() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "original").unwrap();

    io::write_atomic(&NormalizedPath::new(&file_path), b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "temp file should have been renamed away");
}

#[test]
fn test_read_text_nonexistent_file() {
    let result = io::read_text(&NormalizedPath::new("/nonexistent/file.txt"));
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_real_fs_round_trip() {
    let temp = TempDir::new().unwrap();
    let real = RealFs::new();
    let dir = NormalizedPath::new(temp.path());
    let file = dir.join("windows/App.sln");

    assert!(!real.exists(&file));
    real.write_text(&file, "sln").unwrap();
    assert!(real.is_file(&file));
    assert!(real.exists(&dir.join("windows")));
    assert!(!real.is_file(&dir.join("windows")));
    assert_eq!(real.read_text(&file).unwrap(), "sln");

    real.remove_file(&file).unwrap();
    assert!(!real.exists(&file));
}

#[test]
fn test_current_dir_is_absolute() {
    assert!(RealFs::current_dir().unwrap().is_absolute());
}
