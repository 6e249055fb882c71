//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Paths are cleaned lexically on construction: `.` segments and empty
/// segments are dropped and `..` pops the previous segment where there is
/// one. No filesystem access is involved, so a `NormalizedPath` can name
/// files that only exist in an in-memory filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner: clean(&raw) }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path is rooted (`/...` or a drive such as `C:/...`).
    pub fn is_absolute(&self) -> bool {
        let (prefix, _) = split_prefix(&self.inner);
        prefix.ends_with('/')
    }

    /// Join this path with a segment, which may itself contain separators.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let segment = segment.as_ref().to_string_lossy().replace('\\', "/");
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Resolve `path` against this directory.
    ///
    /// Absolute inputs are returned as-is (normalized); relative inputs are
    /// joined onto `self`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Self {
        let other = Self::new(path);
        if other.is_absolute() {
            other
        } else {
            self.join(other.as_str())
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let (prefix, body) = split_prefix(&self.inner);
        if body.is_empty() || matches!(self.file_name(), None | Some("..")) {
            return None;
        }
        let inner = match body.rfind('/') {
            Some(idx) => format!("{prefix}{}", &body[..idx]),
            None if prefix.is_empty() => ".".to_string(),
            None => prefix.to_string(),
        };
        Some(Self { inner })
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let (_, body) = split_prefix(&self.inner);
        match body.rsplit('/').next() {
            Some("") | Some(".") | None => None,
            Some(name) => Some(name),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Express this path relative to `base`, using `..` to climb out of it.
    ///
    /// Returns an empty string when both paths are equal. When the two paths
    /// do not share a root (e.g. different drives), `self` is returned.
    pub fn relative_to(&self, base: &NormalizedPath) -> String {
        let (to_prefix, to_body) = split_prefix(&self.inner);
        let (from_prefix, from_body) = split_prefix(&base.inner);
        if to_prefix != from_prefix {
            return self.inner.clone();
        }

        let to = segments(to_body);
        let from = segments(from_body);
        let common = to.iter().zip(&from).take_while(|(a, b)| a == b).count();

        let mut parts = vec![".."; from.len() - common];
        parts.extend_from_slice(&to[common..]);
        parts.join("/")
    }
}

/// Split a slash-normalized path into its root prefix and the rest.
fn split_prefix(s: &str) -> (&str, &str) {
    let bytes = s.as_bytes();
    if s.starts_with('/') {
        (&s[..1], &s[1..])
    } else if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let end = if bytes.get(2) == Some(&b'/') { 3 } else { 2 };
        (&s[..end], &s[end..])
    } else {
        ("", s)
    }
}

fn segments(body: &str) -> Vec<&str> {
    body.split('/').filter(|s| !s.is_empty() && *s != ".").collect()
}

/// Clean to a fixed point. Collapsing `..` can bring a drive-like segment
/// such as `a:` to the front, where it is then read as a prefix.
fn clean(raw: &str) -> String {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(raw: &str) -> String {
    let (prefix, rest) = split_prefix(raw);
    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above a root stays at the root
                _ if prefix.is_empty() => parts.push(".."),
                _ => {}
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if prefix.is_empty() && body.is_empty() {
        ".".to_string()
    } else {
        format!("{prefix}{body}")
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
