//! JSON document loading and saving through a [`FileSystem`]

use crate::{Error, FileSystem, NormalizedPath, Result};
use serde::{Serialize, de::DeserializeOwned};

/// Loads and saves JSON documents (`app.json`, `package.json`).
///
/// Object key order is preserved on both load and save, so rewriting a file
/// does not shuffle fields the caller never touched.
pub struct ConfigStore<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> ConfigStore<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Load a JSON document.
    ///
    /// Only `.json` files are accepted. Parse failures carry the file path
    /// and the parser's message.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        Self::check_format(path)?;
        let content = self.fs.read_text(path)?;
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            format: "JSON".into(),
            message: e.to_string(),
        })
    }

    /// Render `value` as the text [`save`](Self::save) would write.
    ///
    /// Two-space indentation with a trailing newline, matching what npm
    /// writes for `package.json`.
    pub fn render<T: Serialize>(path: &NormalizedPath, value: &T) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            })?;
        content.push('\n');
        Ok(content)
    }

    /// Save a JSON document.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        Self::check_format(path)?;
        let content = Self::render(path, value)?;
        self.fs.write_text(path, &content)
    }

    fn check_format(path: &NormalizedPath) -> Result<()> {
        let extension = path.extension().unwrap_or("");
        if extension.eq_ignore_ascii_case("json") {
            Ok(())
        } else {
            Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            })
        }
    }
}
