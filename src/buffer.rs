//! The editor buffer being reloaded: its text and the path Maya should read.

use crate::Result;
use anyhow::Context;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    pub path: String,
    pub text: String,
}

impl SourceBuffer {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a saved file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read KL file {}", path.display()))?;
        Ok(Self::new(absolute_path(path)?, text))
    }

    /// Read buffer text from `reader` (an unsaved editor buffer piped on
    /// stdin); `path` only names the file Maya should load.
    pub fn from_reader(path: &Path, mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .with_context(|| format!("read buffer text for {}", path.display()))?;
        Ok(Self::new(absolute_path(path)?, text))
    }
}

/// Maya resolves the path in its own working directory, so hand it an
/// absolute one.
fn absolute_path(path: &Path) -> Result<String> {
    let abs = std::path::absolute(path)
        .with_context(|| format!("resolve absolute path of {}", path.display()))?;
    Ok(abs.display().to_string())
}
