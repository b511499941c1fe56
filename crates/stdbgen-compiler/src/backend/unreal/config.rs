//! Configuration for Unreal emission.

use std::path::PathBuf;

/// Configuration for Unreal emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Export macro placed before generated struct and class names
    pub(crate) api_macro: String,
    /// One level of indentation
    pub(crate) indent: String,
    /// Directory for headers, relative to the output root
    pub(crate) public_dir: PathBuf,
    /// Directory for sources, relative to the output root
    pub(crate) private_dir: PathBuf,
    /// Whether to emit `/* ... */` comments
    pub(crate) emit_comments: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_macro: "SPACETIMEDBRUNTIME_API".to_string(),
            indent: "    ".to_string(),
            public_dir: PathBuf::from("Public/Generated"),
            private_dir: PathBuf::from("Private/Generated"),
            emit_comments: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the export macro. An empty macro is omitted.
    pub fn api_macro(mut self, value: impl Into<String>) -> Self {
        self.api_macro = value.into();
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set the header directory.
    pub fn public_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.public_dir = value.into();
        self
    }

    /// Set the source directory.
    pub fn private_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.private_dir = value.into();
        self
    }

    /// Set whether to emit comments.
    pub fn emit_comments(mut self, value: bool) -> Self {
        self.emit_comments = value;
        self
    }
}
