//! Destinations for generated files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stdbgen_compiler::Artifact;

#[derive(Debug, thiserror::Error)]
#[error("failed to write '{}': {source}", .path.display())]
pub struct SinkError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

pub trait ArtifactSink {
    /// Writes `text` under the logical `path` of a generated file.
    fn write_artifact(&mut self, path: &Path, text: &str) -> io::Result<()>;
}

/// Writes every artifact, stopping at the first failure.
pub fn write_all(sink: &mut dyn ArtifactSink, artifacts: &[Artifact]) -> Result<(), SinkError> {
    for artifact in artifacts {
        sink.write_artifact(&artifact.path, &artifact.contents)
            .map_err(|source| SinkError {
                path: artifact.path.clone(),
                source,
            })?;
        tracing::info!("wrote {}", artifact.path.display());
    }
    Ok(())
}

/// Writes files below a root directory, creating parents as needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn write_artifact(&mut self, path: &Path, text: &str) -> io::Result<()> {
        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(target, text)
    }
}

/// Prints files to a writer with a banner per file, for dry runs.
pub struct StdoutSink<W: Write = io::Stdout> {
    out: W,
}

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ArtifactSink for StdoutSink<W> {
    fn write_artifact(&mut self, path: &Path, text: &str) -> io::Result<()> {
        writeln!(self.out, "// ==> {} <==", path.display())?;
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        writeln!(self.out)
    }
}
