//! Fetching the raw SATS-JSON module definition.
//!
//! The compiler only needs a UTF-8 JSON string. It comes either from the
//! `spacetime` executable (`spacetime describe --json`) or from a file.

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::Command;
use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {}: {stderr}", describe_code(.code))]
    ExitStatus {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("module definition is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

/// Anything that can produce a module definition for a database.
pub trait SchemaSource {
    fn fetch_raw_module_def(
        &self,
        server: Option<&str>,
        database: &str,
    ) -> Result<String, TransportError>;
}

/// Runs `spacetime describe --json [--server S] <database>`.
#[derive(Debug, Clone)]
pub struct SpacetimeCli {
    program: PathBuf,
}

impl Default for SpacetimeCli {
    fn default() -> Self {
        Self::new()
    }
}

impl SpacetimeCli {
    pub fn new() -> Self {
        Self::with_program("spacetime")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn describe_args(server: Option<&str>, database: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["describe".into(), "--json".into()];
        if let Some(server) = server {
            args.push("--server".into());
            args.push(server.into());
        }
        args.push(database.into());
        args
    }
}

impl SchemaSource for SpacetimeCli {
    fn fetch_raw_module_def(
        &self,
        server: Option<&str>,
        database: &str,
    ) -> Result<String, TransportError> {
        let program = self.program.display().to_string();
        tracing::debug!("running '{program} describe --json' for '{database}'");

        let output = Command::new(&self.program)
            .args(Self::describe_args(server, database))
            .output()
            .map_err(|source| TransportError::Launch {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TransportError::ExitStatus {
                program,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Reads a module definition from a file, or stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: PathBuf,
}

impl SchemaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read(&self) -> Result<String, TransportError> {
        let io_err = |source| TransportError::Io {
            path: self.path.clone(),
            source,
        };

        let mut bytes = Vec::new();
        if self.path.as_os_str() == "-" {
            io::stdin().read_to_end(&mut bytes).map_err(io_err)?;
        } else {
            bytes = std::fs::read(&self.path).map_err(io_err)?;
        }
        Ok(String::from_utf8(bytes)?)
    }
}

impl SchemaSource for SchemaFile {
    fn fetch_raw_module_def(
        &self,
        _server: Option<&str>,
        _database: &str,
    ) -> Result<String, TransportError> {
        self.read()
    }
}
