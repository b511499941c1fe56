pub mod check;
pub mod dump;
pub mod generate;

#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod generate_tests;

use std::path::Path;

use crate::sink::SinkError;
use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Generate(#[from] stdbgen_compiler::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("failed to serialize module definition: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<stdbgen_core::ParseError> for CommandError {
    fn from(err: stdbgen_core::ParseError) -> Self {
        Self::Generate(err.into())
    }
}

impl From<stdbgen_compiler::LayoutError> for CommandError {
    fn from(err: stdbgen_compiler::LayoutError) -> Self {
        Self::Generate(err.into())
    }
}

/// Module name for a schema file: explicit, else the file stem.
pub fn module_name_for(schema: &Path, module: Option<&str>) -> String {
    if let Some(module) = module {
        return module.to_string();
    }
    if schema.as_os_str() == "-" {
        return "module".to_string();
    }
    schema
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "module".to_string())
}

pub fn exit_with(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
