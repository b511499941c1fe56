use std::path::PathBuf;

use stdbgen_compiler::{UnrealBackend, generate_module};
use stdbgen_core::RawModuleDef;

use super::{CommandError, exit_with, module_name_for};
use crate::transport::SchemaFile;

pub struct CheckArgs {
    pub schema: PathBuf,
    pub module: Option<String>,
}

pub fn run(args: CheckArgs) {
    if let Err(err) = execute(&args) {
        exit_with(err);
    }

    // Silent on success (like cargo check)
}

/// Runs the whole pipeline and discards the output.
pub fn execute(args: &CheckArgs) -> Result<(), CommandError> {
    let json = SchemaFile::new(&args.schema).read()?;
    let module = RawModuleDef::from_json(&json)?;
    let module_name = module_name_for(&args.schema, args.module.as_deref());

    generate_module(&module_name, &module, &UnrealBackend::default())?;
    Ok(())
}
