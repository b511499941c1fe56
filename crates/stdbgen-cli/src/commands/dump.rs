use std::fmt::Write;
use std::path::PathBuf;

use stdbgen_compiler::{UnrealBackend, build_layout, layout_reducers};
use stdbgen_core::RawModuleDef;

use super::{CommandError, exit_with, module_name_for};
use crate::transport::SchemaFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    /// Headers in emission order.
    #[default]
    Layout,
    /// The parsed module definition.
    Json,
}

pub struct DumpArgs {
    pub schema: PathBuf,
    pub module: Option<String>,
    pub format: DumpFormat,
}

pub fn run(args: DumpArgs) {
    match execute(&args) {
        Ok(out) => print!("{}", out),
        Err(err) => exit_with(err),
    }
}

pub fn execute(args: &DumpArgs) -> Result<String, CommandError> {
    let json = SchemaFile::new(&args.schema).read()?;
    let module = RawModuleDef::from_json(&json)?;

    match args.format {
        DumpFormat::Json => {
            let mut out = serde_json::to_string_pretty(&module)?;
            out.push('\n');
            Ok(out)
        }
        DumpFormat::Layout => {
            let module_name = module_name_for(&args.schema, args.module.as_deref());
            dump_layout(&module_name, &module)
        }
    }
}

fn dump_layout(module_name: &str, module: &RawModuleDef) -> Result<String, CommandError> {
    let backend = UnrealBackend::default();
    let layout = build_layout(module_name, &module.typespace, &module.types, &backend)?;
    let reducers = layout_reducers(module_name, &module.reducers, &module.types, &backend)?;

    let mut out = layout.inline.dump()?;
    out.push('\n');
    out.push_str(&layout.exported.dump()?);
    out.push('\n');

    writeln!(out, "reducers {}", layout.names.reducers).ok();
    for stub in &reducers {
        let params: Vec<_> = stub
            .params
            .iter()
            .map(|param| format!("{}: {}", param.name, param.ty))
            .collect();
        writeln!(out, "  {}({})  // {}", stub.name, params.join(", "), stub.raw_name).ok();
    }
    Ok(out)
}
