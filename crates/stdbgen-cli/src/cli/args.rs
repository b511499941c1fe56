//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Database name or identity to describe (positional).
pub fn database_arg() -> Arg {
    Arg::new("database")
        .value_name("DATABASE")
        .required(true)
        .help("Database name or identity")
}

/// Schema file for commands that only work offline (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema")
        .value_name("SCHEMA")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("SATS-JSON module definition (use '-' for stdin)")
}

/// Schema file instead of calling `spacetime describe` (--schema).
pub fn schema_file_arg() -> Arg {
    Arg::new("schema")
        .long("schema")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the module definition from a file instead of the spacetime CLI ('-' for stdin)")
}

/// Module name used for file and category names (-m/--module).
pub fn module_arg() -> Arg {
    Arg::new("module")
        .short('m')
        .long("module")
        .value_name("NAME")
        .help("Module name for generated files")
}

/// Output directory (-o/--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Directory that receives Public/ and Private/")
}

/// Server passed through to `spacetime` (--server).
pub fn server_arg() -> Arg {
    Arg::new("server")
        .long("server")
        .value_name("SERVER")
        .help("Server nickname or URL for spacetime describe")
}

/// Export macro on generated declarations (--api-macro).
pub fn api_macro_arg() -> Arg {
    Arg::new("api_macro")
        .long("api-macro")
        .value_name("MACRO")
        .help("Export macro for generated types (empty to omit)")
}

/// Omit field comments (--no-comments).
pub fn no_comments_arg() -> Arg {
    Arg::new("no_comments")
        .long("no-comments")
        .action(ArgAction::SetTrue)
        .help("Omit schema comments on generated members")
}

/// Print instead of writing (--dry-run).
pub fn dry_run_arg() -> Arg {
    Arg::new("dry_run")
        .long("dry-run")
        .action(ArgAction::SetTrue)
        .help("Print generated files to stdout instead of writing them")
}

/// Dump output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("layout")
        .value_parser(["layout", "json"])
        .help("Print the header layout or the parsed module")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log more (-v info, -vv debug, -vvv trace)")
}
