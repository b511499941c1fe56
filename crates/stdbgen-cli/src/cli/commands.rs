//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("stdbgen")
        .about("Typed client code generation for SpacetimeDB modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Generate Unreal C++ client code for a database.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate Unreal C++ client code for a database")
        .override_usage(
            "\
  stdbgen generate <DATABASE> [-o <DIR>]
  stdbgen generate <DATABASE> --schema <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  stdbgen generate quickstart-chat -o Source/Chat           # via spacetime describe
  stdbgen generate chat --server local                      # against another server
  stdbgen generate chat --schema chat.json --dry-run        # offline, print only
  spacetime describe --json chat | stdbgen generate chat --schema -"#,
        )
        .arg(database_arg())
        .arg(schema_file_arg())
        .arg(module_arg())
        .arg(output_dir_arg())
        .arg(server_arg())
        .arg(api_macro_arg())
        .arg(no_comments_arg())
        .arg(dry_run_arg())
        .arg(verbose_arg())
}

/// Validate a module definition without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a module definition")
        .after_help(
            r#"EXAMPLES:
  stdbgen check chat.json
  spacetime describe --json chat | stdbgen check -"#,
        )
        .arg(schema_path_arg())
        .arg(module_arg())
        .arg(verbose_arg())
}

/// Show the parsed module or its header layout.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the parsed module or its header layout")
        .after_help(
            r#"EXAMPLES:
  stdbgen dump chat.json                 # headers in emission order
  stdbgen dump chat.json --format json   # parsed module definition"#,
        )
        .arg(schema_path_arg())
        .arg(module_arg())
        .arg(format_arg())
        .arg(verbose_arg())
}
