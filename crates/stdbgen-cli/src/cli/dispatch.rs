//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub database: String,
    pub schema: Option<PathBuf>,
    pub module: Option<String>,
    pub output: PathBuf,
    pub server: Option<String>,
    pub api_macro: Option<String>,
    pub no_comments: bool,
    pub dry_run: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            database: m.get_one::<String>("database").cloned().unwrap_or_default(),
            schema: m.get_one::<PathBuf>("schema").cloned(),
            module: m.get_one::<String>("module").cloned(),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            server: m.get_one::<String>("server").cloned(),
            api_macro: m.get_one::<String>("api_macro").cloned(),
            no_comments: m.get_flag("no_comments"),
            dry_run: m.get_flag("dry_run"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            database: p.database,
            schema: p.schema,
            module: p.module,
            output: p.output,
            server: p.server,
            api_macro: p.api_macro,
            no_comments: p.no_comments,
            dry_run: p.dry_run,
        }
    }
}

pub struct CheckParams {
    pub schema: PathBuf,
    pub module: Option<String>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: schema_path(m),
            module: m.get_one::<String>("module").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema: p.schema,
            module: p.module,
        }
    }
}

pub struct DumpParams {
    pub schema: PathBuf,
    pub module: Option<String>,
    pub format: DumpFormat,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: schema_path(m),
            module: m.get_one::<String>("module").cloned(),
            format: parse_format(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            schema: p.schema,
            module: p.module,
            format: p.format,
        }
    }
}

/// Log filter for the `-v` count. `RUST_LOG` takes precedence when set.
pub fn log_level(m: &ArgMatches) -> &'static str {
    match m.get_count("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_format(m: &ArgMatches) -> DumpFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => DumpFormat::Json,
        _ => DumpFormat::Layout,
    }
}
