use std::path::PathBuf;

use stdbgen_compiler::UnrealBackend;
use stdbgen_compiler::backend::unreal::Config;

use super::{CommandError, exit_with};
use crate::sink::{ArtifactSink, DirectorySink, StdoutSink, write_all};
use crate::transport::{SchemaFile, SchemaSource, SpacetimeCli};

pub struct GenerateArgs {
    pub database: String,
    pub schema: Option<PathBuf>,
    pub module: Option<String>,
    pub output: PathBuf,
    pub server: Option<String>,
    pub api_macro: Option<String>,
    pub no_comments: bool,
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn module_name(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.database)
    }

    pub fn config(&self) -> Config {
        let mut config = Config::new().emit_comments(!self.no_comments);
        if let Some(api_macro) = &self.api_macro {
            config = config.api_macro(api_macro);
        }
        config
    }
}

pub fn run(args: GenerateArgs) {
    let source: Box<dyn SchemaSource> = match &args.schema {
        Some(path) => Box::new(SchemaFile::new(path)),
        None => Box::new(SpacetimeCli::new()),
    };

    let result = if args.dry_run {
        execute(&args, source.as_ref(), &mut StdoutSink::stdout())
    } else {
        execute(&args, source.as_ref(), &mut DirectorySink::new(&args.output))
    };

    if let Err(err) = result {
        exit_with(err);
    }
}

/// Fetches, renders and writes. Nothing reaches `sink` unless every file rendered.
pub fn execute(
    args: &GenerateArgs,
    source: &dyn SchemaSource,
    sink: &mut dyn ArtifactSink,
) -> Result<Vec<PathBuf>, CommandError> {
    tracing::info!("fetching module definition for '{}'", args.database);
    let json = source.fetch_raw_module_def(args.server.as_deref(), &args.database)?;

    let backend = UnrealBackend::new(args.config());
    let artifacts = stdbgen_compiler::generate(args.module_name(), &json, &backend)?;

    write_all(sink, &artifacts)?;
    Ok(artifacts.into_iter().map(|artifact| artifact.path).collect())
}
