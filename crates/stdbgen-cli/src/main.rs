#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;
mod sink;
mod transport;

#[cfg(test)]
mod sink_tests;
#[cfg(test)]
mod test_utils;

use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

use cli::{CheckParams, DumpParams, GenerateParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            init_tracing(m);
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            init_tracing(m);
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            init_tracing(m);
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr so generated output on stdout stays clean.
fn init_tracing(m: &ArgMatches) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(m)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
