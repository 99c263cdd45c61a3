use crate::{
    common::{
        constants::DEFAULT_TRACING_FILTER,
        error::{
            must,
            Error::{CliArgsParse, TracingSubscriberFilter},
            Result,
        },
    },
    config::Config,
    opts::{
        validators::{validate_helmv3_in_path, validate_values_file},
        CliArgs,
    },
};
use clap::Parser;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod common;
mod config;
mod helm;
mod inflate;
mod opts;

fn main() {
    must(init_logging());

    let opts = must(parse_cli_args());

    // The config is validated before any subprocess is spawned.
    let config = must(load_config(&opts));
    must(validate_helmv3_in_path());

    must(inflate::inflate(&config));
}

/// Initialize logging components -- tracing. Diagnostics go to stderr; stdout
/// carries nothing but the rendered manifests.
fn init_logging() -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_TRACING_FILTER))
        .map_err(|e| TracingSubscriberFilter {
            source: e,
            filter: DEFAULT_TRACING_FILTER.to_string(),
        })?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

fn parse_cli_args() -> Result<CliArgs> {
    Ok(CliArgs::try_parse().map_err(|e| CliArgsParse { source: e })?)
}

/// Loads the config, then validates the parts of it which point into the
/// filesystem.
fn load_config(opts: &CliArgs) -> Result<Config> {
    let config = Config::from_file(opts.config_file().as_path())?;

    if let Some(values_file) = config.values_file() {
        validate_values_file(values_file)?;
    }

    Ok(config)
}
