use clap::Parser;
use std::path::PathBuf;

pub(crate) mod validators;

/// Renders a packaged helm chart into deployment manifests on stdout, as
/// described by a YAML config file.
#[derive(Parser)]
pub(crate) struct CliArgs {
    /// Path to the YAML config file naming the chart, its repository, and any
    /// value overrides.
    config_file: PathBuf,
}

impl CliArgs {
    pub(crate) fn config_file(&self) -> PathBuf {
        self.config_file.clone()
    }
}
