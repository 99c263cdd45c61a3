use crate::{
    common::{
        constants::TEMPLATES_DIR_NAME,
        error::{Error::TempDirCreation, Result},
    },
    config::Config,
    helm::client::HelmClient,
};
use std::io;
use tempfile::TempDir;
use tracing::info;

pub(crate) mod manifests;

/// Runs the whole pipeline: fetch the chart, render it, write the rendered
/// manifests to stdout. Scratch directories are owned here, so they are removed
/// on every return path.
pub(crate) fn inflate(config: &Config) -> Result<()> {
    let client = HelmClient::default();

    let untar_dir = TempDir::new().map_err(|e| TempDirCreation { source: e })?;
    client.fetch(config.repository(), config.chart_name(), untar_dir.path())?;
    info!("Fetched helm chart into: {}", untar_dir.path().display());

    let output_dir = TempDir::new().map_err(|e| TempDirCreation { source: e })?;
    let chart_dir = untar_dir.path().join(config.chart_name());
    client.template(
        chart_dir.as_path(),
        config.values_file(),
        config.value_overrides(),
        output_dir.path(),
    )?;
    info!("Templated helm chart into: {}", output_dir.path().display());

    let templates_dir = output_dir
        .path()
        .join(config.chart_name())
        .join(TEMPLATES_DIR_NAME);
    manifests::write_manifests(templates_dir.as_path(), &mut io::stdout().lock())?;

    Ok(())
}
