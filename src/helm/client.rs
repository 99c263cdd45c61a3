use crate::{
    common::{
        constants::HELM_COMMAND,
        error::{
            Error::{HelmCommand, HelmCommandFailed},
            Result,
        },
    },
    config::ValueOverride,
};
use std::{path::Path, process::Command};
use tracing::info;

pub(crate) struct HelmClient {
    command: String,
}

impl HelmClient {
    pub(crate) fn default() -> Self {
        Self {
            command: HELM_COMMAND.to_string(),
        }
    }

    #[cfg(test)]
    fn with_command(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }

    /// Downloads the chart from the repository and unpacks it into `untar_dir`.
    /// The chart lands at `<untar_dir>/<chart_name>`.
    pub(crate) fn fetch(
        &self,
        repository: &str,
        chart_name: &str,
        untar_dir: &Path,
    ) -> Result<()> {
        self.run(fetch_args(repository, chart_name, untar_dir))
    }

    /// Renders the unpacked chart into `output_dir`. Rendered manifests land at
    /// `<output_dir>/<chart_name>/templates`.
    pub(crate) fn template(
        &self,
        chart_dir: &Path,
        values_file: Option<&Path>,
        value_overrides: &[ValueOverride],
        output_dir: &Path,
    ) -> Result<()> {
        self.run(template_args(
            chart_dir,
            values_file,
            value_overrides,
            output_dir,
        ))
    }

    fn run(&self, args: Vec<String>) -> Result<()> {
        let output = Command::new(self.command.as_str())
            .args(args.clone())
            .output()
            .map_err(|e| HelmCommand {
                source: e,
                command: self.command.clone(),
                args: args.clone(),
            })?;

        // Subprocess output is logged before the exit status is inspected.
        info!("{}", String::from_utf8_lossy(output.stdout.as_slice()));
        info!("{}", String::from_utf8_lossy(output.stderr.as_slice()));

        if !output.status.success() {
            return Err(HelmCommandFailed {
                command: self.command.clone(),
                args,
                status: output.status,
            });
        }

        Ok(())
    }
}

fn fetch_args(repository: &str, chart_name: &str, untar_dir: &Path) -> Vec<String> {
    vec![
        "fetch".to_string(),
        "--untar".to_string(),
        "--untardir".to_string(),
        untar_dir.to_string_lossy().to_string(),
        format!("{}/{}", repository, chart_name),
    ]
}

fn template_args(
    chart_dir: &Path,
    values_file: Option<&Path>,
    value_overrides: &[ValueOverride],
    output_dir: &Path,
) -> Vec<String> {
    let mut args: Vec<String> = vec!["template".to_string()];

    if let Some(values_file) = values_file {
        args.push("--values".to_string());
        args.push(values_file.to_string_lossy().to_string());
    }

    let set_arg = set_argument(value_overrides);
    if !set_arg.is_empty() {
        args.push("--set".to_string());
        args.push(set_arg);
    }

    args.push(format!("--output-dir={}", output_dir.display()));
    args.push(chart_dir.to_string_lossy().to_string());

    args
}

/// Joins override pairs into helm's `--set` syntax, preserving input order.
fn set_argument(value_overrides: &[ValueOverride]) -> String {
    value_overrides
        .iter()
        .map(|value_override| format!("{}={}", value_override.key(), value_override.val()))
        .collect::<Vec<String>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    #[test]
    fn set_argument_preserves_input_order() {
        let overrides = vec![
            ValueOverride::new("a", "1"),
            ValueOverride::new("b", "2"),
        ];
        assert_eq!(set_argument(overrides.as_slice()), "a=1,b=2");
    }

    #[test]
    fn set_argument_keeps_duplicate_keys() {
        let overrides = vec![
            ValueOverride::new("a", "1"),
            ValueOverride::new("a", "2"),
        ];
        assert_eq!(set_argument(overrides.as_slice()), "a=1,a=2");
    }

    #[test]
    fn set_argument_is_empty_without_overrides() {
        assert_eq!(set_argument(&[]), "");
    }

    #[test]
    fn fetch_args_shape() {
        let args = fetch_args("stable", "wordpress", Path::new("/tmp/scratch"));
        assert_eq!(
            args,
            vec![
                "fetch",
                "--untar",
                "--untardir",
                "/tmp/scratch",
                "stable/wordpress"
            ]
        );
    }

    #[test]
    fn template_args_with_values_and_overrides() {
        let overrides = vec![
            ValueOverride::new("image.tag", "6.1"),
            ValueOverride::new("replicaCount", "3"),
        ];
        let args = template_args(
            Path::new("/tmp/scratch/wordpress"),
            Some(Path::new("/etc/overrides/values.yaml")),
            overrides.as_slice(),
            Path::new("/tmp/manifests"),
        );
        assert_eq!(
            args,
            vec![
                "template",
                "--values",
                "/etc/overrides/values.yaml",
                "--set",
                "image.tag=6.1,replicaCount=3",
                "--output-dir=/tmp/manifests",
                "/tmp/scratch/wordpress"
            ]
        );
    }

    #[test]
    fn template_args_without_values_or_overrides() {
        let args = template_args(
            Path::new("/tmp/scratch/wordpress"),
            None,
            &[],
            Path::new("/tmp/manifests"),
        );
        assert_eq!(
            args,
            vec![
                "template",
                "--output-dir=/tmp/manifests",
                "/tmp/scratch/wordpress"
            ]
        );
    }

    #[test]
    fn unlaunchable_command_maps_to_helm_command_error() {
        let client = HelmClient::with_command("chart-inflator-test-no-such-binary");
        let scratch = tempfile::TempDir::new().expect("tempdir");
        let error = client
            .fetch("stable", "wordpress", scratch.path())
            .unwrap_err();
        assert!(matches!(error, Error::HelmCommand { .. }), "got: {error}");
    }

    #[test]
    fn non_zero_exit_maps_to_helm_command_failed() {
        let client = HelmClient::with_command("false");
        let scratch = tempfile::TempDir::new().expect("tempdir");
        let error = client
            .fetch("stable", "wordpress", scratch.path())
            .unwrap_err();
        assert!(
            matches!(error, Error::HelmCommandFailed { .. }),
            "got: {error}"
        );
    }
}
