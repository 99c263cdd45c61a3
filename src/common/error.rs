use snafu::Snafu;
use std::{path::PathBuf, process::ExitStatus};

/// For use with multiple fallible operations which may fail for different reasons, but are
/// defined within the same scope and must return to the outer scope (calling scope) using
/// the try operator -- '?'.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub(crate) enum Error {
    /// Error for when cli args are parsed.
    #[snafu(display("Failed to parse cli args: {}", source))]
    CliArgsParse { source: clap::error::Error },

    /// Error for use when parsing invalid tracing-subscriber filter directive.
    #[snafu(display(
        "Failed to create tracing-subscriber filter with directive {}: {}",
        filter,
        source
    ))]
    TracingSubscriberFilter {
        source: tracing_subscriber::filter::ParseError,
        filter: String,
    },

    /// Error for when a helm command fails to launch.
    #[snafu(display(
        "Failed to run helm command, command: {}, args: {:?}, command_error: {}",
        command,
        args,
        source
    ))]
    HelmCommand {
        source: std::io::Error,
        command: String,
        args: Vec<String>,
    },

    /// Error for when a helm command exits with a non-zero status.
    #[snafu(display(
        "helm command returned a failure, command: {}, args: {:?}, exit status: {}",
        command,
        args,
        status
    ))]
    HelmCommandFailed {
        command: String,
        args: Vec<String>,
        status: ExitStatus,
    },

    /// Error for when helm v3.x.y is not present in $PATH.
    #[snafu(display("helm version {} does not start with 'v3.x.y'", String::from_utf8_lossy(version)))]
    HelmVersion { version: Vec<u8> },

    /// Error for when regular expression parsing or compilation fails.
    #[snafu(display("Failed to compile regex {}: {}", expression, source))]
    RegexCompile {
        source: regex::Error,
        expression: String,
    },

    #[snafu(display("Failed to open file {}: {}", filepath.display(), source))]
    OpeningFile {
        source: std::io::Error,
        filepath: PathBuf,
    },

    #[snafu(display("Failed to parse YAML at {}: {}", filepath.display(), source))]
    YamlParseFromFile {
        source: serde_yaml::Error,
        filepath: PathBuf,
    },

    /// Error for when the config is missing its chart name.
    #[snafu(display("chartName missing or empty in config file {}", filepath.display()))]
    EmptyChartName { filepath: PathBuf },

    #[snafu(display("Failed to validate filepath {}: {}", path.display(), source))]
    ValidateFilePath {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("{} is not a file", path.display()))]
    NotAFile { path: PathBuf },

    #[snafu(display("Failed to create temporary directory: {}", source))]
    TempDirCreation { source: std::io::Error },

    #[snafu(display("Failed to list directory {}: {}", path.display(), source))]
    ReadingDirectory {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Failed to read file {}: {}", filepath.display(), source))]
    ReadingFile {
        source: std::io::Error,
        filepath: PathBuf,
    },

    #[snafu(display("Failed to write manifest {} to output: {}", filepath.display(), source))]
    WritingManifest {
        source: std::io::Error,
        filepath: PathBuf,
    },
}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn must<T>(output: Result<T>) -> T {
    match output {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(%error, "Failed to inflate chart");
            std::process::exit(1);
        }
    }
}
