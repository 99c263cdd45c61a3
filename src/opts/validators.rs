use crate::common::{
    constants::HELM_COMMAND,
    error::{
        Error::{HelmCommand, HelmVersion, NotAFile, RegexCompile, ValidateFilePath},
        Result,
    },
};
use regex::bytes::Regex;
use std::{fs, path::Path, process::Command};

/// Checks that a helm v3.x.y binary is reachable through $PATH.
pub(crate) fn validate_helmv3_in_path() -> Result<()> {
    let args: Vec<String> = vec!["version".to_string(), "--short".to_string()];
    let output = Command::new(HELM_COMMAND)
        .args(args.clone())
        .output()
        .map_err(|e| HelmCommand {
            source: e,
            command: HELM_COMMAND.to_string(),
            args,
        })?;

    let output = output.stdout;
    let regex: &str = r"^(v3\.[0-9]+\.[0-9])";
    if !Regex::new(regex)
        .map_err(|e| RegexCompile {
            source: e,
            expression: regex.to_string(),
        })?
        .is_match(output.as_slice())
    {
        return Err(HelmVersion { version: output });
    }

    Ok(())
}

/// The configured values file must exist and be a regular file before helm is
/// asked to consume it.
pub(crate) fn validate_values_file(path: &Path) -> Result<()> {
    let is_file = fs::metadata(path)
        .map(|metadata| metadata.is_file())
        .map_err(|e| ValidateFilePath {
            source: e,
            path: path.to_path_buf(),
        })?;

    if !is_file {
        return Err(NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    #[test]
    fn existing_file_passes_validation() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let filepath = dir.path().join("values.yaml");
        fs::write(filepath.as_path(), b"replicaCount: 3\n").expect("write");

        validate_values_file(filepath.as_path()).expect("valid file");
    }

    #[test]
    fn missing_file_fails_validation() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let filepath = dir.path().join("no-such-values.yaml");

        let error = validate_values_file(filepath.as_path()).unwrap_err();
        assert!(
            matches!(error, Error::ValidateFilePath { .. }),
            "got: {error}"
        );
    }

    #[test]
    fn directory_fails_validation() {
        let dir = tempfile::TempDir::new().expect("tempdir");

        let error = validate_values_file(dir.path()).unwrap_err();
        assert!(matches!(error, Error::NotAFile { .. }), "got: {error}");
    }
}
