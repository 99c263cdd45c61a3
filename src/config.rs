use crate::common::{
    constants::DEFAULT_REPOSITORY,
    error::{
        Error::{EmptyChartName, OpeningFile, YamlParseFromFile},
        Result,
    },
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file contents, deserialized from the YAML document given on the command line.
#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    spec: Spec,
}

#[derive(Debug, Deserialize)]
struct Spec {
    #[serde(rename(deserialize = "chartName"), default)]
    chart_name: String,
    #[serde(default)]
    repository: String,
    #[serde(rename(deserialize = "valuesFile"))]
    values_file: Option<PathBuf>,
    #[serde(rename(deserialize = "valueOverrides"), default)]
    value_overrides: Vec<ValueOverride>,
}

/// A single `key=value` parameter which takes precedence over values-file entries
/// during rendering.
#[derive(Debug, Deserialize)]
pub(crate) struct ValueOverride {
    key: String,
    val: String,
}

impl ValueOverride {
    pub(crate) fn key(&self) -> &str {
        self.key.as_str()
    }

    pub(crate) fn val(&self) -> &str {
        self.val.as_str()
    }

    #[cfg(test)]
    pub(crate) fn new(key: &str, val: &str) -> Self {
        Self {
            key: key.to_string(),
            val: val.to_string(),
        }
    }
}

impl Config {
    /// Reads and validates the config from a YAML file. The chart name is required,
    /// the repository falls back to its default when unset.
    pub(crate) fn from_file(filepath: &Path) -> Result<Self> {
        let config_file = fs::File::open(filepath).map_err(|e| OpeningFile {
            source: e,
            filepath: filepath.to_path_buf(),
        })?;
        let mut config: Config =
            serde_yaml::from_reader(config_file).map_err(|e| YamlParseFromFile {
                source: e,
                filepath: filepath.to_path_buf(),
            })?;

        if config.spec.chart_name.is_empty() {
            return Err(EmptyChartName {
                filepath: filepath.to_path_buf(),
            });
        }
        if config.spec.repository.is_empty() {
            config.spec.repository = DEFAULT_REPOSITORY.to_string();
        }

        Ok(config)
    }

    pub(crate) fn chart_name(&self) -> &str {
        self.spec.chart_name.as_str()
    }

    pub(crate) fn repository(&self) -> &str {
        self.spec.repository.as_str()
    }

    pub(crate) fn values_file(&self) -> Option<&Path> {
        self.spec.values_file.as_deref()
    }

    pub(crate) fn value_overrides(&self) -> &[ValueOverride] {
        self.spec.value_overrides.as_slice()
    }
}
