/// The package manager binary which fetches and renders charts.
pub(crate) const HELM_COMMAND: &str = "helm";

/// Repository used when the config does not name one.
pub(crate) const DEFAULT_REPOSITORY: &str = "stable";

/// Charts render their manifests into this subdirectory.
pub(crate) const TEMPLATES_DIR_NAME: &str = "templates";

/// This is the default tracing filter directive, used when RUST_LOG is absent.
pub(crate) const DEFAULT_TRACING_FILTER: &str = "info";
