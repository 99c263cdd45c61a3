/// Helm client.
pub(crate) mod client;
