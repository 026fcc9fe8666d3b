use crate::provider::Provider;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no catalog stored for {provider} at {}; refresh the catalog first", path.display())]
    StoreMissing { provider: Provider, path: PathBuf },
    #[error("stored catalog for {provider} at {} is unreadable: {source}", path.display())]
    StoreCorrupt {
        provider: Provider,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write catalog for {provider} to {}: {source}", path.display())]
    StoreWrite {
        provider: Provider,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("voice listing failed for {provider}: {source}")]
    ProviderQuery {
        provider: Provider,
        #[source]
        source: QueryError,
    },
}

/// Failure while talking to a provider's voice listing endpoint.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}: {1}")]
    BadStatus(reqwest::StatusCode, String),
    #[error("could not decode voice listing: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("missing credential: set {0}")]
    MissingCredential(&'static str),
    #[error("request signing failed: {0}")]
    Signing(String),
}
