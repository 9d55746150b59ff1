use thiserror::Error;
use trust_dns_resolver::error::ResolveError;

#[derive(Error, Debug)]
pub(crate) enum DynHostError {
    #[error("{0}")]
    Config(String),

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: attohttpc::Error,
    },

    #[error("DNS resolution failed")]
    Resolution(#[from] ResolveError),

    #[error("no IPv4 found")]
    NotFound,

    // unexpected status or body shape from an HTTP endpoint
    #[error("{0}")]
    Protocol(String),
}

impl DynHostError {
    pub(crate) fn network(url: &str, source: attohttpc::Error) -> Self {
        DynHostError::Network {
            url: url.to_string(),
            source,
        }
    }
}
