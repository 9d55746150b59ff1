use std::net::Ipv4Addr;

use crate::error::DynHostError;

pub(crate) mod public_ip;
pub(crate) mod record;

/// Finds the address this host is reachable at from the internet.
pub(crate) trait PublicAddress {
    fn describe(&self) -> String;

    fn public_ipv4(&self) -> Result<Ipv4Addr, DynHostError>;
}

/// Finds the address currently published for a hostname.
pub(crate) trait RecordLookup {
    fn record_ipv4(&self, hostname: &str) -> Result<Ipv4Addr, DynHostError>;
}
