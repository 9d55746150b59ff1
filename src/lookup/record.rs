use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use log::debug;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::Resolver;

use crate::error::DynHostError;
use crate::lookup::RecordLookup;

/// Resolves hostnames through trust-dns.
pub(crate) struct DnsRecordLookup {
    config: ResolverConfig,
    opts: ResolverOpts,
}

impl DnsRecordLookup {
    /// Uses the system configuration (resolv.conf and the hosts file).
    pub(crate) fn new(timeout: Duration) -> Result<Self, DynHostError> {
        let (config, opts) = read_system_conf().map_err(|e| DynHostError::Resolution(e.into()))?;
        Ok(DnsRecordLookup::with_config(config, opts, timeout))
    }

    pub(crate) fn with_config(
        config: ResolverConfig,
        mut opts: ResolverOpts,
        timeout: Duration,
    ) -> Self {
        opts.timeout = timeout;
        DnsRecordLookup { config, opts }
    }

    fn resolver(&self) -> Result<Resolver, DynHostError> {
        Resolver::new(self.config.clone(), self.opts.clone())
            .map_err(|e| DynHostError::Resolution(e.into()))
    }
}

impl RecordLookup for DnsRecordLookup {
    fn record_ipv4(&self, hostname: &str) -> Result<Ipv4Addr, DynHostError> {
        let response = self.resolver()?.lookup_ip(hostname)?;
        let addrs: Vec<IpAddr> = response.iter().collect();
        debug!("{} resolved to {:?}", hostname, addrs);

        first_ipv4(addrs).ok_or(DynHostError::NotFound)
    }
}

/// First address with an IPv4 form, in resolver order. IPv4-mapped IPv6
/// addresses (`::ffff:a.b.c.d`) count as IPv4.
pub(crate) fn first_ipv4<I>(addrs: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addrs
        .into_iter()
        .filter_map(|x| match x {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        })
        .next()
}
