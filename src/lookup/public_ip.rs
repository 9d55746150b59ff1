use std::net::Ipv4Addr;
use std::time::Duration;

use log::debug;

use crate::error::DynHostError;
use crate::lookup::PublicAddress;

pub(crate) const IPIFY_URL: &str = "https://api.ipify.org";

/// Asks a plain-text IP echo service (ipify by default) for our address.
pub(crate) struct IpEcho {
    url: String,
    timeout: Duration,
}

impl IpEcho {
    pub(crate) fn new(url: impl Into<String>, timeout: Duration) -> Self {
        IpEcho {
            url: url.into(),
            timeout,
        }
    }
}

impl PublicAddress for IpEcho {
    fn describe(&self) -> String {
        format!("IpEcho[url={url}]", url = self.url)
    }

    fn public_ipv4(&self) -> Result<Ipv4Addr, DynHostError> {
        debug!("GET {}", self.url);
        let response = attohttpc::get(&self.url)
            .timeout(self.timeout)
            .send()
            .map_err(|e| DynHostError::network(&self.url, e))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(DynHostError::Protocol(format!("unexpected status {}", status)));
        }

        let body = response
            .text()
            .map_err(|e| DynHostError::network(&self.url, e))?;
        debug!("IP echo replied {:?}", body);

        body.trim().parse::<Ipv4Addr>().map_err(|_| {
            DynHostError::Protocol(format!("not an IPv4 address: {:?}", body))
        })
    }
}
