use std::net::Ipv4Addr;
use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;

use crate::config::DEFAULT_TIMEOUT;
use crate::error::DynHostError;
use crate::update_dns::api::UpdateDns;

pub(crate) const OVH_DYNHOST_ENDPOINT: &str = "https://www.ovh.com/nic/update";

/// OVH DynHost, spoken through the dyndns2-style `nic/update` endpoint.
pub struct Ovh {
    endpoint: String,
    username: String,
    auth: String,
    timeout: Duration,
}

#[derive(Deserialize, Debug)]
pub struct OvhConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub hostname: String,
}

fn default_endpoint() -> String {
    OVH_DYNHOST_ENDPOINT.to_string()
}

impl Ovh {
    /// The hostname is not kept; it is passed to each update.
    pub(crate) fn new(config: &OvhConfig) -> Self {
        Ovh {
            endpoint: config.endpoint.clone(),
            username: config.username.clone(),
            auth: basic_auth(&config.username, &config.password),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn check_reply(body: &str) -> Result<(), DynHostError> {
        // "nochg" is deliberately not accepted here
        match body.split(' ').next() {
            Some("good") => Ok(()),
            _ => Err(DynHostError::Protocol(format!("response body: {}", body))),
        }
    }
}

pub(crate) fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", data_encoding::BASE64.encode(credentials.as_bytes()))
}

impl UpdateDns for Ovh {
    fn describe(&self) -> String {
        format!(
            "OVH[user={username}, endpoint={endpoint}]",
            username = &self.username,
            endpoint = &self.endpoint,
        )
    }

    fn update_dns(&self, hostname: &str, new_ip: Ipv4Addr) -> Result<(), DynHostError> {
        let endpoint = &self.endpoint;
        let myip = new_ip.to_string();
        debug!("GET {}?hostname={}&myip={}", endpoint, hostname, myip);

        let response = attohttpc::get(endpoint)
            .param("system", "dyndns")
            .param("hostname", hostname)
            .param("myip", &myip)
            .header("Authorization", self.auth.as_str())
            .timeout(self.timeout)
            .send()
            .map_err(|e| DynHostError::network(endpoint, e))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(DynHostError::Protocol(format!("the provider replied {}", status)));
        }

        let body = response
            .text()
            .map_err(|e| DynHostError::network(endpoint, e))?;
        debug!("[ovh] provider replied {:?}", body);

        Ovh::check_reply(&body)?;
        info!("[ovh] {} now points at {}", hostname, new_ip);

        Ok(())
    }
}
