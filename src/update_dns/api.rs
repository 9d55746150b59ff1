use std::net::Ipv4Addr;

use crate::error::DynHostError;

pub(crate) trait UpdateDns {
    fn describe(&self) -> String;

    fn update_dns(&self, hostname: &str, new_ip: Ipv4Addr) -> Result<(), DynHostError>;
}
