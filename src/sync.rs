use color_eyre::eyre::WrapErr;
use log::info;

use crate::lookup::{PublicAddress, RecordLookup};
use crate::update_dns::api::UpdateDns;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    UpToDate,
    DryRun,
    Updated,
}

/// Brings the record for `hostname` in line with our public address.
///
/// The update is only sent when the two addresses differ and `dry_run` is
/// off; any failure aborts the run with the failing stage attached.
pub(crate) fn reconcile(
    public: &dyn PublicAddress,
    records: &dyn RecordLookup,
    update_dns: &dyn UpdateDns,
    hostname: &str,
    dry_run: bool,
) -> color_eyre::Result<Outcome> {
    let public_ip = public
        .public_ipv4()
        .wrap_err("Could not get my public IPv4 address")?;
    info!("Public IP: {}", public_ip);

    let current = records
        .record_ipv4(hostname)
        .wrap_err("Could not get the current DynHost value")?;
    info!("Current DynHost value: {}", current);

    if public_ip == current {
        info!("The current DynHost record is up-to-date; exiting.");
        return Ok(Outcome::UpToDate);
    }

    if dry_run {
        info!("Dry run; exiting.");
        return Ok(Outcome::DryRun);
    }

    info!("Attempting to update {} with {}", hostname, update_dns.describe());
    update_dns
        .update_dns(hostname, public_ip)
        .wrap_err("Could not update the DynHost record")?;

    Ok(Outcome::Updated)
}
