use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use log::info;
use structopt::StructOpt;

use crate::config::Config;
use crate::lookup::public_ip::IpEcho;
use crate::lookup::record::DnsRecordLookup;
use crate::lookup::PublicAddress;
use crate::update_dns::api::UpdateDns;
use crate::update_dns::ovh::Ovh;

mod config;
mod error;
mod lookup;
mod sync;
mod update_dns;

const RUST_BACKTRACE: &str = "RUST_BACKTRACE";

#[derive(StructOpt, Debug)]
#[structopt(name = "dynhost")]
pub(crate) struct DynHost {
    /// Path to the configuration file
    #[structopt(short, long, default_value = "./config.cfg", parse(from_os_str))]
    pub config: PathBuf,

    /// Do not actually update the DynHost record
    #[structopt(long)]
    pub dry: bool,

    /// Verbosity of output, 1 occurrence for debug, 2 occurrences for trace
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: usize,

    /// Only log errors
    #[structopt(short, long)]
    pub quiet: bool,
}

fn main() -> color_eyre::Result<()> {
    if std::env::var_os(RUST_BACKTRACE).is_none() {
        std::env::set_var(RUST_BACKTRACE, "1");
    }

    let args: DynHost = DynHost::from_args();

    color_eyre::install()?;
    stderrlog::new()
        .quiet(args.quiet)
        .verbosity(args.verbose + 2)
        .init()
        .wrap_err("Failed to initialize logging")?;

    // Fails before anything touches the network.
    let config = Config::load(&args.config).wrap_err("Failed to load configuration")?;
    let timeout = config.timeout();

    let public = IpEcho::new(config.ip_echo_url.as_str(), timeout);
    let records =
        DnsRecordLookup::new(timeout).wrap_err("Failed to read the system resolver configuration")?;
    let update_dns: Box<dyn UpdateDns> = Box::new(Ovh::new(&config.ovh).with_timeout(timeout));

    info!("Looking up public address with {}", public.describe());

    let outcome = sync::reconcile(
        &public,
        &records,
        update_dns.as_ref(),
        &config.ovh.hostname,
        args.dry,
    )?;
    info!("Done: {:?}", outcome);

    Ok(())
}

#[cfg(test)]
mod tests {
    use structopt::clap::ErrorKind;

    use super::*;

    #[test]
    fn defaults() {
        let args = DynHost::from_iter_safe(&["dynhost"]).unwrap();

        assert_eq!(args.config, PathBuf::from("./config.cfg"));
        assert!(!args.dry);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn dry_run_and_config_path() {
        let args =
            DynHost::from_iter_safe(&["dynhost", "--dry", "--config", "/etc/dynhost.cfg"]).unwrap();

        assert!(args.dry);
        assert_eq!(args.config, PathBuf::from("/etc/dynhost.cfg"));
    }

    #[test]
    fn repeated_verbose() {
        let args = DynHost::from_iter_safe(&["dynhost", "-vv"]).unwrap();

        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn version_short_circuits() {
        let err = DynHost::from_iter_safe(&["dynhost", "--version"]).unwrap_err();

        assert_eq!(err.kind, ErrorKind::VersionDisplayed);
    }
}
