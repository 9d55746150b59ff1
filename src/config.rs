use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::DynHostError;
use crate::lookup::public_ip::IPIFY_URL;
use crate::update_dns::ovh::OvhConfig;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize, Debug)]
pub(crate) struct Config {
    pub ovh: OvhConfig,
    #[serde(default = "default_ip_echo_url")]
    pub ip_echo_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ip_echo_url() -> String {
    IPIFY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

// Older releases read `[ovh]` / `key = value` INI files.
fn looks_like_ini(text: &str) -> bool {
    text.lines().any(|line| line.trim() == "[ovh]")
}

impl Config {
    pub(crate) fn load(path: &Path) -> Result<Config, DynHostError> {
        let file = File::open(path).map_err(|e| {
            DynHostError::Config(format!("Could not open {}: {}", path.display(), e))
        })?;
        Config::from_reader(file, &path.display().to_string())
    }

    /// Parses and validates a configuration; `origin` names the source in
    /// error messages.
    pub(crate) fn from_reader<R: Read>(
        mut reader: R,
        origin: &str,
    ) -> Result<Config, DynHostError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| DynHostError::Config(format!("Could not read {}: {}", origin, e)))?;

        let config: Config = serde_yaml::from_str(&text).map_err(|e| {
            if looks_like_ini(&text) {
                DynHostError::Config(format!(
                    "{}: this is an INI file, but the configuration is YAML; \
                     move the keys under an `ovh:` mapping (see config.example.cfg)",
                    origin
                ))
            } else {
                DynHostError::Config(format!("{}: {}", origin, e))
            }
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &str) -> Result<(), DynHostError> {
        let required = [
            ("username", &self.ovh.username),
            ("password", &self.ovh.password),
            ("hostname", &self.ovh.hostname),
        ];
        for (key, value) in required.iter() {
            if value.trim().is_empty() {
                return Err(DynHostError::Config(format!("{}: {} cannot be empty", origin, key)));
            }
        }

        if self.timeout_secs == 0 {
            return Err(DynHostError::Config(format!(
                "{}: timeout_secs must be at least 1",
                origin
            )));
        }

        Ok(())
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
