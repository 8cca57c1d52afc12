use anyhow::{anyhow, Context, Result};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::bundle::WASM_BUNDLE;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "frontend/site";
pub const DEFAULT_WASM_PKG_DIR: &str = "frontend/particle-wasm/pkg";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub site_dir: PathBuf,
    pub wasm_pkg_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            wasm_pkg_dir: PathBuf::from(DEFAULT_WASM_PKG_DIR),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn parse_var<T>(name: &str, value: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Invalid {name}: {raw:?}")),
        None => Ok(default),
    }
}

impl ServerConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables take
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            bind_addr: parse_var("BIND_ADDR", lookup("BIND_ADDR"), defaults.bind_addr)?,
            port: parse_var("PORT", lookup("PORT"), defaults.port)?,
            site_dir: lookup("SITE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.site_dir),
            wasm_pkg_dir: lookup("WASM_PKG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.wasm_pkg_dir),
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                lookup("REQUEST_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )?),
        };
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Whether the wasm bundle for the particle backdrop is on disk.
    pub fn wasm_bundle_present(&self) -> bool {
        WASM_BUNDLE
            .iter()
            .all(|file| self.wasm_pkg_dir.join(file).is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", " 8080 "),
            ("SITE_DIR", "/srv/site"),
            ("WASM_PKG_DIR", "/srv/pkg"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.wasm_pkg_dir, PathBuf::from("/srv/pkg"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_numbers_name_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"), "{err}");

        let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
        assert!(err.to_string().contains("PORT"), "{err}");

        let err =
            ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost:1")])).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"), "{err}");
    }

    #[test]
    fn bundle_names_follow_the_bindgen_out_name() {
        use crate::bundle::{BUNDLE_JS, BUNDLE_NAME, BUNDLE_WASM};
        assert_eq!(BUNDLE_WASM, format!("{BUNDLE_NAME}_bg.wasm"));
        assert_eq!(BUNDLE_JS, format!("{BUNDLE_NAME}.js"));
    }

    #[test]
    fn missing_bundle_is_detected() {
        let config = ServerConfig {
            wasm_pkg_dir: PathBuf::from("/definitely/not/here"),
            ..ServerConfig::default()
        };
        assert!(!config.wasm_bundle_present());
    }
}
