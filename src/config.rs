// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{deletion, DEFAULT_LIST_CONCURRENCY};
use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig used to reach the cluster
    pub kubeconfig_path: PathBuf,
    /// Deadline for a deleted namespace to disappear
    pub delete_timeout: Duration,
    /// Interval between checks while waiting for a deleted namespace
    pub delete_poll_interval: Duration,
    /// Namespaces whose pods are listed at the same time
    pub list_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kubeconfig_path = match lookup("KUBECONFIG") {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::home_dir()
                .map(|home| home.join(".kube").join("config"))
                .ok_or_else(|| anyhow!("KUBECONFIG not set and home directory is unknown"))?,
        };

        let delete_timeout = Duration::from_secs(parse_or(
            &lookup,
            "NAMESPACE_DELETE_TIMEOUT_SECS",
            deletion::TIMEOUT_SECS,
        )?);
        let poll_secs: u64 = parse_or(
            &lookup,
            "NAMESPACE_DELETE_POLL_SECS",
            deletion::POLL_INTERVAL_SECS,
        )?;
        if poll_secs == 0 {
            bail!("NAMESPACE_DELETE_POLL_SECS must be at least 1");
        }
        let delete_poll_interval = Duration::from_secs(poll_secs);
        let list_concurrency =
            parse_or(&lookup, "POD_LIST_CONCURRENCY", DEFAULT_LIST_CONCURRENCY)?.max(1);

        Ok(Config {
            kubeconfig_path,
            delete_timeout,
            delete_poll_interval,
            list_concurrency,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has invalid value '{}'", key, raw)),
        None => Ok(default),
    }
}
