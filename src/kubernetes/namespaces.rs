// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::constants::deletion::MIN_POLL_INTERVAL_MILLIS;
use crate::error::{ClusterError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument, warn};

/// Create a namespace carrying only the given name
#[instrument(skip(client))]
pub async fn create_namespace(client: &Client, name: &str) -> Result<Namespace> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let ns = Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let created = namespaces.create(&PostParams::default(), &ns).await?;
    info!("Namespace {} created", name);
    Ok(created)
}

/// List the names of all namespaces, in the order the API server returns them
#[instrument(skip(client))]
pub async fn list_namespace_names(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&ListParams::default()).await?;

    Ok(list.items.iter().map(|ns| ns.name_any()).collect())
}

/// Request deletion of a namespace. The API server only schedules the teardown.
#[instrument(skip(client))]
pub async fn delete_namespace(client: &Client, name: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    namespaces.delete(name, &DeleteParams::default()).await?;
    info!("Namespace {} scheduled for deletion", name);
    Ok(())
}

/// Poll until the namespace is gone or `timeout` elapses.
/// `poll_interval` is raised to at least `MIN_POLL_INTERVAL_MILLIS`.
#[instrument(skip(client))]
pub async fn wait_for_namespace_deletion(
    client: &Client,
    name: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let poll_interval = poll_interval.max(Duration::from_millis(MIN_POLL_INTERVAL_MILLIS));
    let started = Instant::now();
    let deadline = started + timeout;

    loop {
        match namespaces.get_opt(name).await {
            Ok(None) => {
                info!(
                    "Namespace {} is gone after {:?}",
                    name,
                    started.elapsed()
                );
                return Ok(());
            }
            Ok(Some(ns)) => {
                let phase = ns
                    .status
                    .as_ref()
                    .and_then(|s| s.phase.clone())
                    .unwrap_or_default();
                debug!("Namespace {} still present (phase: {})", name, phase);
            }
            Err(e) => {
                warn!("Error checking namespace {}: {}, retrying", name, e);
            }
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(ClusterError::Timeout {
                name: name.to_string(),
                waited: now - started,
            });
        }

        sleep(poll_interval.min(deadline - now)).await;
    }
}
