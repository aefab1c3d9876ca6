// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create a namespace and a pod, look around, then tear the namespace down.

use crate::cluster::ClusterClient;
use crate::config::Config;
use crate::constants::{pod, DEMO_POD_NAME};
use crate::error::{ClusterError, Result};
use kube::ResourceExt;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Runs the namespace and pod lifecycle once against a cluster.
pub struct Lifecycle {
    cluster: ClusterClient,
    delete_timeout: Duration,
    delete_poll_interval: Duration,
}

impl Lifecycle {
    pub fn new(cluster: ClusterClient, config: &Config) -> Self {
        Self {
            cluster,
            delete_timeout: config.delete_timeout,
            delete_poll_interval: config.delete_poll_interval,
        }
    }

    /// Only namespace or pod creation failures abort the run.
    #[instrument(skip(self))]
    pub async fn run(&self, namespace: &str) -> Result<()> {
        self.log_namespaces().await;

        if let Err(e) = self.cluster.create_namespace(namespace).await {
            error!("Failed to create namespace {}: {}", namespace, e);
            return Err(e);
        }

        self.log_namespaces().await;

        if let Err(e) = self
            .cluster
            .create_pod(namespace, DEMO_POD_NAME, Vec::new())
            .await
        {
            error!("Failed to create pod {}/{}: {}", namespace, DEMO_POD_NAME, e);
            return Err(e);
        }

        self.log_matching_pods().await;

        match self.cluster.delete_namespace(namespace).await {
            Ok(()) => self.await_deletion(namespace).await,
            Err(e) => error!("Failed to delete namespace {}: {}", namespace, e),
        }

        self.log_namespaces().await;
        Ok(())
    }

    async fn log_namespaces(&self) {
        match self.cluster.list_namespaces().await {
            Ok(names) => info!("Existing namespaces: {:?}", names),
            Err(e) => error!("Failed to list namespaces: {}", e),
        }
    }

    async fn log_matching_pods(&self) {
        let listing = match self.cluster.list_pods_tolerant(pod::SELECTOR).await {
            Ok(listing) => listing,
            Err(e) => {
                error!("Failed to list pods: {}", e);
                return;
            }
        };

        for found in &listing.pods {
            info!(
                "Found pod. Namespace: {}, Pod Name: {}",
                found.namespace().unwrap_or_default(),
                found.name_any()
            );
        }
        for failure in &listing.failures {
            warn!(
                "Skipped namespace {} while listing pods: {}",
                failure.namespace, failure.error
            );
        }
    }

    async fn await_deletion(&self, namespace: &str) {
        match self
            .cluster
            .wait_for_namespace_deletion(namespace, self.delete_timeout, self.delete_poll_interval)
            .await
        {
            Ok(()) => {}
            Err(ClusterError::Timeout { waited, .. }) => warn!(
                "Namespace {} still terminating after {:?}, continuing",
                namespace, waited
            ),
            Err(e) => warn!("Could not confirm deletion of namespace {}: {}", namespace, e),
        }
    }
}
