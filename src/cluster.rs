// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Narrow namespace and pod operations over a single cluster connection.

use crate::constants::DEFAULT_LIST_CONCURRENCY;
use crate::error::Result;
use crate::kubernetes::{namespaces, pods};
use crate::kubernetes::pods::{PodListing, PodMutator};
use k8s_openapi::api::core::v1::Pod;
use kube::Client;
use std::time::Duration;

/// Every method issues its own remote calls; nothing is cached or retried.
#[derive(Clone)]
pub struct ClusterClient {
    client: Client,
    list_concurrency: usize,
}

impl ClusterClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            list_concurrency: DEFAULT_LIST_CONCURRENCY,
        }
    }

    /// Set how many namespaces are listed at once by the pod fan-out
    pub fn with_list_concurrency(mut self, concurrency: usize) -> Self {
        self.list_concurrency = concurrency.max(1);
        self
    }

    pub async fn create_namespace(&self, name: &str) -> Result<()> {
        namespaces::create_namespace(&self.client, name).await?;
        Ok(())
    }

    pub async fn list_namespaces(&self) -> Result<Vec<String>> {
        namespaces::list_namespace_names(&self.client).await
    }

    /// Schedules deletion; use [`Self::wait_for_namespace_deletion`] to observe it.
    pub async fn delete_namespace(&self, name: &str) -> Result<()> {
        namespaces::delete_namespace(&self.client, name).await
    }

    pub async fn wait_for_namespace_deletion(
        &self,
        name: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<()> {
        namespaces::wait_for_namespace_deletion(&self.client, name, timeout, poll_interval).await
    }

    /// Create the default pod named `name`, after applying `mutators` in order.
    pub async fn create_pod(
        &self,
        namespace: &str,
        name: &str,
        mutators: impl IntoIterator<Item = PodMutator>,
    ) -> Result<()> {
        let pod = pods::build_pod(name, mutators);
        pods::create_pod(&self.client, namespace, &pod).await?;
        Ok(())
    }

    /// Pods matching `selector` in every namespace. The first namespace that
    /// fails to list fails the whole call and no pods are returned.
    pub async fn list_pods(&self, selector: &str) -> Result<Vec<Pod>> {
        pods::list_pods_fail_fast(&self.client, selector, self.list_concurrency).await
    }

    /// Pods matching `selector` in every namespace, alongside the namespaces
    /// that could not be listed.
    pub async fn list_pods_tolerant(&self, selector: &str) -> Result<PodListing> {
        pods::list_pods_in_all_namespaces(&self.client, selector, self.list_concurrency).await
    }
}
