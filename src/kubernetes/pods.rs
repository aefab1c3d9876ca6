// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod construction, creation and cross-namespace listing

use crate::constants::pod as defaults;
use crate::error::{NamespaceFailure, Result};
use crate::kubernetes::namespaces::list_namespace_names;
use futures::{stream, StreamExt, TryStreamExt};
use k8s_openapi::api::core::v1::{Container, ContainerPort, Pod, PodSpec};
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// A transformation applied to the default pod before it is submitted
pub type PodMutator = Box<dyn FnOnce(Pod) -> Pod + Send>;

/// Pods found across namespaces, plus the namespaces that could not be listed
#[derive(Debug, Default)]
pub struct PodListing {
    pub pods: Vec<Pod>,
    pub failures: Vec<NamespaceFailure>,
}

/// Build the default pod: one container named and imaged after the pod,
/// the default label and port 80/TCP on host and container.
pub fn default_pod(name: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(BTreeMap::from([(
                defaults::LABEL_KEY.to_string(),
                defaults::LABEL_VALUE.to_string(),
            )])),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: name.to_string(),
                image: Some(name.to_string()),
                ports: Some(vec![ContainerPort {
                    container_port: defaults::PORT,
                    host_port: Some(defaults::PORT),
                    protocol: Some(defaults::PROTOCOL.to_string()),
                    ..Default::default()
                }]),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the default pod and apply `mutators` in order
pub fn build_pod(name: &str, mutators: impl IntoIterator<Item = PodMutator>) -> Pod {
    mutators
        .into_iter()
        .fold(default_pod(name), |pod, mutate| mutate(pod))
}

/// Submit a pod to the given namespace
#[instrument(skip(client, pod), fields(pod = ?pod.metadata.name))]
pub async fn create_pod(client: &Client, namespace: &str, pod: &Pod) -> Result<Pod> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let created = pods.create(&PostParams::default(), pod).await?;
    info!(
        "Pod {}/{} created",
        namespace,
        pod.metadata.name.as_deref().unwrap_or_default()
    );
    Ok(created)
}

/// List pods matching `selector` in every namespace, at most `concurrency`
/// namespaces at a time. Results keep namespace enumeration order.
#[instrument(skip(client))]
pub async fn list_pods_in_all_namespaces(
    client: &Client,
    selector: &str,
    concurrency: usize,
) -> Result<PodListing> {
    let namespaces = list_namespace_names(client).await?;
    debug!("Listing pods in {} namespaces", namespaces.len());

    let lp = ListParams::default().labels(selector);
    let results: Vec<_> = stream::iter(namespaces)
        .map(|namespace| {
            let pods: Api<Pod> = Api::namespaced(client.clone(), &namespace);
            let lp = lp.clone();
            async move {
                let result = pods.list(&lp).await;
                (namespace, result)
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut listing = PodListing::default();
    for (namespace, result) in results {
        match result {
            Ok(list) => listing.pods.extend(list.items),
            Err(error) => {
                warn!("Failed to list pods in namespace {}: {}", namespace, error);
                listing.failures.push(NamespaceFailure { namespace, error });
            }
        }
    }

    Ok(listing)
}

/// List pods matching `selector` in every namespace, stopping at the first
/// namespace whose listing fails. That error is returned and no pods are.
#[instrument(skip(client))]
pub async fn list_pods_fail_fast(
    client: &Client,
    selector: &str,
    concurrency: usize,
) -> Result<Vec<Pod>> {
    let namespaces = list_namespace_names(client).await?;
    debug!("Listing pods in {} namespaces", namespaces.len());

    let lp = ListParams::default().labels(selector);
    let lists: Vec<Vec<Pod>> = stream::iter(namespaces)
        .map(|namespace| {
            let pods: Api<Pod> = Api::namespaced(client.clone(), &namespace);
            let lp = lp.clone();
            async move {
                pods.list(&lp).await.map(|list| list.items).map_err(|e| {
                    warn!("Failed to list pods in namespace {}: {}", namespace, e);
                    e
                })
            }
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(lists.into_iter().flatten().collect())
}
