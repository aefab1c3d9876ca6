// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig file

use crate::error::{ClusterError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{info, instrument};

/// Create a Kubernetes client from the kubeconfig at `path`
#[instrument]
pub async fn create_client(path: &Path) -> Result<Client> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = load_kubeconfig(path)?;

    let client_config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| ClusterError::Kubeconfig(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| ClusterError::Kubeconfig(format!("Failed to create client: {}", e)))
}

/// Read a kubeconfig file. Relative file references inside it resolve
/// against the file's own directory, and multi-document files are merged.
fn load_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    Kubeconfig::read_from(path).map_err(|e| {
        ClusterError::Kubeconfig(format!("Failed to read {}: {}", path.display(), e))
    })
}
