// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("Kubernetes API error: {0}")]
    Remote(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Namespace {name} still present after waiting {waited:?}")]
    Timeout { name: String, waited: Duration },
}

/// A namespace whose pod listing failed.
#[derive(Debug)]
pub struct NamespaceFailure {
    pub namespace: String,
    pub error: kube::Error,
}

pub type Result<T> = std::result::Result<T, ClusterError>;
