// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Defaults applied to every pod built by the cluster client
pub mod pod {
    /// Label attached to every pod we create
    pub const LABEL_KEY: &str = "k8s-app";
    pub const LABEL_VALUE: &str = "kube-dns";
    /// Selector matching pods carrying the default label
    pub const SELECTOR: &str = "k8s-app=kube-dns";
    /// Port exposed on both host and container
    pub const PORT: i32 = 80;
    pub const PROTOCOL: &str = "TCP";
}

/// Name of the pod launched by the lifecycle run
pub const DEMO_POD_NAME: &str = "hello-world";

/// Namespace deletion polling defaults
pub mod deletion {
    /// How long to wait for a deleted namespace to disappear
    pub const TIMEOUT_SECS: u64 = 50;
    /// Interval between existence checks
    pub const POLL_INTERVAL_SECS: u64 = 2;
    /// Floor applied to any poll interval handed to the deletion wait
    pub const MIN_POLL_INTERVAL_MILLIS: u64 = 10;
}

/// Number of namespaces whose pods are listed concurrently
pub const DEFAULT_LIST_CONCURRENCY: usize = 8;
