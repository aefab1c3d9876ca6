// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace and pod management.

pub mod client;
pub mod namespaces;
pub mod pods;

pub use client::create_client;
pub use pods::{PodListing, PodMutator};
