// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_tour::cluster::ClusterClient;
use kube_tour::config::Config;
use kube_tour::kubernetes::create_client;
use kube_tour::lifecycle::Lifecycle;

/// Create a namespace and a pod in it, list what is there, then delete the namespace.
#[derive(Parser)]
#[command(name = "kube-tour")]
#[command(version)]
struct Cli {
    /// A namespace to create
    #[arg(
        long = "new-namespace",
        alias = "newNamespace",
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new()
    )]
    new_namespace: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: kubeconfig={}, delete_timeout={:?}",
        config.kubeconfig_path.display(),
        config.delete_timeout
    );

    let client = create_client(&config.kubeconfig_path)
        .await
        .context("Failed to connect to Kubernetes cluster")?;
    info!("Connected to Kubernetes cluster");

    let cluster = ClusterClient::new(client).with_list_concurrency(config.list_concurrency);
    Lifecycle::new(cluster, &config)
        .run(&cli.new_namespace)
        .await
        .with_context(|| format!("Lifecycle run for namespace {} failed", cli.new_namespace))?;

    info!("Done");
    Ok(())
}
