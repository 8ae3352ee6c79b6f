// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gke_namespacer::config::Config;
use gke_namespacer::gke::GkeClient;
use gke_namespacer::inventory;
use gke_namespacer::provisioner::NamespaceProvisioner;
use gke_namespacer::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::parse();
    config.validate()?;
    info!(
        "Configuration loaded: project_id={}, target_cluster={}",
        config.project_id, config.target_cluster
    );

    // Discover every cluster of the project; any failure aborts startup
    let lister = GkeClient::new(config.container_api_url.clone()).await?;
    let inventory = inventory::resolve(&lister, &config.project_id).await?;

    if config.print_kubeconfig {
        print!("{}", serde_yaml::to_string(&inventory.to_kubeconfig()?)?);
        return Ok(());
    }

    if !inventory.contains(&config.target_cluster) {
        warn!(
            "Target cluster {} is not part of the inventory {:?}, namespace requests will fail",
            config.target_cluster,
            inventory.cluster_ids()
        );
    }

    let provisioner = NamespaceProvisioner::new(Arc::new(inventory), config.request_timeout());
    let state = AppState::new(provisioner, &config.target_cluster);

    server::serve(config.listen_addr, state).await
}
