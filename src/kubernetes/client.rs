// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Target cluster client resolution

use crate::error::{NamespacerError, Result};
use crate::inventory::MultiClusterConfig;
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use std::time::Duration;
use tracing::{debug, instrument};

/// Builds an API client from a resolved cluster configuration
pub trait ClientFactory: Send + Sync {
    fn build(&self, config: KConfig) -> Result<Client>;
}

/// Builds real clients; credentials are handled by kube's auth-provider support
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeClientFactory;

impl ClientFactory for KubeClientFactory {
    fn build(&self, config: KConfig) -> Result<Client> {
        let cluster_url = config.cluster_url.clone();
        Client::try_from(config).map_err(|e| {
            NamespacerError::ClientConstruction(format!(
                "Failed to create client for {}: {}",
                cluster_url, e
            ))
        })
    }
}

/// Resolve a connectable configuration for exactly one cluster of the inventory.
///
/// The returned config carries `timeout` as connect and read deadline. An
/// identifier missing from the inventory is a resolution error; an entry that
/// is present but cannot be loaded is an invalid cluster config.
#[instrument(skip(inventory, timeout))]
pub async fn resolve_client_config(
    inventory: &MultiClusterConfig,
    cluster_id: &str,
    timeout: Duration,
) -> Result<KConfig> {
    let kubeconfig = inventory.kubeconfig_for(cluster_id)?;

    let options = KubeConfigOptions {
        context: Some(cluster_id.to_string()),
        ..Default::default()
    };

    let mut config = KConfig::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .map_err(|e| NamespacerError::InvalidClusterConfig {
            cluster: cluster_id.to_string(),
            reason: e.to_string(),
        })?;

    config.connect_timeout = Some(timeout);
    config.read_timeout = Some(timeout);
    debug!("Resolved cluster {} to {}", cluster_id, config.cluster_url);

    Ok(config)
}
