// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creates namespaces on clusters of the discovered inventory.

use crate::error::Result;
use crate::inventory::MultiClusterConfig;
use crate::kubernetes::{
    create_namespace, resolve_client_config, validate_namespace_name, ClientFactory,
    KubeClientFactory,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

/// Resolves a fresh client per request from the shared inventory and issues
/// exactly one create call. Nothing is retried and no state is mutated.
pub struct NamespaceProvisioner {
    inventory: Arc<MultiClusterConfig>,
    clients: Arc<dyn ClientFactory>,
    request_timeout: Duration,
}

impl NamespaceProvisioner {
    pub fn new(inventory: Arc<MultiClusterConfig>, request_timeout: Duration) -> Self {
        Self::with_client_factory(inventory, Arc::new(KubeClientFactory), request_timeout)
    }

    pub fn with_client_factory(
        inventory: Arc<MultiClusterConfig>,
        clients: Arc<dyn ClientFactory>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            inventory,
            clients,
            request_timeout,
        }
    }

    /// Create `namespace` on the cluster identified by `cluster_id`, returning
    /// the name confirmed by the API server
    #[instrument(skip(self))]
    pub async fn create_namespace(&self, cluster_id: &str, namespace: &str) -> Result<String> {
        validate_namespace_name(namespace)?;

        let config =
            resolve_client_config(&self.inventory, cluster_id, self.request_timeout).await?;
        let client = self.clients.build(config)?;

        info!("Creating namespace {} on cluster {}", namespace, cluster_id);
        create_namespace(&client, cluster_id, namespace).await
    }
}
