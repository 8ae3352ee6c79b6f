// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster inventory resolution.
//!
//! Turns the clusters listed for a project into a [`MultiClusterConfig`]: one
//! connection entry, one credential entry and one context per cluster, all
//! keyed by the same `gke_<project>_<zone>_<name>` identifier.

use crate::constants::{auth, gke};
use crate::error::{NamespacerError, Result};
use crate::gke::ClusterLister;
use crate::types::GkeCluster;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use kube::config::{
    AuthInfo, AuthProviderConfig, Cluster, Context, Kubeconfig, NamedAuthInfo, NamedCluster,
    NamedContext,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, instrument, warn};

/// Where and how to reach a cluster's API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConnection {
    pub server: String,
    /// Decoded certificate authority (PEM)
    pub certificate_authority: Vec<u8>,
}

/// Auth-provider descriptor telling the client how to authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthProvider {
    pub name: String,
    pub config: BTreeMap<String, String>,
}

impl AuthProvider {
    /// Google auth provider restricted to the cloud-platform scope
    pub fn gcp() -> Self {
        Self {
            name: auth::PROVIDER_NAME.to_string(),
            config: BTreeMap::from([(
                auth::SCOPES_KEY.to_string(),
                gke::CLOUD_PLATFORM_SCOPE.to_string(),
            )]),
        }
    }
}

/// Pairs a cluster entry with a credential entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRef {
    pub cluster: String,
    pub auth_info: String,
}

/// Connection, credential and context entries for every discovered cluster.
///
/// Built once at startup and shared read-only afterwards. The three maps
/// always have the same key set.
#[derive(Debug, Clone, Default)]
pub struct MultiClusterConfig {
    clusters: HashMap<String, ClusterConnection>,
    auth_infos: HashMap<String, AuthProvider>,
    contexts: HashMap<String, ContextRef>,
}

impl MultiClusterConfig {
    fn insert(&mut self, id: String, connection: ClusterConnection, provider: AuthProvider) {
        self.contexts.insert(
            id.clone(),
            ContextRef {
                cluster: id.clone(),
                auth_info: id.clone(),
            },
        );
        self.auth_infos.insert(id.clone(), provider);
        self.clusters.insert(id, connection);
    }

    pub fn clusters(&self) -> &HashMap<String, ClusterConnection> {
        &self.clusters
    }

    pub fn auth_infos(&self) -> &HashMap<String, AuthProvider> {
        &self.auth_infos
    }

    pub fn contexts(&self) -> &HashMap<String, ContextRef> {
        &self.contexts
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contexts.contains_key(id)
    }

    /// Sorted cluster identifiers
    pub fn cluster_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Kubeconfig holding only the given cluster, selected as current context.
    ///
    /// Each request renders its own document, so resolving one cluster never
    /// touches the state another request resolves from.
    pub fn kubeconfig_for(&self, id: &str) -> Result<Kubeconfig> {
        if !self.contains(id) {
            return Err(NamespacerError::ConfigResolution(format!(
                "cluster {} not found in inventory",
                id
            )));
        }
        self.render(&[id], Some(id))
    }

    /// Kubeconfig holding every discovered cluster, without a current context
    pub fn to_kubeconfig(&self) -> Result<Kubeconfig> {
        self.render(&self.cluster_ids(), None)
    }

    fn render(&self, ids: &[&str], current_context: Option<&str>) -> Result<Kubeconfig> {
        let mut clusters = Vec::with_capacity(ids.len());
        let mut users = Vec::with_capacity(ids.len());
        let mut contexts = Vec::with_capacity(ids.len());

        for &id in ids {
            let context = self.contexts.get(id).ok_or_else(|| {
                NamespacerError::ConfigResolution(format!("context {} not found", id))
            })?;
            let connection = self.clusters.get(&context.cluster).ok_or_else(|| {
                NamespacerError::ConfigResolution(format!(
                    "context {} references unknown cluster {}",
                    id, context.cluster
                ))
            })?;
            let provider = self.auth_infos.get(&context.auth_info).ok_or_else(|| {
                NamespacerError::ConfigResolution(format!(
                    "context {} references unknown user {}",
                    id, context.auth_info
                ))
            })?;

            let certificate_authority_data = (!connection.certificate_authority.is_empty())
                .then(|| STANDARD.encode(&connection.certificate_authority));
            clusters.push(NamedCluster {
                name: context.cluster.clone(),
                cluster: Some(Cluster {
                    server: Some(connection.server.clone()),
                    certificate_authority_data,
                    ..Default::default()
                }),
            });
            users.push(NamedAuthInfo {
                name: context.auth_info.clone(),
                auth_info: Some(AuthInfo {
                    auth_provider: Some(AuthProviderConfig {
                        name: provider.name.clone(),
                        config: provider.config.clone().into_iter().collect(),
                    }),
                    ..Default::default()
                }),
            });
            contexts.push(NamedContext {
                name: id.to_string(),
                context: Some(Context {
                    cluster: context.cluster.clone(),
                    user: Some(context.auth_info.clone()),
                    ..Default::default()
                }),
            });
        }

        Ok(Kubeconfig {
            api_version: Some("v1".to_string()),
            kind: Some("Config".to_string()),
            clusters,
            auth_infos: users,
            contexts,
            current_context: current_context.map(str::to_string),
            ..Default::default()
        })
    }
}

/// Identifier of a cluster, unique per (zone, name) within a project
pub fn cluster_identifier(project_id: &str, zone: &str, cluster_name: &str) -> String {
    format!(
        "{}_{}_{}_{}",
        gke::IDENTIFIER_PREFIX,
        project_id,
        zone,
        cluster_name
    )
}

/// Build the inventory from listed clusters.
///
/// A certificate that does not decode fails the whole inventory.
pub fn build_config(project_id: &str, clusters: &[GkeCluster]) -> Result<MultiClusterConfig> {
    let mut config = MultiClusterConfig::default();

    for cluster in clusters {
        let id = cluster_identifier(project_id, cluster.zone(), &cluster.name);
        let certificate_authority = STANDARD
            .decode(cluster.encoded_ca_certificate())
            .map_err(|source| NamespacerError::MalformedEntry {
                cluster: id.clone(),
                source,
            })?;

        debug!("Discovered cluster {} at {}", id, cluster.endpoint);

        config.insert(
            id,
            ClusterConnection {
                server: cluster.server_url(),
                certificate_authority,
            },
            AuthProvider::gcp(),
        );
    }

    Ok(config)
}

/// Discover every cluster of a project and build its inventory
#[instrument(skip(lister))]
pub async fn resolve<L>(lister: &L, project_id: &str) -> Result<MultiClusterConfig>
where
    L: ClusterLister + ?Sized,
{
    if project_id.is_empty() {
        return Err(NamespacerError::Discovery(
            "project id must not be empty".to_string(),
        ));
    }

    let response = lister.list_clusters(project_id).await?;
    if !response.missing_zones.is_empty() {
        warn!(
            "Clusters in zones {:?} could not be listed and are missing from the inventory",
            response.missing_zones
        );
    }

    let config = build_config(project_id, &response.clusters)?;
    info!("Discovered {} clusters in project {}", config.len(), project_id);
    Ok(config)
}
