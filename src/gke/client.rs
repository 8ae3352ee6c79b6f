// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::ClusterLister;
use crate::constants::gke::{ALL_ZONES, CLOUD_PLATFORM_SCOPE};
use crate::error::{NamespacerError, Result};
use crate::types::ListClustersResponse;
use async_trait::async_trait;
use gcp_auth::TokenProvider;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// Cluster-management API client authenticated with ambient application-default credentials
pub struct GkeClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl GkeClient {
    /// Fails when no application-default credentials can be found
    pub async fn new(base_url: Url) -> Result<Self> {
        let tokens = gcp_auth::provider().await.map_err(|e| {
            NamespacerError::Discovery(format!("Failed to load Google credentials: {}", e))
        })?;

        Ok(Self::with_token_provider(base_url, tokens))
    }

    pub fn with_token_provider(base_url: Url, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens,
        }
    }
}

/// `{base}/v1/projects/{project}/zones/-/clusters`
fn list_clusters_url(base_url: &Url, project_id: &str) -> Result<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            NamespacerError::Discovery(format!("Invalid cluster API base URL: {}", base_url))
        })?
        .pop_if_empty()
        .extend(["v1", "projects", project_id, "zones", ALL_ZONES, "clusters"]);
    Ok(url)
}

#[async_trait]
impl ClusterLister for GkeClient {
    #[instrument(skip(self))]
    async fn list_clusters(&self, project_id: &str) -> Result<ListClustersResponse> {
        let token = self
            .tokens
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| {
                NamespacerError::Discovery(format!("Failed to obtain access token: {}", e))
            })?;

        let url = list_clusters_url(&self.base_url, project_id)?;
        debug!("Listing clusters from {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| {
                NamespacerError::Discovery(format!(
                    "clusters list project={}: {}",
                    project_id, e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NamespacerError::Discovery(format!(
                "clusters list project={}: HTTP {}: {}",
                project_id, status, body
            )));
        }

        response.json::<ListClustersResponse>().await.map_err(|e| {
            NamespacerError::Discovery(format!(
                "Failed to decode clusters list for project {}: {}",
                project_id, e
            ))
        })
    }
}
