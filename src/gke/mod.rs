// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Access to the cluster-management API that lists a project's clusters.

pub mod client;

pub use client::GkeClient;

use crate::error::Result;
use crate::types::ListClustersResponse;
use async_trait::async_trait;

/// Lists every cluster visible to a project, across all zones
#[async_trait]
pub trait ClusterLister: Send + Sync {
    async fn list_clusters(&self, project_id: &str) -> Result<ListClustersResponse>;
}
