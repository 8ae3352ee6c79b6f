// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Cluster-management (GKE) API conventions
pub mod gke {
    /// Prefix of every cluster identifier: `gke_<project>_<zone>_<name>`
    pub const IDENTIFIER_PREFIX: &str = "gke";
    /// Zone wildcard selecting clusters in all zones
    pub const ALL_ZONES: &str = "-";
    /// Default base URL of the cluster-management API
    pub const DEFAULT_API_URL: &str = "https://container.googleapis.com";
    /// OAuth scope granting read/write access to the management plane
    pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
}

/// Kubeconfig credential entries
pub mod auth {
    /// Auth-provider name understood by kube's `oauth` feature
    pub const PROVIDER_NAME: &str = "gcp";
    /// Auth-provider option carrying the requested scopes
    pub const SCOPES_KEY: &str = "scopes";
}

/// HTTP boundary defaults
pub mod server {
    pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
    /// Deadline for a single call against a target cluster
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Body served on every path other than namespace creation
    pub const LIVENESS_BODY: &str = "hello\n";
}
