// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Response of `projects.zones.clusters.list`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersResponse {
    #[serde(default)]
    pub clusters: Vec<GkeCluster>,
    /// Zones that could not be reached while listing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_zones: Vec<String>,
}

/// A managed cluster as reported by the cluster-management API.
/// Only the fields needed to connect to the cluster are kept.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GkeCluster {
    pub name: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_auth: Option<MasterAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MasterAuth {
    /// Base64 encoded PEM of the cluster's certificate authority
    #[serde(default)]
    pub cluster_ca_certificate: String,
}

impl GkeCluster {
    /// The zone the cluster lives in, falling back to its location for
    /// regional clusters that leave the deprecated `zone` field empty
    pub fn zone(&self) -> &str {
        if self.zone.is_empty() {
            &self.location
        } else {
            &self.zone
        }
    }

    /// The base64 encoded CA certificate, empty when the API reported none
    pub fn encoded_ca_certificate(&self) -> &str {
        self.master_auth
            .as_ref()
            .map(|m| m.cluster_ca_certificate.as_str())
            .unwrap_or_default()
    }

    pub fn server_url(&self) -> String {
        format!("https://{}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cluster(zone: &str, location: &str, master_auth: Option<MasterAuth>) -> GkeCluster {
        GkeCluster {
            name: "demo".to_string(),
            zone: zone.to_string(),
            location: location.to_string(),
            endpoint: "1.2.3.4".to_string(),
            master_auth,
            status: Some("RUNNING".to_string()),
        }
    }

    #[test]
    fn test_deserialize_list_response() {
        let body = serde_json::json!({
            "clusters": [{
                "name": "demo",
                "zone": "us-central1-b",
                "location": "us-central1-b",
                "endpoint": "1.2.3.4",
                "status": "RUNNING",
                "currentMasterVersion": "1.30.5-gke.1014001",
                "masterAuth": { "clusterCaCertificate": "Q0VSVERBVEE=" }
            }],
            "missingZones": ["asia-east1-a"]
        });

        let response: ListClustersResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.clusters.len(), 1);
        assert_eq!(response.missing_zones, vec!["asia-east1-a".to_string()]);
        let cluster = &response.clusters[0];
        assert_eq!(cluster.name, "demo");
        assert_eq!(cluster.zone(), "us-central1-b");
        assert_eq!(cluster.encoded_ca_certificate(), "Q0VSVERBVEE=");
    }

    #[test]
    fn test_deserialize_empty_response() {
        let response: ListClustersResponse = serde_json::from_str("{}").unwrap();
        assert!(response.clusters.is_empty());
        assert!(response.missing_zones.is_empty());
    }

    #[test]
    fn test_zone_falls_back_to_location() {
        let cluster = make_cluster("", "europe-west1", None);
        assert_eq!(cluster.zone(), "europe-west1");
    }

    #[test]
    fn test_zone_preferred_over_location() {
        let cluster = make_cluster("us-central1-b", "us-central1", None);
        assert_eq!(cluster.zone(), "us-central1-b");
    }

    #[test]
    fn test_encoded_ca_certificate_without_master_auth() {
        let cluster = make_cluster("us-central1-b", "", None);
        assert_eq!(cluster.encoded_ca_certificate(), "");
    }

    #[test]
    fn test_server_url() {
        let cluster = make_cluster("us-central1-b", "", None);
        assert_eq!(cluster.server_url(), "https://1.2.3.4");
    }
}
