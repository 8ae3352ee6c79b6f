// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{NamespacerError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{info, instrument};

const MAX_NAMESPACE_LENGTH: usize = 63;

/// Check a namespace name is a DNS-1123 label: lowercase alphanumerics and
/// '-', at most 63 characters, starting and ending with an alphanumeric
pub fn validate_namespace_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(NamespacerError::InvalidNamespaceName(
            "namespace name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAMESPACE_LENGTH {
        return Err(NamespacerError::InvalidNamespaceName(format!(
            "{} is longer than {} characters",
            name, MAX_NAMESPACE_LENGTH
        )));
    }

    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    if !name.chars().all(|c| allowed(c) || c == '-')
        || !name.starts_with(allowed)
        || !name.ends_with(allowed)
    {
        return Err(NamespacerError::InvalidNamespaceName(format!(
            "{} must consist of lowercase alphanumeric characters or '-', and start and end with an alphanumeric character",
            name
        )));
    }

    Ok(())
}

/// Create a namespace carrying nothing but its name.
///
/// An existing namespace is reported as an error, not as success.
#[instrument(skip(client))]
pub async fn create_namespace(
    client: &Client,
    cluster_id: &str,
    namespace: &str,
) -> Result<String> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let ns = Namespace {
        metadata: ObjectMeta {
            name: Some(namespace.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let created = namespaces
        .create(&PostParams::default(), &ns)
        .await
        .map_err(|source| NamespacerError::NamespaceCreate {
            namespace: namespace.to_string(),
            cluster: cluster_id.to_string(),
            source,
        })?;

    let name = created.name_any();
    info!("Created namespace {} on cluster {}", name, cluster_id);
    Ok(name)
}
