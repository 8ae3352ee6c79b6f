// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP boundary: namespace creation on the configured target cluster and a
//! liveness response on every other path.

use crate::constants::server::LIVENESS_BODY;
use crate::error::NamespacerError;
use crate::provisioner::NamespaceProvisioner;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Shared, read-only request handling state
#[derive(Clone)]
pub struct AppState {
    provisioner: Arc<NamespaceProvisioner>,
    target_cluster: Arc<str>,
}

impl AppState {
    pub fn new(provisioner: NamespaceProvisioner, target_cluster: &str) -> Self {
        Self {
            provisioner: Arc::new(provisioner),
            target_cluster: Arc::from(target_cluster),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNamespaceParams {
    #[serde(default)]
    name: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/createnamespace", get(create_namespace_handler))
        .route("/createnamespace/", get(create_namespace_handler))
        .fallback(liveness_handler)
        .with_state(state)
}

/// Serve until Ctrl-C or SIGTERM
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn liveness_handler() -> &'static str {
    LIVENESS_BODY
}

async fn create_namespace_handler(
    State(state): State<AppState>,
    Query(params): Query<CreateNamespaceParams>,
) -> Result<(StatusCode, String), NamespacerError> {
    let Some(name) = params.name.filter(|n| !n.is_empty()) else {
        warn!("Url param 'name' is missing");
        return Err(NamespacerError::InvalidNamespaceName(
            "url param 'name' is missing".to_string(),
        ));
    };

    let cluster = &*state.target_cluster;
    info!("Attempting to create namespace {} on cluster {}", name, cluster);

    match state.provisioner.create_namespace(cluster, &name).await {
        Ok(created) => Ok((
            StatusCode::CREATED,
            format!("Created namespace {} on cluster {}\n", created, cluster),
        )),
        Err(e) => {
            error!("Failed to create namespace {} on cluster {}: {}", name, cluster, e);
            Err(e)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
