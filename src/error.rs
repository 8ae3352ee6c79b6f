// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamespacerError {
    #[error("Cluster discovery failed: {0}")]
    Discovery(String),

    #[error("Malformed certificate for cluster {cluster}: {source}")]
    MalformedEntry {
        cluster: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Config resolution failed: {0}")]
    ConfigResolution(String),

    #[error("Invalid configuration for cluster {cluster}: {reason}")]
    InvalidClusterConfig { cluster: String, reason: String },

    #[error("Client construction failed: {0}")]
    ClientConstruction(String),

    #[error("Failed to create namespace {namespace} on cluster {cluster}: {source}")]
    NamespaceCreate {
        namespace: String,
        cluster: String,
        #[source]
        source: kube::Error,
    },

    #[error("Invalid namespace name: {0}")]
    InvalidNamespaceName(String),
}

impl NamespacerError {
    /// HTTP status reported to the caller for this failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            NamespacerError::InvalidNamespaceName(_) => StatusCode::BAD_REQUEST,
            NamespacerError::ConfigResolution(_) => StatusCode::NOT_FOUND,
            NamespacerError::NamespaceCreate { source, .. } => match source {
                kube::Error::Api(resp) => match resp.code {
                    403 => StatusCode::FORBIDDEN,
                    409 => StatusCode::CONFLICT,
                    422 => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::BAD_GATEWAY,
                },
                _ => StatusCode::BAD_GATEWAY,
            },
            NamespacerError::ClientConstruction(_)
            | NamespacerError::InvalidClusterConfig { .. }
            | NamespacerError::Discovery(_)
            | NamespacerError::MalformedEntry { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for NamespacerError {
    fn into_response(self) -> Response {
        (self.status_code(), format!("{}\n", self)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, NamespacerError>;
