// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{gke, server};
use anyhow::{ensure, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Process configuration, read once at startup from flags or environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "gke-namespacer", version)]
pub struct Config {
    /// Project whose clusters are discovered
    #[arg(long, env = "PROJECT_ID")]
    pub project_id: String,

    /// Cluster identifier (gke_<project>_<zone>_<name>) namespaces are created on
    #[arg(long, env = "TARGET_CLUSTER")]
    pub target_cluster: String,

    #[arg(long, env = "LISTEN_ADDR", default_value = server::DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Deadline in seconds for each call against the target cluster
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = server::DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, env = "CONTAINER_API_URL", default_value = gke::DEFAULT_API_URL)]
    pub container_api_url: Url,

    /// Print the discovered clusters as a kubeconfig document and exit
    #[arg(long)]
    pub print_kubeconfig: bool,
}

impl Config {
    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.project_id.trim().is_empty(), "project id must not be empty");
        ensure!(
            !self.target_cluster.trim().is_empty(),
            "target cluster must not be empty"
        );
        ensure!(
            self.request_timeout_secs > 0,
            "request timeout must be greater than zero"
        );
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
