// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wire types of the cluster-management API.

pub mod cluster;

pub use cluster::{GkeCluster, ListClustersResponse, MasterAuth};
