// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for target cluster client resolution and namespace management.

pub mod client;
pub mod namespaces;

pub use client::{resolve_client_config, ClientFactory, KubeClientFactory};
pub use namespaces::{create_namespace, validate_namespace_name};
