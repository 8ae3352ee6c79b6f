// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod gke;
pub mod inventory;
pub mod kubernetes;
pub mod provisioner;
pub mod server;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
