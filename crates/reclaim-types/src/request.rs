//! The reservation request handed to an allocation store.
//!
//! A request describes exactly one address to re-register plus the range
//! context the allocator needs: the containing CIDR, its first and last
//! addresses, the backend selector and opaque backend connection parameters.

use std::net::IpAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Store operation selector.
///
/// The recovery workflow only ever issues `Reserve`; the enum exists so the
/// store contract can grow release/verify actions without changing shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reserve,
}

/// Backend selector for the external allocation store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Datastore {
    /// Cluster-backed store; connection parameters in [`KubernetesConfig`].
    Kubernetes,
}

/// Connection parameters for a cluster-backed store.
///
/// Opaque to this workflow: sourced from the environment and passed through
/// to whichever store implementation is wired in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubernetesConfig {
    pub kubeconfig_path: PathBuf,
}

/// One address to reserve: its original string form plus the parsed address
/// and the prefix length of its containing network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedAddress {
    pub address: String,
    pub ip: IpAddr,
    pub prefix: u8,
}

/// The allocator configuration for a single reservation replay.
///
/// Exactly one entry in `addresses` per request in this workflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Containing network in CIDR form, e.g. "24.51.17.120/29".
    pub range: String,
    /// First address of the range (network base).
    pub range_start: IpAddr,
    /// Last address of the range (broadcast / end of range).
    pub range_end: IpAddr,
    /// Addresses to mark allocated.
    pub addresses: Vec<ReservedAddress>,
    /// Which backend the request targets.
    pub datastore: Datastore,
    /// Cluster connection parameters, pass-through only.
    pub kubernetes: KubernetesConfig,
}
