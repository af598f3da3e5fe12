//! The per-artifact reservation pipeline.
//!
//! [`ReservationPipeline::process`] takes one matched artifact's content and
//! drives the remaining stages: decode the result document, reconstruct the
//! range context around the first assigned address, build the reservation
//! request, and replay it against the store. The stages stop at the first
//! failure and the whole attempt collapses into a single [`ArtifactOutcome`].

use std::net::IpAddr;
use std::path::PathBuf;

use tracing::debug;

use reclaim_range::{AddressRange, Network, RangeBounder};
use reclaim_store::Reserver;
use reclaim_types::{
    Action, AttachmentId, Datastore, KubernetesConfig, ReservationRequest, ReservedAddress,
};

use crate::decoder::decode_result;
use crate::error::EngineError;
use crate::outcome::{ArtifactOutcome, FailureStage};

/// Decode → range → reserve for one artifact.
pub struct ReservationPipeline<'a> {
    bounder: &'a dyn RangeBounder,
    reserver: &'a dyn Reserver,
    /// Cluster connection parameters carried opaquely into every request.
    kubeconfig: PathBuf,
}

impl<'a> ReservationPipeline<'a> {
    pub fn new(
        bounder: &'a dyn RangeBounder,
        reserver: &'a dyn Reserver,
        kubeconfig: PathBuf,
    ) -> Self {
        Self {
            bounder,
            reserver,
            kubeconfig,
        }
    }

    /// Process one artifact's content into an outcome. Never panics, never
    /// propagates: every failure is folded into `ArtifactOutcome::Failed`.
    pub fn process(
        &self,
        file: &str,
        owner: AttachmentId,
        contents: &[u8],
    ) -> ArtifactOutcome {
        match self.try_process(&owner, contents) {
            Ok((address, range)) => ArtifactOutcome::Reserved {
                file: file.to_string(),
                owner,
                address,
                range,
            },
            Err((stage, error)) => ArtifactOutcome::Failed {
                file: file.to_string(),
                stage,
                error,
            },
        }
    }

    fn try_process(
        &self,
        owner: &AttachmentId,
        contents: &[u8],
    ) -> Result<(String, AddressRange), (FailureStage, EngineError)> {
        let result = decode_result(contents).map_err(|e| (FailureStage::Decode, e))?;
        let entry = result
            .first_ip()
            .map_err(|e| (FailureStage::Decode, e.into()))?;

        let (host, network) = reclaim_range::parse_cidr(&entry.address)
            .map_err(|e| (FailureStage::Range, e.into()))?;
        let (first, last) = self
            .bounder
            .bounds(network.base(), &network)
            .map_err(|e| (FailureStage::Range, e.into()))?;
        let range = AddressRange {
            cidr: network.to_string(),
            first,
            last,
        };

        let request = self.build_request(host, &network, &range);
        debug!(
            address = %host,
            range = %range.cidr,
            first = %range.first,
            last = %range.last,
            owner = %owner,
            "reserving address"
        );
        self.reserver
            .reserve(Action::Reserve, &request, owner)
            .map_err(|e| (FailureStage::Reserve, e.into()))?;

        Ok((host.to_string(), range))
    }

    fn build_request(
        &self,
        host: IpAddr,
        network: &Network,
        range: &AddressRange,
    ) -> ReservationRequest {
        ReservationRequest {
            range: range.cidr.clone(),
            range_start: range.first,
            range_end: range.last,
            addresses: vec![ReservedAddress {
                address: host.to_string(),
                ip: host,
                prefix: network.prefix(),
            }],
            datastore: Datastore::Kubernetes,
            kubernetes: KubernetesConfig {
                kubeconfig_path: self.kubeconfig.clone(),
            },
        }
    }
}
