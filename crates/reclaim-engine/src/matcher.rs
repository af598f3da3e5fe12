//! Artifact name matching and attachment-id extraction.
//!
//! Result files follow a fixed convention, e.g.
//!
//! - `sriov-public-net-2941353d…f77-net1`
//! - `sriov-public-nd-sjc6o-02-net-b5679ae7…e90-net1`
//!
//! The long alphanumeric segment between `-net-` and the interface-slot
//! suffix is the pause-container id, which becomes the [`AttachmentId`].

use regex::Regex;

use reclaim_types::AttachmentId;

use crate::error::EngineResult;

/// Name prefix of the backend/network family this tool recovers.
pub const DEFAULT_PREFIX: &str = "sriov-public";

/// Recognizes result artifacts by name and extracts the attachment id.
///
/// The pattern is anchored at both ends so unrelated files carrying the
/// convention as a substring never match: `^{prefix}[a-z0-9-]*-net-([a-z0-9]+)-net[12]$`.
/// The prefix is configurable so other backend families can reuse the batch
/// machinery; the rest of the convention is fixed.
#[derive(Clone, Debug)]
pub struct ArtifactMatcher {
    pattern: Regex,
}

impl ArtifactMatcher {
    /// Compile a matcher for the given name prefix.
    pub fn new(prefix: &str) -> EngineResult<Self> {
        let pattern = Regex::new(&format!(
            "^{}[a-z0-9-]*-net-([a-z0-9]+)-net[12]$",
            regex::escape(prefix)
        ))?;
        Ok(Self { pattern })
    }

    /// Extract the attachment id from a file name, or `None` if the name is
    /// not a result artifact of this family. No side effects.
    pub fn attachment_id(&self, file_name: &str) -> Option<AttachmentId> {
        let captures = self.pattern.captures(file_name)?;
        // The capture group is [a-z0-9]+, which AttachmentId accepts.
        AttachmentId::new(&captures[1]).ok()
    }
}

impl Default for ArtifactMatcher {
    fn default() -> Self {
        // Safe to expect: the default prefix is a known-good literal.
        Self::new(DEFAULT_PREFIX).expect("default artifact pattern is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_plain_name() {
        let matcher = ArtifactMatcher::default();
        let id = matcher
            .attachment_id(
                "sriov-public-net-2941353d3bdc0284887261614d809a03685ca07dc753132ad28c118f3df37f77-net1",
            )
            .unwrap();
        assert_eq!(
            id.as_str(),
            "2941353d3bdc0284887261614d809a03685ca07dc753132ad28c118f3df37f77"
        );
    }

    #[test]
    fn extracts_id_from_name_with_site_segment() {
        let matcher = ArtifactMatcher::default();
        let id = matcher
            .attachment_id(
                "sriov-public-nd-sjc6o-02-net-b5679ae7dd8205464f2accb1a18c568d7b62d5a9d4b10801069d99efa0f00e90-net1",
            )
            .unwrap();
        assert_eq!(
            id.as_str(),
            "b5679ae7dd8205464f2accb1a18c568d7b62d5a9d4b10801069d99efa0f00e90"
        );
    }

    #[test]
    fn matches_both_interface_slots() {
        let matcher = ArtifactMatcher::default();
        assert!(matcher
            .attachment_id("sriov-public-net-abc123-net1")
            .is_some());
        assert!(matcher
            .attachment_id("sriov-public-net-abc123-net2")
            .is_some());
        assert!(matcher
            .attachment_id("sriov-public-net-abc123-net3")
            .is_none());
    }

    #[test]
    fn id_is_the_segment_between_separator_and_suffix() {
        // Greedy variable segment: the id is everything after the *last*
        // "-net-" before the slot suffix.
        let matcher = ArtifactMatcher::default();
        let id = matcher
            .attachment_id("sriov-public-a-net-b-net-c0ffee-net2")
            .unwrap();
        assert_eq!(id.as_str(), "c0ffee");
    }

    #[test]
    fn rejects_unrelated_names() {
        let matcher = ArtifactMatcher::default();
        for name in [
            "lo",
            "eth0.conf",
            "sriov-private-net-abc123-net1",
            "sriov-public-net-abc123",
            "sriov-public-net--net1",
        ] {
            assert!(matcher.attachment_id(name).is_none(), "{name}");
        }
    }

    #[test]
    fn anchoring_forbids_substring_collisions() {
        let matcher = ArtifactMatcher::default();
        assert!(matcher
            .attachment_id("backup-sriov-public-net-abc123-net1")
            .is_none());
        assert!(matcher
            .attachment_id("sriov-public-net-abc123-net1.bak")
            .is_none());
    }

    #[test]
    fn rejects_uppercase_ids() {
        let matcher = ArtifactMatcher::default();
        assert!(matcher
            .attachment_id("sriov-public-net-ABC123-net1")
            .is_none());
    }

    #[test]
    fn custom_prefix_swaps_the_family() {
        let matcher = ArtifactMatcher::new("macvlan-storage").unwrap();
        assert!(matcher
            .attachment_id("macvlan-storage-net-abc123-net1")
            .is_some());
        assert!(matcher
            .attachment_id("sriov-public-net-abc123-net1")
            .is_none());
    }

    #[test]
    fn prefix_is_escaped_literally() {
        // A '.' in the prefix must not act as a regex wildcard.
        let matcher = ArtifactMatcher::new("net.family").unwrap();
        assert!(matcher
            .attachment_id("netxfamily-net-abc123-net1")
            .is_none());
        assert!(matcher
            .attachment_id("net.family-net-abc123-net1")
            .is_some());
    }
}
