//! The attachment identifier and the decoded CNI result document.
//!
//! A result artifact on disk is a JSON document written by a CNI plugin when
//! an attachment was created. Only the first assigned address is consumed by
//! the recovery workflow; everything else (routes, dns, extra interfaces) is
//! decoded and carried but unused.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque identifier of a single network attachment.
///
/// Extracted from a result-file name (the pause-container id segment). It is
/// the ownership key the external store uses to make repeated reservation
/// calls idempotent. Always non-empty lowercase alphanumerics; deserializing
/// goes through [`AttachmentId::new`] so a hand-edited ledger cannot smuggle
/// in an invalid id.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttachmentId(String);

impl AttachmentId {
    /// Validate and wrap an identifier.
    ///
    /// Accepts non-empty strings of lowercase ASCII alphanumerics, the only
    /// form the artifact naming convention can produce.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidAttachmentId {
                id,
                reason: "empty".to_string(),
            });
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(TypeError::InvalidAttachmentId {
                id,
                reason: "expected lowercase alphanumerics".to_string(),
            });
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AttachmentId {
    type Error = TypeError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<AttachmentId> for String {
    fn from(id: AttachmentId) -> Self {
        id.0
    }
}

impl fmt::Debug for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttachmentId({})", self.0)
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decoded form of an on-disk CNI result document.
///
/// Unknown fields in the document are ignored; the workflow only requires
/// `ips[0].address` to be present and well-formed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentResult {
    /// Document schema version, e.g. "0.4.0".
    #[serde(rename = "cniVersion", default)]
    pub cni_version: String,
    /// Interfaces created for the attachment, in creation order.
    #[serde(default)]
    pub interfaces: Vec<InterfaceEntry>,
    /// Addresses assigned to the attachment, in assignment order.
    #[serde(default)]
    pub ips: Vec<IpEntry>,
    /// Routes installed for the attachment. Unused here.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl AttachmentResult {
    /// The first assigned address, or an error if none was recorded.
    ///
    /// Multi-address attachments are deliberately reduced to their first
    /// entry; the recovery workflow replays one reservation per artifact.
    pub fn first_ip(&self) -> Result<&IpEntry, TypeError> {
        self.ips.first().ok_or(TypeError::NoAssignedAddress)
    }
}

/// A single interface record inside a result document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceEntry {
    #[serde(default)]
    pub name: String,
    /// Hardware address, e.g. "02:00:00:2e:3f:75".
    #[serde(default)]
    pub mac: String,
    /// Network namespace handle, e.g. "/proc/21545/ns/net".
    #[serde(default)]
    pub sandbox: String,
}

/// A single assigned address inside a result document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpEntry {
    /// Address family marker, "4" or "6".
    #[serde(default)]
    pub version: String,
    /// Index into `interfaces` this address belongs to.
    #[serde(default)]
    pub interface: Option<u32>,
    /// Assigned address in CIDR form, e.g. "24.51.17.125/29".
    pub address: String,
    /// Gateway for the address, if one was configured.
    #[serde(default)]
    pub gateway: Option<String>,
}

/// A route record inside a result document. Carried, never consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    #[serde(default)]
    pub dst: String,
    #[serde(default)]
    pub gw: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_id_accepts_lowercase_alphanumerics() {
        let id = AttachmentId::new("abc123").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn attachment_id_rejects_empty() {
        let err = AttachmentId::new("").unwrap_err();
        assert!(matches!(err, TypeError::InvalidAttachmentId { .. }));
    }

    #[test]
    fn attachment_id_rejects_uppercase_and_punctuation() {
        assert!(AttachmentId::new("ABC").is_err());
        assert!(AttachmentId::new("abc-123").is_err());
        assert!(AttachmentId::new("abc 123").is_err());
    }

    #[test]
    fn attachment_id_deserialization_validates() {
        // Deserialization goes through the constructor, so a hand-edited
        // ledger cannot materialize an invalid id.
        assert!(serde_json::from_str::<AttachmentId>("\"ABC-123\"").is_err());
        assert!(serde_json::from_str::<AttachmentId>("\"\"").is_err());

        let id: AttachmentId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }

    #[test]
    fn first_ip_returns_leading_entry() {
        let result = AttachmentResult {
            ips: vec![
                IpEntry {
                    address: "10.0.0.5/24".into(),
                    ..Default::default()
                },
                IpEntry {
                    address: "10.0.1.5/24".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(result.first_ip().unwrap().address, "10.0.0.5/24");
    }

    #[test]
    fn first_ip_on_empty_sequence_is_an_error() {
        let result = AttachmentResult::default();
        assert!(matches!(
            result.first_ip().unwrap_err(),
            TypeError::NoAssignedAddress
        ));
    }

    #[test]
    fn decodes_a_full_result_document() {
        let doc = r#"{
            "cniVersion": "0.4.0",
            "interfaces": [
                {"name": "net1", "mac": "02:00:00:2e:3f:75", "sandbox": "/proc/21545/ns/net"}
            ],
            "ips": [
                {"version": "4", "interface": 0, "address": "24.51.17.125/29", "gateway": "24.51.17.121"}
            ],
            "routes": [{"dst": "0.0.0.0/0"}],
            "dns": {}
        }"#;
        let result: AttachmentResult = serde_json::from_str(doc).unwrap();
        assert_eq!(result.cni_version, "0.4.0");
        assert_eq!(result.interfaces[0].name, "net1");
        assert_eq!(result.first_ip().unwrap().address, "24.51.17.125/29");
        assert_eq!(
            result.first_ip().unwrap().gateway.as_deref(),
            Some("24.51.17.121")
        );
        assert_eq!(result.routes[0].dst, "0.0.0.0/0");
    }

    #[test]
    fn serde_roundtrip() {
        let result = AttachmentResult {
            cni_version: "0.4.0".into(),
            ips: vec![IpEntry {
                version: "4".into(),
                interface: Some(0),
                address: "10.1.2.3/16".into(),
                gateway: None,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&result).unwrap();
        let parsed: AttachmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }
}
