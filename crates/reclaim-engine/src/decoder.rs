//! Strict decoding of artifact content into an [`AttachmentResult`].

use reclaim_types::AttachmentResult;

use crate::error::EngineResult;

/// Parse raw artifact bytes into a structured attachment result.
///
/// Decoding is strict: anything that is not a valid JSON result document is
/// an error for the caller to contain. Fields the workflow does not consume
/// (routes, dns, extra interfaces) are accepted and carried unused.
pub fn decode_result(contents: &[u8]) -> EngineResult<AttachmentResult> {
    Ok(serde_json::from_slice(contents)?)
}
