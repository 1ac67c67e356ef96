use crate::hash::config::PARAMS_COMMITMENT_DOMAIN_TAG;
use crate::hash::hash_with_family;

use super::ser::serialize_params;
use super::LpcParams;

/// Computes the canonical parameter digest for an [`LpcParams`] instance.
///
/// The digest uses the configured hash family over
/// `PARAMS_COMMITMENT_DOMAIN_TAG || serialize_params(params)`, with the
/// grinding search bound zeroed: it only limits the prover's effort and
/// must not split otherwise compatible parameter sets.
pub fn params_hash(params: &LpcParams) -> [u8; 32] {
    let mut normalized = params.clone();
    normalized.grinding.max_attempts = 0;
    let payload = serialize_params(&normalized);
    let mut prefixed = Vec::with_capacity(PARAMS_COMMITMENT_DOMAIN_TAG.len() + payload.len());
    prefixed.extend_from_slice(PARAMS_COMMITMENT_DOMAIN_TAG);
    prefixed.extend_from_slice(&payload);
    hash_with_family(params.hash, &prefixed).into_bytes()
}
