//! Request signer - the sending side of the protocol.

use crate::security::{keyed_digest, DigestAlgorithm};

/// Build a signed path for an encoded payload.
///
/// Produces `/<digest><separator><payload>`, which [`verify`](crate::security::verify)
/// accepts under the same algorithm, key and separator.
pub fn sign_path(
    encoded_payload: &str,
    algorithm: DigestAlgorithm,
    key: &str,
    separator: char,
) -> String {
    let digest = keyed_digest(algorithm, key.as_bytes(), encoded_payload.as_bytes());
    format!("/{digest}{separator}{encoded_payload}")
}
