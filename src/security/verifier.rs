//! Request verifier - checks the HMAC carried in a signed image path.
//!
//! Evaluation is a fixed decision table over three inputs, first match wins:
//!
//! | required | key set | digest in path | outcome                      |
//! |----------|---------|----------------|------------------------------|
//! | yes      | no      | any            | `HmacCompulsoryNoKey`        |
//! | yes      | yes     | no             | `HmacCompulsoryNoneProvided` |
//! | any      | no      | yes            | `HmacProvidedKeyMissing`     |
//! | any      | yes     | yes            | verify digest                |
//! | no       | any     | no             | accept unchanged             |

use crate::error::{SecurityError, SecurityResult};
use crate::request::ImageRequest;
use crate::security::{digests_match, keyed_digest, split_last_segment, DigestAlgorithm};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '.';

/// Resolved verification settings, supplied on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationConfig {
    /// HMAC hash function.
    pub algorithm: DigestAlgorithm,
    /// Shared secret. Empty counts as unset.
    pub shared_key: Option<String>,
    /// Whether every request must carry a valid digest.
    pub digest_required: bool,
    /// Character between digest and payload. Must match the signer.
    pub separator: char,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::default(),
            shared_key: None,
            digest_required: false,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl VerificationConfig {
    /// The shared key, if one is configured and non-empty.
    pub fn key(&self) -> Option<&str> {
        self.shared_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// Verify a request against the configured signing policy.
///
/// On success returns the request with the digest and separator stripped
/// from its path, or unchanged when it carried no digest and none is
/// required. All other fields pass through.
pub fn verify(request: ImageRequest, config: &VerificationConfig) -> SecurityResult<ImageRequest> {
    let key = config.key();
    let split = split_last_segment(&request.path, config.separator);

    let rejection = match (config.digest_required, key, split) {
        (true, None, _) => SecurityError::HmacCompulsoryNoKey,
        (true, Some(_), None) => SecurityError::HmacCompulsoryNoneProvided,
        (_, None, Some(_)) => SecurityError::HmacProvidedKeyMissing,
        (_, Some(key), Some(split)) => {
            let expected = keyed_digest(
                config.algorithm,
                key.as_bytes(),
                split.encoded_payload.as_bytes(),
            );

            if digests_match(&expected, split.digest) {
                tracing::debug!(algorithm = %config.algorithm, "Request digest verified");
                let path = format!("/{}", split.encoded_payload);
                return Ok(request.with_path(path));
            }
            SecurityError::HmacProvidedMismatch
        }
        (false, _, None) => return Ok(request),
    };

    tracing::warn!(
        code = rejection.code(),
        digest_required = config.digest_required,
        key_configured = key.is_some(),
        "Request signature rejected"
    );
    Err(rejection)
}
