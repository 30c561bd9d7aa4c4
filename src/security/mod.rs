//! Signed request verification for Image Guard.
//!
//! A sender holding the shared key prefixes the encoded payload in the last
//! path segment with an HMAC of that payload:
//!
//! ```text
//! /<hex digest><separator><base64 payload>
//! ```
//!
//! The separator is a protocol constant shared with whatever signs requests.
//! Both sides must agree on it.
//!
//! - Path: splits the digest from the payload
//! - Digest: keyed digest algorithms and constant-time comparison
//! - Verifier: the accept / reject / verify decision table
//! - Signer: produces signed paths the verifier accepts

mod digest;
mod path;
mod signer;
mod verifier;

pub use digest::*;
pub use path::*;
pub use signer::*;
pub use verifier::*;
