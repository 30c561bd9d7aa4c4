//! Keyed digests over encoded payloads.

use std::fmt;
use std::str::FromStr;

use hmac::{digest::KeyInit, Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

/// HMAC hash functions a deployment may sign requests with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// Kept as the default so existing signers keep working.
    #[default]
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of the hex-encoded digest.
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 40,
            DigestAlgorithm::Sha224 => 56,
            DigestAlgorithm::Sha256 => 64,
            DigestAlgorithm::Sha384 => 96,
            DigestAlgorithm::Sha512 => 128,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported digest algorithm: {0}")]
pub struct UnsupportedAlgorithm(pub String);

impl FromStr for DigestAlgorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha224" => Ok(DigestAlgorithm::Sha224),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Compute the HMAC of `message` under `key`, lowercase hex.
pub fn keyed_digest(algorithm: DigestAlgorithm, key: &[u8], message: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Sha1 => hmac_hex::<Hmac<Sha1>>(key, message),
        DigestAlgorithm::Sha224 => hmac_hex::<Hmac<Sha224>>(key, message),
        DigestAlgorithm::Sha256 => hmac_hex::<Hmac<Sha256>>(key, message),
        DigestAlgorithm::Sha384 => hmac_hex::<Hmac<Sha384>>(key, message),
        DigestAlgorithm::Sha512 => hmac_hex::<Hmac<Sha512>>(key, message),
    }
}

fn hmac_hex<M>(key: &[u8], message: &[u8]) -> String
where
    M: Mac + KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Exact, case-sensitive digest comparison in constant time.
///
/// Differing lengths compare unequal.
pub fn digests_match(expected: &str, supplied: &str) -> bool {
    expected.as_bytes().ct_eq(supplied.as_bytes()).into()
}
