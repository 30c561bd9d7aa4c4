//! Path splitting for signed requests.

/// Digest and payload carved out of the last path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPath<'a> {
    /// Hex digest supplied by the sender.
    pub digest: &'a str,
    /// Encoded payload the digest was computed over.
    pub encoded_payload: &'a str,
}

/// Split the final `/`-delimited segment of `path` once on `separator`.
///
/// Returns `None` when the final segment does not contain the separator,
/// i.e. the request carries no digest.
pub fn split_last_segment(path: &str, separator: char) -> Option<SplitPath<'_>> {
    let last = path.rsplit('/').next().unwrap_or(path);
    let (digest, encoded_payload) = last.split_once(separator)?;

    Some(SplitPath {
        digest,
        encoded_payload,
    })
}
