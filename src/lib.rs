//! Image Guard - signed request verification for image handlers.
//!
//! Image requests carry a base64 JSON instruction in their URL path. Senders
//! holding a shared key prefix it with an HMAC digest; this crate checks that
//! digest before the request is handed to the image decoder.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod security;

use std::sync::Arc;

use crate::security::VerificationConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolved signing policy.
    pub verification: Arc<VerificationConfig>,
}

impl AppState {
    pub fn new(verification: VerificationConfig) -> Self {
        Self {
            verification: Arc::new(verification),
        }
    }
}
