// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the deployment verifier.
//!
//! Defaults describe the lab deployment: an nginx container reachable as
//! `nginx-server` on the compose network, rate limited to 5 r/s with a
//! burst of 5.

use std::time::Duration;

/// Hostname of the server under test (container-network DNS name).
pub const DEFAULT_HOST: &str = "nginx-server";
/// Port expected to answer 200.
pub const DEFAULT_MAIN_PORT: u16 = 8080;
/// Port expected to answer 500.
pub const DEFAULT_ERROR_PORT: u16 = 8081;
/// TLS port expected to answer 200.
pub const DEFAULT_SECURE_PORT: u16 = 443;
/// Delay before the first check, lets nginx bring its listeners up.
pub const DEFAULT_WARMUP_MS: u64 = 2000;
/// Timeout for status and TLS requests.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
/// Timeout for each request of the burst.
pub const DEFAULT_BURST_REQUEST_TIMEOUT_MS: u64 = 1000;
/// Requests in the burst; well above rate 5 + burst 5.
pub const DEFAULT_BURST_SIZE: u32 = 20;

/// Configuration for a verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host serving all three endpoints (default: nginx-server)
    pub host: String,

    /// Plain HTTP port expected to answer 200 (default: 8080)
    pub main_port: u16,

    /// Plain HTTP port expected to answer 500 (default: 8081)
    pub error_port: u16,

    /// HTTPS port expected to answer 200 (default: 443)
    pub secure_port: u16,

    /// Warm-up delay before the first check in milliseconds (default: 2000)
    pub warmup_ms: u64,

    /// Per-request timeout for status and TLS checks in milliseconds (default: 5000)
    pub request_timeout_ms: u64,

    /// Per-request timeout during the burst in milliseconds (default: 1000)
    pub burst_request_timeout_ms: u64,

    /// Maximum requests sent while probing the rate limiter (default: 20)
    pub burst_size: u32,

    /// Accept self-signed or otherwise untrusted certificates on the
    /// secure endpoint (default: true).
    ///
    /// The lab deployment has no private CA, so the TLS check only proves
    /// that a handshake completes. Turn this off against deployments with
    /// a trusted certificate chain.
    pub accept_invalid_certs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            main_port: DEFAULT_MAIN_PORT,
            error_port: DEFAULT_ERROR_PORT,
            secure_port: DEFAULT_SECURE_PORT,
            warmup_ms: DEFAULT_WARMUP_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            burst_request_timeout_ms: DEFAULT_BURST_REQUEST_TIMEOUT_MS,
            burst_size: DEFAULT_BURST_SIZE,
            accept_invalid_certs: true,
        }
    }
}

impl Config {
    /// Get the warm-up duration
    pub fn warmup(&self) -> Duration {
        Duration::from_millis(self.warmup_ms)
    }

    /// Get the status/TLS request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Get the per-request timeout used during the burst
    pub fn burst_request_timeout(&self) -> Duration {
        Duration::from_millis(self.burst_request_timeout_ms)
    }
}
