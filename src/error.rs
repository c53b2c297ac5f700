// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for verification checks

use crate::endpoints::Endpoint;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a check failed
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{endpoint} (port {port}): expected {expected}, got {actual}")]
    UnexpectedStatus {
        endpoint: Endpoint,
        port: u16,
        expected: StatusCode,
        actual: StatusCode,
    },

    #[error("{endpoint} (port {port}) request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        port: u16,
        #[source]
        source: reqwest::Error,
    },

    #[error("rate limiting not detected, server allowed all {attempts} requests")]
    NotThrottled { attempts: u32 },
}

impl CheckError {
    /// True for timeouts, refused connections, DNS and TLS failures, i.e.
    /// no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// True when the underlying transport failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// Result of a single check
pub type CheckResult = std::result::Result<(), CheckError>;
