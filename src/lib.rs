// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Deployment Verifier
//!
//! This crate checks a running web-server deployment from the outside:
//!
//! - Port 8080 answers 200 and port 8081 answers 500
//! - Port 443 completes a TLS handshake and answers 200
//! - A burst of 20 requests against port 8080 trips the rate limiter (503)
//!
//! Checks run one after another and reduce to a single [`Verdict`], which
//! the binary maps onto the process exit code for CI pipelines.

pub mod config;
pub mod console;
pub mod endpoints;
pub mod error;
pub mod probe;
pub mod rate_limit;
pub mod runner;
pub mod secure;
pub mod status;

pub use config::Config;
pub use endpoints::{Endpoint, EndpointSet};
pub use error::{CheckError, CheckResult};
pub use runner::{CheckKind, Runner, Verdict};
