// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runs the checks in order and reduces them to a verdict.

use crate::config::Config;
use crate::console::Console;
use crate::endpoints::{Endpoint, EndpointSet};
use crate::error::{CheckError, CheckResult};
use crate::probe::Prober;
use crate::{rate_limit, secure, status};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// The checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    StatusCodes,
    SecureChannel,
    RateLimiting,
}

impl CheckKind {
    pub const ALL: [CheckKind; 3] = [Self::StatusCodes, Self::SecureChannel, Self::RateLimiting];

    fn title(self) -> &'static str {
        match self {
            Self::StatusCodes => "Running Functional Status Code Tests",
            Self::SecureChannel => "Running HTTPS Security Test",
            Self::RateLimiting => "Running Rate Limiting Security Test",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StatusCodes => write!(f, "status codes"),
            Self::SecureChannel => write!(f, "secure channel"),
            Self::RateLimiting => write!(f, "rate limiting"),
        }
    }
}

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct Verdict {
    results: Vec<(CheckKind, CheckResult)>,
}

impl Verdict {
    fn record(&mut self, kind: CheckKind, result: CheckResult) {
        self.results.push((kind, result));
    }

    /// True only when every check ran and passed.
    pub fn passed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|(_, r)| r.is_ok())
    }

    /// Result of a single check, if it ran.
    pub fn result(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.results
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| r)
    }

    /// Checks that failed, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = (CheckKind, &CheckError)> {
        self.results
            .iter()
            .filter_map(|(k, r)| r.as_ref().err().map(|e| (*k, e)))
    }

    /// 0 when everything passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

impl From<&Verdict> for ExitCode {
    fn from(verdict: &Verdict) -> Self {
        ExitCode::from(verdict.exit_code())
    }
}

/// Verification runner.
pub struct Runner {
    config: Config,
    prober: Prober,
}

impl Runner {
    /// Build the endpoint set and HTTP clients for `config`.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let endpoints = EndpointSet::from_config(&config)?;
        let prober = Prober::new(endpoints, config.accept_invalid_certs)?;
        Ok(Self { config, prober })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wait for the warm-up delay, then run every check in order.
    ///
    /// All checks run even after a failure so the report is complete.
    pub async fn run<W: Write>(&self, console: &mut Console<W>) -> Verdict {
        for endpoint in Endpoint::ALL {
            debug!(%endpoint, url = %self.prober.endpoints().url(endpoint), "target endpoint");
        }

        let warmup = self.config.warmup();
        if !warmup.is_zero() {
            info!(?warmup, "waiting for target to start");
            tokio::time::sleep(warmup).await;
        }

        let mut verdict = Verdict::default();
        for kind in CheckKind::ALL {
            console.section(kind.title());
            let result = self.run_check(kind, console).await;

            match &result {
                Ok(()) => info!(check = %kind, "check passed"),
                Err(e) => {
                    warn!(check = %kind, error = %e, "check failed");
                    report_failure(kind, e, console);
                }
            }
            verdict.record(kind, result);
        }

        console.verdict(verdict.passed());
        verdict
    }

    async fn run_check<W: Write>(&self, kind: CheckKind, console: &mut Console<W>) -> CheckResult {
        let config = &self.config;
        match kind {
            CheckKind::StatusCodes => {
                status::check_status_codes(&self.prober, config.request_timeout(), console).await
            }
            CheckKind::SecureChannel => {
                secure::check_secure_channel(&self.prober, config.request_timeout(), console).await
            }
            CheckKind::RateLimiting => {
                rate_limit::check_rate_limiting(
                    &self.prober,
                    config.burst_size,
                    config.burst_request_timeout(),
                    console,
                )
                .await
            }
        }
    }
}

fn report_failure<W: Write>(kind: CheckKind, err: &CheckError, console: &mut Console<W>) {
    match (kind, err.is_transport(), err.is_timeout()) {
        (CheckKind::StatusCodes, true, true) => {
            console.error(format_args!("Status tests timed out: {err}"))
        }
        (CheckKind::StatusCodes, true, false) => {
            console.error(format_args!("Status tests encountered a connection issue: {err}"))
        }
        (CheckKind::SecureChannel, true, true) => {
            console.fail(format_args!("HTTPS request timed out: {err}"))
        }
        (CheckKind::SecureChannel, true, false) => {
            console.fail(format_args!("HTTPS connection failed: {err}"))
        }
        _ => console.fail(err),
    }
}
