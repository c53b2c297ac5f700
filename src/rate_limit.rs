// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rate limiting check.
//!
//! The server is expected to run a token bucket of 5 r/s with a burst of
//! 5. Requests are sent back to back, one at a time, against the main
//! endpoint until the limiter answers 503 or the burst is exhausted.

use crate::console::Console;
use crate::endpoints::Endpoint;
use crate::error::{CheckError, CheckResult};
use crate::probe::Prober;
use reqwest::StatusCode;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What the burst observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BurstReport {
    /// Requests issued, including failed ones
    pub attempts: u32,
    /// Responses with a 2xx status
    pub ok: u32,
    /// Responses with any other non-503 status
    pub other_status: u32,
    /// Requests that produced no response (timeout, reset, refused)
    pub transport_errors: u32,
    /// 1-based attempt that was answered with 503, if any
    pub throttled_at: Option<u32>,
    /// Wall time spent on the burst
    pub elapsed: Duration,
}

impl BurstReport {
    /// True once the limiter rejected a request.
    pub fn is_throttled(&self) -> bool {
        self.throttled_at.is_some()
    }
}

/// Send up to `burst_size` sequential GETs to the main endpoint.
///
/// Stops at the first 503. Transport errors count as "not yet throttled"
/// and the burst continues.
pub async fn run_burst(prober: &Prober, burst_size: u32, timeout: Duration) -> BurstReport {
    let mut report = BurstReport::default();
    let start = Instant::now();

    for attempt in 1..=burst_size {
        report.attempts = attempt;

        match prober.get(Endpoint::HttpMain, timeout).await {
            Ok(status) if status == StatusCode::SERVICE_UNAVAILABLE => {
                debug!(attempt, "throttled");
                report.throttled_at = Some(attempt);
                break;
            }
            Ok(status) if status.is_success() => report.ok += 1,
            Ok(status) => {
                debug!(attempt, status = status.as_u16(), "unexpected status during burst");
                report.other_status += 1;
            }
            Err(e) => {
                debug!(attempt, error = %e, "request failed during burst, continuing");
                report.transport_errors += 1;
            }
        }
    }

    report.elapsed = start.elapsed();
    report
}

/// Run the rate limiting check.
pub async fn check_rate_limiting<W: Write>(
    prober: &Prober,
    burst_size: u32,
    timeout: Duration,
    console: &mut Console<W>,
) -> CheckResult {
    console.info(format_args!(
        "Simulating traffic spike ({burst_size} requests)..."
    ));

    let report = run_burst(prober, burst_size, timeout).await;
    info!(
        attempts = report.attempts,
        ok = report.ok,
        other_status = report.other_status,
        transport_errors = report.transport_errors,
        throttled = report.is_throttled(),
        throttled_at = ?report.throttled_at,
        elapsed = ?report.elapsed,
        "burst finished"
    );

    match report.throttled_at {
        Some(attempt) => {
            console.pass(format_args!(
                "Rate limiting active: 503 Service Unavailable on request {attempt} ({} allowed before)",
                report.ok
            ));
            Ok(())
        }
        None => Err(CheckError::NotThrottled {
            attempts: report.attempts,
        }),
    }
}
