// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Status code check for the two plain HTTP ports.
//!
//! The main server must answer 200 and the dedicated error server must
//! answer 500. The main endpoint is checked first; a mismatch there ends
//! the check without touching the error endpoint.

use crate::console::Console;
use crate::endpoints::Endpoint;
use crate::error::{CheckError, CheckResult};
use crate::probe::Prober;
use reqwest::StatusCode;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

/// Expected status per plain endpoint, in request order.
const EXPECTATIONS: [(Endpoint, StatusCode); 2] = [
    (Endpoint::HttpMain, StatusCode::OK),
    (Endpoint::HttpError, StatusCode::INTERNAL_SERVER_ERROR),
];

/// Run the status code check. One attempt per endpoint, no retries.
pub async fn check_status_codes<W: Write>(
    prober: &Prober,
    timeout: Duration,
    console: &mut Console<W>,
) -> CheckResult {
    for (endpoint, expected) in EXPECTATIONS {
        let port = prober.endpoints().port(endpoint);
        let actual = prober.get(endpoint, timeout).await?;

        if actual != expected {
            return Err(CheckError::UnexpectedStatus {
                endpoint,
                port,
                expected,
                actual,
            });
        }

        debug!(%endpoint, port, status = actual.as_u16(), "status matched");
        console.pass(format_args!("Port {port}: returned {actual}"));
    }

    Ok(())
}
