// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! TLS check for the secure endpoint.

use crate::console::Console;
use crate::endpoints::Endpoint;
use crate::error::{CheckError, CheckResult};
use crate::probe::Prober;
use reqwest::StatusCode;
use std::io::Write;
use std::time::Duration;

/// Passes when the TLS handshake completes and the endpoint answers 200.
///
/// Whether untrusted certificates are accepted is decided when the
/// [`Prober`] is built.
pub async fn check_secure_channel<W: Write>(
    prober: &Prober,
    timeout: Duration,
    console: &mut Console<W>,
) -> CheckResult {
    let endpoint = Endpoint::HttpsSecure;
    let port = prober.endpoints().port(endpoint);
    let actual = prober.get(endpoint, timeout).await?;

    if actual != StatusCode::OK {
        return Err(CheckError::UnexpectedStatus {
            endpoint,
            port,
            expected: StatusCode::OK,
            actual,
        });
    }

    console.pass(format_args!(
        "HTTPS port {port}: handshake successful and returned {actual}"
    ));
    Ok(())
}
